//! Notification module for docview
//!
//! Provides a modal notification that displays a message until the user
//! presses a key. Any component in the application can use this module
//! to show notifications; search uses it for "No results found".

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationState};
