//! Mouse click handling
//!
//! Handles click events to change focus between UI components and to
//! drive the search controls.

use super::state::{App, Focus};
use crate::layout::Region;
use crate::search::search_events;

/// Handle left mouse button click for the given region
///
/// Routes click to change focus or activate components.
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::Content) => click_content(app),
        Some(Region::SearchInput) => click_search_input(app),
        Some(Region::PrevButton) => search_events::previous_match(app),
        Some(Region::NextButton) => search_events::next_match(app),
        Some(Region::SearchButton) => search_events::trigger_search(app),
        // Other regions: no click behavior
        _ => {}
    }
}

fn click_content(app: &mut App) {
    if app.focus != Focus::Content {
        app.focus = Focus::Content;
    }
}

fn click_search_input(app: &mut App) {
    if app.focus != Focus::SearchBar {
        app.focus = Focus::SearchBar;
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
