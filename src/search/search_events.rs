//! Search event handling
//!
//! The top-level search trigger plus match navigation. Navigation only
//! does anything while a session from a successful search is live.

use crate::app::App;
use crate::document::flatten;

use super::engine;

const H_SCROLL_MARGIN: u16 = 10;

/// Run a search for the term currently in the search input.
///
/// The active highlight is cleared up front, match or no match. On
/// success the new session replaces the old one and the viewport jumps
/// to the first match; on failure the user gets a modal notification
/// and the previous session (if any) stays live.
pub fn trigger_search(app: &mut App) {
    let term = app.search.term().to_string();
    app.document.clear_active();
    let selector = app.region.clone();
    match engine::search(&mut app.document, &term, Some(&selector)) {
        Some(session) => {
            app.search.bind_session(session);
            scroll_to_active(app);
        }
        None => app.notification.show("No results found"),
    }
}

/// Activate the next match, wrapping past the last back to the first.
pub fn next_match(app: &mut App) {
    let Some(session) = app.search.session_mut() else {
        return;
    };
    let index = session.next();
    activate_match(app, index);
}

/// Activate the previous match, wrapping before the first to the last.
pub fn previous_match(app: &mut App) {
    let Some(session) = app.search.session_mut() else {
        return;
    };
    let index = session.previous();
    activate_match(app, index);
}

fn activate_match(app: &mut App, index: usize) {
    let selector = app.region.clone();
    if let Some(region) = app.document.find_region_mut(&selector) {
        region.clear_active();
        region.set_active(index);
    }
    scroll_to_active(app);
}

/// Scroll the viewport so the active match's line sits at the top,
/// and keep its columns visible.
fn scroll_to_active(app: &mut App) {
    let Some(region) = app.document.find_region(&app.region) else {
        return;
    };
    let flat = flatten(region);
    let Some(marker) = flat.active_marker().copied() else {
        return;
    };

    let target_line = marker.line.min(u16::MAX as u32) as u16;
    if app.viewer_scroll.viewport_height > 0 {
        app.viewer_scroll.offset = target_line.min(app.viewer_scroll.max_offset);
    } else {
        // Bounds are unknown before the first frame; the next render clamps
        app.viewer_scroll.offset = target_line;
    }

    let scroll = &mut app.viewer_scroll;
    if scroll.max_h_offset > 0 && scroll.viewport_width > 0 {
        let match_end = marker.col.saturating_add(marker.len);
        let visible_start = scroll.h_offset;
        let visible_end = scroll.h_offset.saturating_add(scroll.viewport_width);
        if marker.col < visible_start || match_end > visible_end {
            scroll.h_offset = marker
                .col
                .saturating_sub(H_SCROLL_MARGIN)
                .min(scroll.max_h_offset);
        }
    }
}

#[cfg(test)]
#[path = "search_events_tests.rs"]
mod search_events_tests;
