//! Tests for the search trigger and match navigation

use super::*;
use crate::test_utils::test_helpers::{TEST_DOC, run_search, test_app};

fn active_count(app: &crate::app::App) -> usize {
    app.document.to_markup().matches("<mark class=\"active\">").count()
}

#[test]
fn test_trigger_search_binds_session_and_activates_first() {
    let mut app = test_app(TEST_DOC);
    run_search(&mut app, "at");

    let session = app.search.session().unwrap();
    assert_eq!(session.len(), 3);
    assert_eq!(session.active(), 0);
    assert_eq!(active_count(&app), 1);

    let region = app.document.find_region(&app.region).unwrap();
    assert_eq!(region.active_index(), Some(0));
}

#[test]
fn test_trigger_search_no_results_shows_notification() {
    let mut app = test_app(TEST_DOC);
    run_search(&mut app, "zzz_not_present");

    assert!(app.notification.is_visible());
    assert_eq!(
        app.notification.current().unwrap().message,
        "No results found"
    );
}

#[test]
fn test_trigger_search_empty_term_shows_notification() {
    let mut app = test_app(TEST_DOC);
    run_search(&mut app, "");

    assert!(app.notification.is_visible());
    assert_eq!(app.document.find_region(&app.region).unwrap().marker_count(), 0);
}

#[test]
fn test_failed_search_keeps_previous_session_and_markers() {
    let mut app = test_app(TEST_DOC);
    run_search(&mut app, "at");
    run_search(&mut app, "zzz_not_present");

    // Old markers survive; the old session stays navigable
    assert!(app.notification.is_visible());
    let region = app.document.find_region(&app.region).unwrap();
    assert_eq!(region.marker_count(), 3);
    assert_eq!(app.search.session().unwrap().len(), 3);

    // The unconditional clear removed the highlight; navigation restores one
    assert_eq!(active_count(&app), 0);
    next_match(&mut app);
    assert_eq!(active_count(&app), 1);
}

#[test]
fn test_next_match_advances_and_keeps_one_active() {
    let mut app = test_app(TEST_DOC);
    run_search(&mut app, "at");

    next_match(&mut app);
    let region = app.document.find_region(&app.region).unwrap();
    assert_eq!(region.active_index(), Some(1));
    assert_eq!(active_count(&app), 1);
}

#[test]
fn test_next_wraps_back_to_first() {
    let mut app = test_app(TEST_DOC);
    run_search(&mut app, "at");

    for _ in 0..3 {
        next_match(&mut app);
    }
    let region = app.document.find_region(&app.region).unwrap();
    assert_eq!(region.active_index(), Some(0));
    assert_eq!(active_count(&app), 1);
}

#[test]
fn test_previous_from_first_wraps_to_last() {
    let mut app = test_app(TEST_DOC);
    run_search(&mut app, "at");

    previous_match(&mut app);
    let region = app.document.find_region(&app.region).unwrap();
    assert_eq!(region.active_index(), Some(2));
    assert_eq!(active_count(&app), 1);
}

#[test]
fn test_navigation_without_session_is_a_no_op() {
    let mut app = test_app(TEST_DOC);
    let before = app.document.to_markup();

    next_match(&mut app);
    previous_match(&mut app);

    assert_eq!(app.document.to_markup(), before);
    assert!(app.search.session().is_none());
}

#[test]
fn test_new_search_resets_navigation() {
    let mut app = test_app(TEST_DOC);
    run_search(&mut app, "at");
    next_match(&mut app);
    next_match(&mut app);

    run_search(&mut app, "at");
    assert_eq!(app.search.session().unwrap().active(), 0);
    let region = app.document.find_region(&app.region).unwrap();
    assert_eq!(region.active_index(), Some(0));
}

#[test]
fn test_search_scrolls_match_line_to_viewport_top() {
    let mut app = test_app(TEST_DOC);
    // Region flattens to 4 lines; "dog" sits on the last one
    app.viewer_scroll.update_bounds(4, 2);

    run_search(&mut app, "dog");
    assert_eq!(app.viewer_scroll.offset, 2); // clamped to max_offset

    run_search(&mut app, "cat");
    assert_eq!(app.viewer_scroll.offset, 1); // line 1 at the top
}

#[test]
fn test_search_before_first_frame_scrolls_unclamped() {
    let mut app = test_app(TEST_DOC);
    run_search(&mut app, "dog");
    // Bounds are unknown until the first render; the render clamps later
    assert_eq!(app.viewer_scroll.offset, 3);
}
