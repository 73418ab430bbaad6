//! Tests for the search operation

use super::*;
use crate::document::Document;

const DOC: &str = "<html><body>\
<div id=\"live-contents\">\
<p>The cat sat on the mat</p>\
<p>Fish &amp; Chips on <b>Friday</b></p>\
<p>One dog barked twice</p>\
</div>\
<div id=\"sidebar\"><p>cat pictures</p></div>\
</body></html>";

fn doc() -> Document {
    Document::parse(DOC).unwrap()
}

fn region_markers(doc: &Document) -> usize {
    doc.find_region(DEFAULT_REGION).unwrap().marker_count()
}

#[test]
fn test_search_marks_all_occurrences() {
    let mut doc = doc();
    let session = search(&mut doc, "at", None).unwrap();

    assert_eq!(session.len(), 3);
    assert_eq!(session.active(), 0);
    assert_eq!(region_markers(&doc), 3);
    // First match in document order is the active one
    let region = doc.find_region(DEFAULT_REGION).unwrap();
    assert_eq!(region.active_index(), Some(0));
}

#[test]
fn test_search_is_case_insensitive() {
    let mut doc = doc();
    let session = search(&mut doc, "FRIDAY", None).unwrap();
    assert_eq!(session.len(), 1);
}

#[test]
fn test_search_is_scoped_to_region() {
    // "cat" also appears in the sidebar, which must stay untouched
    let mut doc = doc();
    let session = search(&mut doc, "cat", None).unwrap();
    assert_eq!(session.len(), 1);

    let sidebar = doc.find_region("#sidebar").unwrap();
    assert_eq!(sidebar.marker_count(), 0);
}

#[test]
fn test_empty_term_is_a_no_op() {
    let mut doc = doc();
    let before = doc.to_markup();

    assert!(search(&mut doc, "", None).is_none());
    assert_eq!(doc.to_markup(), before);
}

#[test]
fn test_no_match_leaves_previous_markers() {
    let mut doc = doc();
    search(&mut doc, "cat", None).unwrap();
    let before = doc.to_markup();

    assert!(search(&mut doc, "zzz_not_present", None).is_none());
    assert_eq!(doc.to_markup(), before);
    assert_eq!(region_markers(&doc), 1);
}

#[test]
fn test_missing_region_is_a_no_op() {
    let mut doc = doc();
    let before = doc.to_markup();

    assert!(search(&mut doc, "cat", Some("#absent")).is_none());
    assert_eq!(doc.to_markup(), before);
}

#[test]
fn test_repeated_searches_never_nest_markers() {
    let mut doc = doc();
    for _ in 0..4 {
        let session = search(&mut doc, "at", None).unwrap();
        assert_eq!(session.len(), 3);
        assert_eq!(region_markers(&doc), 3);
    }
}

#[test]
fn test_new_search_replaces_previous_markers() {
    let mut doc = doc();
    search(&mut doc, "cat", None).unwrap();
    let session = search(&mut doc, "dog", None).unwrap();

    assert_eq!(session.len(), 1);
    assert_eq!(region_markers(&doc), 1);
    let markup = doc.to_markup();
    assert!(markup.contains("<mark class=\"active\">dog</mark>"));
    assert!(!markup.contains("<mark class=\"active\">cat</mark>"));
    assert!(!markup.contains("<mark>cat</mark>"));
}

#[test]
fn test_exactly_one_active_after_search() {
    let mut doc = doc();
    search(&mut doc, "at", None).unwrap();
    search(&mut doc, "at", None).unwrap();

    let markup = doc.to_markup();
    assert_eq!(markup.matches("<mark class=\"active\">").count(), 1);
}

#[test]
fn test_ampersand_matches_entity_escaped_text() {
    // The serialized markup reads "&amp;"; the term "&" matches the
    // decoded text behind it
    let mut doc = doc();
    let session = search(&mut doc, "&", None).unwrap();

    assert_eq!(session.len(), 1);
    // The marker wraps the decoded character and re-escapes on output
    assert!(doc.to_markup().contains("<mark class=\"active\">&amp;</mark>"));
}

#[test]
fn test_search_term_spanning_previous_marker_split() {
    // "cat" splits the text run around it; a follow-up term crossing
    // that split must still match after teardown re-merges the run
    let mut doc = Document::parse("<div id=\"live-contents\"><p>concatenate</p></div>").unwrap();
    search(&mut doc, "cat", None).unwrap();
    let session = search(&mut doc, "oncat", None).unwrap();
    assert_eq!(session.len(), 1);
}

#[test]
fn test_match_preserves_original_casing() {
    let mut doc = Document::parse("<div id=\"live-contents\"><p>CaT and cAt</p></div>").unwrap();
    search(&mut doc, "cat", None).unwrap();
    let markup = doc.to_markup();
    assert!(markup.contains("<mark class=\"active\">CaT</mark>"));
    assert!(markup.contains("<mark>cAt</mark>"));
}

#[test]
fn test_matches_do_not_cross_element_boundaries() {
    // "ca" and "t" sit in different text runs; "cat" never spans them
    let mut doc =
        Document::parse("<div id=\"live-contents\"><p>ca<b>t</b> cat</p></div>").unwrap();
    let session = search(&mut doc, "cat", None).unwrap();
    assert_eq!(session.len(), 1);
}

#[test]
fn test_match_inside_inline_element() {
    let mut doc = doc();
    let session = search(&mut doc, "Friday", None).unwrap();
    assert_eq!(session.len(), 1);
    assert!(doc.to_markup().contains("<b><mark class=\"active\">Friday</mark></b>"));
}
