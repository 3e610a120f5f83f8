//! Integration tests for loading moment and segment files

use vtb::data::{load_moments, load_segments, DataError, SessionData};
use vtb::moments::{active_indices, panel_items};
use vtb::timeline::SegmentKind;

use crate::helpers::{fixture, temp_file};

#[test]
fn loads_fixture_files_in_file_order() {
    let data = SessionData::load(
        Some(&fixture("lecture_moments.json")),
        Some(&fixture("lecture_segments.json")),
    )
    .unwrap();

    let titles: Vec<&str> = data.moments.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Welcome", "Main Proof", "Recap"]);
    assert_eq!(data.segments.len(), 3);
    assert_eq!(data.segments[1].kind, SegmentKind::Highlighted);
    assert_eq!(data.segments[1].description.as_deref(), Some("Central proof"));
    assert_eq!(data.segments[0].description, None);
}

#[test]
fn missing_override_keeps_built_in_list() {
    let data = SessionData::load(Some(&fixture("lecture_moments.json")), None).unwrap();
    assert_eq!(data.moments.len(), 3);
    assert_eq!(data.segments, SessionData::sample().segments);
}

#[test]
fn close_moments_are_both_active() {
    let moments = load_moments(&fixture("lecture_moments.json")).unwrap();
    assert_eq!(active_indices(&moments, 63.0), vec![1, 2]);
    // Half-open window: exactly two seconds away is not active
    assert_eq!(active_indices(&moments, 7.0), Vec::<usize>::new());

    let items = panel_items(&moments, 62.5);
    assert_eq!(items[1].timestamp_label, "1:02");
    assert_eq!(items[1].importance, [true; 5]);
}

#[test]
fn rejects_out_of_range_importance() {
    let err = load_moments(&fixture("bad_importance.json")).unwrap_err();
    assert!(matches!(
        err,
        DataError::InvalidImportance { importance: 9, .. }
    ));
}

#[test]
fn rejects_inverted_segment() {
    let (_dir, path) = temp_file(
        "segments.json",
        br#"[{"id": "bad", "type": "silent", "startTime": 20, "endTime": 10}]"#,
    );
    let err = load_segments(&path).unwrap_err();
    assert!(matches!(err, DataError::InvalidSegment { .. }));
}

#[test]
fn rejects_unknown_segment_type() {
    let (_dir, path) = temp_file(
        "segments.json",
        br#"[{"id": "x", "type": "loud", "startTime": 0, "endTime": 10}]"#,
    );
    assert!(matches!(
        load_segments(&path).unwrap_err(),
        DataError::Parse { .. }
    ));
}

#[test]
fn missing_file_is_read_error() {
    let err = load_moments(std::path::Path::new("/no/such/moments.json")).unwrap_err();
    assert!(matches!(err, DataError::Read { .. }));
}
