//! Integration tests for timeline mapping, layout, and rendering

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use vtb::data::{sample_moments, sample_segments};
use vtb::moments::KeyMoment;
use vtb::theme::Theme;
use vtb::timeline::{
    format_timestamp, pixel_to_time, time_axis_ticks, time_to_percentage, SegmentKind,
    TimelineSegment, TimelineTrack, TimelineWidget, TrackHit, LOADING_PLACEHOLDER,
};

fn moment(id: &str, timestamp: f64) -> KeyMoment {
    KeyMoment {
        id: id.to_string(),
        title: id.to_string(),
        description: String::new(),
        timestamp,
        importance: 3,
    }
}

fn buffer_text(buf: &Buffer) -> String {
    buf.content().iter().map(|c| c.symbol()).collect()
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn timestamps_truncate_and_pad() {
    assert_eq!(format_timestamp(0.0), "0:00");
    assert_eq!(format_timestamp(59.999), "0:59");
    assert_eq!(format_timestamp(145.0), "2:25");
    assert_eq!(format_timestamp(3725.0), "62:05");
}

// ============================================================================
// Mapping
// ============================================================================

#[test]
fn pixel_mapping_clamps_to_duration() {
    assert_eq!(pixel_to_time(300.0, 600.0, 300.0), Some(150.0));
    assert_eq!(pixel_to_time(-20.0, 600.0, 300.0), Some(0.0));
    assert_eq!(pixel_to_time(900.0, 600.0, 300.0), Some(300.0));
    assert_eq!(pixel_to_time(10.0, 600.0, 0.0), None);
}

#[test]
fn percentages_place_items_uniformly() {
    assert_eq!(time_to_percentage(75.0, 300.0), 25.0);
    assert_eq!(time_to_percentage(300.0, 300.0), 100.0);
}

#[test]
fn axis_ticks_include_duration_multiple() {
    let ticks = time_axis_ticks(300.0);
    assert_eq!(ticks.len(), 31);
    assert_eq!(ticks.last().unwrap().label, "5:00");

    let ticks = time_axis_ticks(95.0);
    assert_eq!(ticks.len(), 10);
    assert_eq!(ticks.last().unwrap().time, 90.0);
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn overlapping_markers_resolve_to_last_drawn() {
    let moments = vec![moment("a", 100.0), moment("b", 100.4)];
    let track = TimelineTrack::new(300.0, 0.0, &moments, &[]);
    // Both land in cell 33 of a 100 cell strip
    assert_eq!(
        track.hit_test(33, 100),
        Some(TrackHit::Marker { index: 1, time: 100.4 })
    );
}

#[test]
fn body_press_maps_relative_offset() {
    let track = TimelineTrack::new(200.0, 0.0, &[], &[]);
    assert_eq!(track.hit_test(25, 100), Some(TrackHit::Body { time: 50.0 }));
    assert_eq!(track.hit_test(100, 100), None);
}

#[test]
fn overlapping_segments_keep_list_order() {
    let segments = vec![
        TimelineSegment {
            id: "a".to_string(),
            kind: SegmentKind::Highlighted,
            start_time: 0.0,
            end_time: 60.0,
            description: None,
        },
        TimelineSegment {
            id: "b".to_string(),
            kind: SegmentKind::Silent,
            start_time: 30.0,
            end_time: 90.0,
            description: None,
        },
    ];
    let track = TimelineTrack::new(120.0, 0.0, &[], &segments);
    let layout = track.layout(120);
    let kinds: Vec<SegmentKind> = layout.bands.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![SegmentKind::Highlighted, SegmentKind::Silent]);
    assert_eq!((layout.bands[1].start, layout.bands[1].end), (30, 90));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn unknown_duration_renders_placeholder() {
    let theme = Theme::default();
    let moments = sample_moments();
    let segments = sample_segments();
    let area = Rect::new(0, 0, 60, 7);
    let mut buf = Buffer::empty(area);

    TimelineWidget::new(TimelineTrack::new(0.0, 0.0, &moments, &segments), &theme)
        .render(area, &mut buf);
    assert!(buffer_text(&buf).contains(LOADING_PLACEHOLDER));
}

#[test]
fn ready_track_renders_axis_labels() {
    let theme = Theme::default();
    let moments = sample_moments();
    let segments = sample_segments();
    let area = Rect::new(0, 0, 120, 7);
    let mut buf = Buffer::empty(area);

    TimelineWidget::new(TimelineTrack::new(300.0, 60.0, &moments, &segments), &theme)
        .render(area, &mut buf);
    let text = buffer_text(&buf);
    assert!(!text.contains(LOADING_PLACEHOLDER));
    assert!(text.contains("0:00"));
    assert!(text.contains("1:00"));
}
