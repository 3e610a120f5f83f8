//! Integration tests for the playback controller through the public API

use vtb::data::SessionData;
use vtb::intake::{IntakeError, MediaIntake};
use vtb::media::{ClockMedia, DurationHints, ManualClock, ObjectUrlRegistry};
use vtb::moments::MomentsPanel;
use vtb::player::{PlaybackController, PlaybackState, PlayerPhase, Request};
use vtb::timeline::TimelineTrack;

use crate::helpers::temp_file;

fn setup() -> (PlaybackController<ClockMedia<ManualClock>>, MediaIntake, ManualClock) {
    let clock = ManualClock::new();
    let media = ClockMedia::with_clock(clock.clone(), DurationHints::default());
    let intake = MediaIntake::new(ObjectUrlRegistry::new(), "sample://integration");
    (PlaybackController::new(media), intake, clock)
}

#[test]
fn seeks_are_ignored_until_metadata_arrives() {
    let (mut controller, intake, _) = setup();
    let data = SessionData::sample();

    // Empty
    assert!(!controller.seek(30.0));

    controller.handle_request(Request::LoadSample, &intake).unwrap();
    assert_eq!(controller.phase(), PlayerPhase::Loading);
    let state = controller.snapshot();
    let track = TimelineTrack::new(state.duration, state.current_time, &data.moments, &data.segments);
    assert!(!track.is_ready());
    assert_eq!(track.pointer_down(10, 60), None);
    assert!(!controller.seek(30.0));
    assert_eq!(controller.snapshot().current_time, 0.0);

    controller.poll_media();
    assert_eq!(controller.snapshot().duration, 300.0);
    assert!(controller.seek(30.0));
    assert_eq!(controller.snapshot().current_time, 30.0);
}

#[test]
fn image_upload_leaves_state_untouched() {
    let (mut controller, intake, _) = setup();
    controller.handle_request(Request::LoadSample, &intake).unwrap();
    controller.poll_media();
    controller.seek(42.0);
    let before = controller.snapshot();

    let (_dir, image) = temp_file("diagram.png", b"png");
    let err = controller
        .handle_request(Request::Upload(image), &intake)
        .unwrap_err();

    assert!(matches!(err, IntakeError::NotVideo { content_type: "image/png", .. }));
    assert!(err.to_string().starts_with("Please select a valid video file"));
    assert_eq!(controller.snapshot(), before);
    assert!(!controller.source().unwrap().is_upload());
}

#[test]
fn video_upload_resets_to_loading() {
    let (mut controller, intake, _) = setup();
    controller.handle_request(Request::LoadSample, &intake).unwrap();
    controller.poll_media();
    controller.seek(100.0);
    controller.toggle_playback();

    let (_dir, video) = temp_file("lecture.mp4", b"");
    controller
        .handle_request(Request::Upload(video), &intake)
        .unwrap();

    assert_eq!(controller.phase(), PlayerPhase::Loading);
    assert_eq!(controller.snapshot(), PlaybackState::reset());
    assert!(controller.source().unwrap().is_upload());
}

#[test]
fn moment_jump_is_exact_regardless_of_width() {
    let (mut controller, intake, _) = setup();
    let data = SessionData::sample();
    controller.handle_request(Request::LoadSample, &intake).unwrap();
    controller.poll_media();

    let index = data
        .moments
        .iter()
        .position(|m| m.timestamp == 145.0)
        .expect("sample set has a moment at 2:25");
    let mut panel = MomentsPanel::new();
    let request = panel.activate(&data.moments, index).unwrap();
    controller.handle_request(request, &intake).unwrap();

    assert_eq!(controller.snapshot().current_time, 145.0);
}

#[test]
fn marker_press_wins_over_track_body() {
    let (mut controller, intake, _) = setup();
    let data = SessionData::sample();
    controller.handle_request(Request::LoadSample, &intake).unwrap();
    controller.poll_media();

    let width = 150;
    let state = controller.snapshot();
    let track = TimelineTrack::new(state.duration, state.current_time, &data.moments, &data.segments);
    // 145s of 300s on a 150 cell strip lands in cell 72
    let request = track.pointer_down(72, width).unwrap();
    controller.handle_request(request, &intake).unwrap();

    assert_eq!(controller.snapshot().current_time, 145.0);
}

#[test]
fn playback_advances_and_stops_at_end() {
    let (mut controller, intake, clock) = setup();
    controller.handle_request(Request::LoadSample, &intake).unwrap();
    controller.poll_media();

    controller.handle_request(Request::TogglePlayback, &intake).unwrap();
    assert_eq!(controller.phase(), PlayerPhase::Playing);

    clock.advance(12.5);
    controller.poll_media();
    assert!((controller.snapshot().current_time - 12.5).abs() < 1e-9);

    clock.advance(1000.0);
    controller.poll_media();
    let state = controller.snapshot();
    assert_eq!(state.current_time, 300.0);
    assert!(!state.is_playing);
}

#[test]
fn seeking_while_playing_keeps_playing() {
    let (mut controller, intake, clock) = setup();
    controller.handle_request(Request::LoadSample, &intake).unwrap();
    controller.poll_media();
    controller.toggle_playback();

    clock.advance(50.0);
    controller.poll_media();
    controller.handle_request(Request::Seek(10.0), &intake).unwrap();
    assert_eq!(controller.snapshot().current_time, 10.0);

    clock.advance(2.0);
    controller.poll_media();
    let state = controller.snapshot();
    assert!(state.is_playing);
    assert!((state.current_time - 12.0).abs() < 1e-9);
}

#[test]
fn replacing_upload_revokes_previous_url() {
    let (mut controller, intake, _) = setup();
    let (_dir_a, first) = temp_file("a.mp4", b"");
    let (_dir_b, second) = temp_file("b.webm", b"");

    controller.handle_request(Request::Upload(first), &intake).unwrap();
    let first_url = controller.source().unwrap().url().to_string();
    assert!(intake.registry().resolve(&first_url).is_some());

    controller.handle_request(Request::Upload(second), &intake).unwrap();
    assert!(intake.registry().resolve(&first_url).is_none());
    assert_eq!(intake.registry().live_count(), 1);

    drop(controller);
    assert_eq!(intake.registry().live_count(), 0);
}
