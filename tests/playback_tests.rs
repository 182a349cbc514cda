// Integration tests for the playback controller: stepping, clamping,
// play/pause, and the externally driven tick.

use algotty::algorithms::{run_algorithm, AlgorithmId, Params};
use algotty::playback::{PlaybackController, PlaybackMode};
use algotty::structures::Structure;
use algotty::trace::Trace;

fn short_trace() -> Trace {
    run_algorithm(
        AlgorithmId::LinearSearch,
        &Structure::Array(vec![1, 2, 3]),
        &Params::target("3"),
    )
    .expect("engine error")
}

#[test]
fn test_empty_controller_ignores_input() {
    let mut ctrl = PlaybackController::new();
    assert!(ctrl.is_empty());
    assert!(ctrl.current_frame().is_none());
    assert!(!ctrl.play());
    ctrl.step_forward();
    ctrl.tick();
    assert_eq!(ctrl.position(), 0);
    assert_eq!(ctrl.mode(), PlaybackMode::Stopped);
}

#[test]
fn test_step_forward_clamps_at_last_frame() {
    let trace = short_trace();
    let len = trace.len();
    let mut ctrl = PlaybackController::with_trace(trace);
    for _ in 0..len + 5 {
        ctrl.step_forward();
    }
    assert_eq!(ctrl.position(), len - 1);
    assert!(ctrl.at_end());
}

#[test]
fn test_step_back_clamps_at_zero() {
    let mut ctrl = PlaybackController::with_trace(short_trace());
    ctrl.step_back();
    ctrl.step_back();
    assert_eq!(ctrl.position(), 0);
}

#[test]
fn test_manual_step_pauses_playback() {
    let mut ctrl = PlaybackController::with_trace(short_trace());
    assert!(ctrl.play());
    assert!(ctrl.is_playing());
    ctrl.step_forward();
    assert_eq!(ctrl.mode(), PlaybackMode::Stopped);
}

#[test]
fn test_tick_advances_only_while_playing() {
    let mut ctrl = PlaybackController::with_trace(short_trace());
    ctrl.tick();
    assert_eq!(ctrl.position(), 0);
    ctrl.play();
    ctrl.tick();
    assert_eq!(ctrl.position(), 1);
}

#[test]
fn test_playback_stops_at_last_frame() {
    let trace = short_trace();
    let len = trace.len();
    let mut ctrl = PlaybackController::with_trace(trace);
    ctrl.play();
    for _ in 0..len + 5 {
        ctrl.tick();
    }
    assert_eq!(ctrl.position(), len - 1);
    assert!(!ctrl.is_playing());
}

#[test]
fn test_play_at_end_restarts_from_first_frame() {
    let mut ctrl = PlaybackController::with_trace(short_trace());
    ctrl.jump_to_end();
    assert!(ctrl.at_end());
    assert!(ctrl.play());
    assert_eq!(ctrl.position(), 0);
    assert!(ctrl.is_playing());
}

#[test]
fn test_jump_targets() {
    let trace = short_trace();
    let len = trace.len();
    let mut ctrl = PlaybackController::with_trace(trace);
    ctrl.jump_to_end();
    assert_eq!(ctrl.position(), len - 1);
    ctrl.jump_to_start();
    assert_eq!(ctrl.position(), 0);
}

#[test]
fn test_load_trace_resets_position_and_mode() {
    let mut ctrl = PlaybackController::with_trace(short_trace());
    ctrl.play();
    ctrl.tick();
    assert!(ctrl.position() > 0);
    ctrl.load_trace(short_trace());
    assert_eq!(ctrl.position(), 0);
    assert_eq!(ctrl.mode(), PlaybackMode::Stopped);
}

#[test]
fn test_current_frame_tracks_position() {
    let mut ctrl = PlaybackController::with_trace(short_trace());
    let first = ctrl.current_frame().expect("frame").message.clone();
    ctrl.jump_to_end();
    let last = ctrl.current_frame().expect("frame").message.clone();
    assert_eq!(first, "Checking index 0");
    assert_eq!(last, "Found at index 2");
}
