//! Playback controller
//!
//! Small state machine over a loaded [`Trace`]: `Stopped` or `Playing`, a
//! clamped position, and an externally driven [`tick`](PlaybackController::tick).
//! The controller owns no clock; the UI loop (or a test) calls `tick` at its
//! own cadence, and each tick while playing advances exactly one frame.

use crate::trace::{Frame, Trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Stopped,
    Playing,
}

#[derive(Debug)]
pub struct PlaybackController {
    trace: Option<Trace>,
    position: usize,
    mode: PlaybackMode,
}

impl PlaybackController {
    pub fn new() -> Self {
        PlaybackController {
            trace: None,
            position: 0,
            mode: PlaybackMode::Stopped,
        }
    }

    pub fn with_trace(trace: Trace) -> Self {
        let mut ctrl = PlaybackController::new();
        ctrl.load_trace(trace);
        ctrl
    }

    /// Replace the current trace, reset to frame 0, stop playback.
    pub fn load_trace(&mut self, trace: Trace) {
        self.trace = Some(trace);
        self.position = 0;
        self.mode = PlaybackMode::Stopped;
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.trace.as_ref().and_then(|t| t.get(self.position))
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.trace.as_ref().map(Trace::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_none()
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }

    pub fn at_end(&self) -> bool {
        self.len() != 0 && self.position + 1 >= self.len()
    }

    /// Start playing. At the last frame this restarts from frame 0.
    /// Returns false when no trace is loaded.
    pub fn play(&mut self) -> bool {
        if self.trace.is_none() {
            return false;
        }
        if self.at_end() {
            self.position = 0;
        }
        self.mode = PlaybackMode::Playing;
        true
    }

    pub fn pause(&mut self) {
        self.mode = PlaybackMode::Stopped;
    }

    /// Manual step: forces `Stopped`, clamps at the last frame.
    pub fn step_forward(&mut self) {
        self.mode = PlaybackMode::Stopped;
        if self.len() != 0 && self.position + 1 < self.len() {
            self.position += 1;
        }
    }

    /// Manual step: forces `Stopped`, clamps at frame 0.
    pub fn step_back(&mut self) {
        self.mode = PlaybackMode::Stopped;
        self.position = self.position.saturating_sub(1);
    }

    pub fn jump_to_start(&mut self) {
        self.mode = PlaybackMode::Stopped;
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.mode = PlaybackMode::Stopped;
        if self.len() != 0 {
            self.position = self.len() - 1;
        }
    }

    /// One scheduler tick. While playing, advance one frame; reaching the
    /// last frame stops playback there. Stopped controllers ignore ticks.
    pub fn tick(&mut self) {
        if self.mode != PlaybackMode::Playing {
            return;
        }
        let len = self.len();
        if len == 0 {
            self.mode = PlaybackMode::Stopped;
            return;
        }
        if self.position + 1 >= len {
            self.mode = PlaybackMode::Stopped;
        } else {
            self.position += 1;
            if self.position + 1 >= len {
                self.mode = PlaybackMode::Stopped;
            }
        }
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        PlaybackController::new()
    }
}
