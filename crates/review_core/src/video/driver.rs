//! Token-reactive surface driver and current-time polling.
//!
//! The driver compares the controller's `play_request_token` and playing
//! flag against what it last acted on and only then touches the backend.
//! Re-seeks are keyed on the token so an unchanged numeric target still
//! forces a seek. Backend rejections are logged and dropped; the requested
//! playback state stands.

use crate::playback::PlaybackController;

use super::VideoSurface;

/// Cadence at which the host should tick the poller while playing.
pub const POLL_INTERVAL_MS: u64 = 250;

/// Reported times closer than this to the last accepted value are noise.
pub const TIME_EPSILON_SECONDS: f64 = 0.05;

#[derive(Debug, Clone, Default)]
pub struct VideoDriver {
    last_token: u64,
    last_playing: bool,
}

impl VideoDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the backend with the controller. Call after every state
    /// update batch; does nothing when neither signal changed.
    pub fn sync(&mut self, playback: &PlaybackController, surface: &mut dyn VideoSurface) {
        let token = playback.play_request_token();
        let playing = playback.is_playing();

        if token != self.last_token {
            if let Err(err) = surface.seek(playback.current_time()) {
                log::warn!("video seek rejected: {err}");
            }
        }
        if token != self.last_token || playing != self.last_playing {
            let result = if playing { surface.play() } else { surface.pause() };
            if let Err(err) = result {
                log::warn!("video transport rejected: {err}");
            }
        }

        self.last_token = token;
        self.last_playing = playing;
    }
}

/// Cooperative current-time poll. The host ticks it every
/// `POLL_INTERVAL_MS` while the controller reports playing; the
/// `is_playing` gate is what disarms it on pause and teardown.
#[derive(Debug, Clone)]
pub struct TimePoller {
    last_accepted: f64,
    tolerance: f64,
}

impl Default for TimePoller {
    fn default() -> Self {
        Self {
            last_accepted: 0.0,
            tolerance: TIME_EPSILON_SECONDS,
        }
    }
}

impl TimePoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the surface clock. Returns a time only while playing and only
    /// when it moved beyond the tolerance, suppressing feedback oscillation
    /// between polling and controller-driven seeks.
    pub fn poll(&mut self, playing: bool, surface: &dyn VideoSurface) -> Option<f64> {
        if !playing {
            return None;
        }
        let reported = surface.current_time();
        if !reported.is_finite() || (reported - self.last_accepted).abs() <= self.tolerance {
            return None;
        }
        self.last_accepted = reported;
        Some(reported)
    }

    /// Re-baseline after a controller-driven seek.
    pub fn rebase(&mut self, time_seconds: f64) {
        if time_seconds.is_finite() {
            self.last_accepted = time_seconds;
        }
    }
}
