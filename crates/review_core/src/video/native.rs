//! Native media element backend.
//!
//! Direct handle over a locally decoded source: position changes apply
//! synchronously and `current_time` is always exact.

use super::{VideoError, VideoSurface};

#[derive(Debug, Default)]
pub struct NativeMediaPlayer {
    position: f64,
    playing: bool,
    duration: Option<f64>,
}

impl NativeMediaPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(duration_seconds: f64) -> Self {
        Self {
            duration: Some(duration_seconds),
            ..Self::default()
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance the decode clock. Driven by the host's frame tick while the
    /// element is playing.
    pub fn advance(&mut self, delta_seconds: f64) {
        if !self.playing || !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return;
        }
        self.position += delta_seconds;
        if let Some(duration) = self.duration {
            if self.position >= duration {
                self.position = duration;
                self.playing = false;
            }
        }
    }
}

impl VideoSurface for NativeMediaPlayer {
    fn seek(&mut self, time_seconds: f64) -> Result<(), VideoError> {
        if !time_seconds.is_finite() {
            return Err(VideoError::Rejected(format!("non-finite seek target: {time_seconds}")));
        }
        let mut target = time_seconds.max(0.0);
        if let Some(duration) = self.duration {
            target = target.min(duration);
        }
        self.position = target;
        Ok(())
    }

    fn play(&mut self) -> Result<(), VideoError> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), VideoError> {
        self.playing = false;
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.position
    }
}
