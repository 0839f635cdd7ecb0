//! # Video Adapter
//!
//! Thin capability seam the playback controller drives. Two backends exist
//! behind the same four-operation contract:
//! - `embedded` - asynchronous streaming widget (command queue)
//! - `native` - native media element (direct position control)
//!
//! The backend is chosen once at mount by inspecting the source URL.
//! Backend rejections are caught at this boundary and logged, never
//! propagated; playback state stays as requested.

pub mod driver;
pub mod embedded;
pub mod native;

use thiserror::Error;

pub use driver::{TimePoller, VideoDriver, POLL_INTERVAL_MS, TIME_EPSILON_SECONDS};
pub use embedded::{EmbeddedStreamPlayer, PlayerCommand};
pub use native::NativeMediaPlayer;

/// Errors a concrete backend can raise. Callers log and continue.
#[derive(Error, Debug)]
pub enum VideoError {
    #[error("backend rejected command: {0}")]
    Rejected(String),

    #[error("backend detached")]
    Detached,
}

/// Minimal contract every video backend satisfies.
pub trait VideoSurface {
    fn seek(&mut self, time_seconds: f64) -> Result<(), VideoError>;
    fn play(&mut self) -> Result<(), VideoError>;
    fn pause(&mut self) -> Result<(), VideoError>;
    fn current_time(&self) -> f64;
}

/// Which backend a source URL mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    EmbeddedStream,
    NativeMedia,
}

/// Hosts that only serve through their own embed widget.
const EMBED_HOSTS: &[&str] = &["youtube.com", "youtu.be", "vimeo.com", "dailymotion.com"];

/// Playlist formats handled by the streaming widget.
const STREAM_EXTENSIONS: &[&str] = &[".m3u8", ".mpd"];

/// Inspect the source URL once, at mount.
pub fn backend_for_url(url: &str) -> BackendKind {
    let lowered = url.trim().to_ascii_lowercase();
    let path = lowered.split(['?', '#']).next().unwrap_or("");
    if EMBED_HOSTS.iter().any(|host| lowered.contains(host))
        || STREAM_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
    {
        BackendKind::EmbeddedStream
    } else {
        BackendKind::NativeMedia
    }
}

/// Mount the backend matching the URL.
pub fn mount(url: &str) -> Box<dyn VideoSurface> {
    match backend_for_url(url) {
        BackendKind::EmbeddedStream => Box::new(EmbeddedStreamPlayer::new()),
        BackendKind::NativeMedia => Box::new(NativeMediaPlayer::new()),
    }
}
