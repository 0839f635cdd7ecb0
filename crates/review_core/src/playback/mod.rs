//! # Playback
//!
//! - `start_time` - start-second resolution and delay arithmetic
//! - `controller` - selection, sequencing and re-seek signaling

pub mod controller;
pub mod start_time;

pub use controller::{PlaybackController, PlaybackInfo, OUTSIDE_LIST};
pub use start_time::{adjusted_start, pending_delay, resolve_event_start};
