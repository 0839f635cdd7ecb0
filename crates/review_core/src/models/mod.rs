//! # Shared Models
//!
//! Data shapes exchanged with the import backend:
//! - `attr` - typed descriptor bag with case-insensitive lookup
//! - `event` - raw match event records
//! - `match_info` - per-match metadata and delay figures
//! - `io` - JSON payload loading boundary

pub mod attr;
pub mod event;
pub mod io;
pub mod match_info;

pub use attr::{AttrBag, AttrValue};
pub use event::{MatchEvent, THROWER_PREFIX};
pub use io::{events_from_str, payload_from_path, payload_from_str, MatchPayload};
pub use match_info::MatchInfo;
