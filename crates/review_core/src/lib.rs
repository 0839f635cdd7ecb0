//! # review_core - Event Filtering & Synchronized Playback Engine
//!
//! Core of a match review tool: analysts scrub a video in lockstep with a
//! timeline of tagged events, filtered on demand by team, category and
//! arbitrary event descriptors.
//!
//! ## Components
//! - Always-sorted filtered view under a composable predicate pipeline
//! - Team/side classification across heterogeneous labeling
//! - Playback controller with delay compensation and re-seek signaling
//! - Video surface seam with two backends behind one capability trait

pub mod error;
pub mod filter;
pub mod models;
pub mod playback;
pub mod session;
pub mod teams;
pub mod video;

pub use error::{ReviewError, Result};
pub use filter::{compute_filtered_events, FilterDescriptor, FilterState, TeamSelector};
pub use models::{
    events_from_str, payload_from_path, payload_from_str, AttrBag, AttrValue, MatchEvent,
    MatchInfo, MatchPayload,
};
pub use playback::{adjusted_start, resolve_event_start, PlaybackController, PlaybackInfo};
pub use session::ReviewSession;
pub use teams::{classify_teams, TeamSheet, ALL_OPPONENTS, ALL_OWN_TEAMS};
pub use video::{backend_for_url, BackendKind, TimePoller, VideoDriver, VideoSurface};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
