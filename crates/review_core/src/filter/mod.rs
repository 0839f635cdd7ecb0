//! # Event Filtering
//!
//! - `state` - user-driven filter state and its mutation surface
//! - `engine` - the pure `(events, filter) -> ordered subset` pipeline

pub mod engine;
pub mod state;

pub use engine::{compute_filtered_events, same_filtered_content};
pub use state::{FilterDescriptor, FilterState, TeamSelector};
