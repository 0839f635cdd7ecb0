//! Start-time resolution and delay arithmetic.
//!
//! The stored timestamp already carries whatever delay the backend baked in
//! at import time. Delay edits made afterwards are reconciled here at
//! playback time only; stored events are never rewritten.

use crate::models::{MatchEvent, MatchInfo};

/// Legacy capture column holding the raw second offset.
const LEGACY_SECOND_KEY: &str = "SECOND";

/// Known spellings of the clip start attribute across import profiles, in
/// resolution priority order.
const START_ALIASES: &[&str] = &[
    "clip_start",
    "clipStart",
    "clipBegin",
    "start",
    "Start",
    "Original_start",
    "original_start",
    "original_start_seconds",
];

/// Backend-stamped record of delay already baked into the stored timestamp.
const DELAY_APPLIED_KEY: &str = "_delay_applied";

/// Resolve an event's raw start second. Priority: the stored timestamp, the
/// legacy `SECOND` column, then the clip-start alias chain. Unresolvable
/// starts fall back to `0.0` so playback never fails on incomplete data.
pub fn resolve_event_start(event: &MatchEvent) -> f64 {
    if let Some(t) = event.timestamp_sec.filter(|t| t.is_finite()) {
        return t;
    }
    if let Some(t) = event.extra.finite(LEGACY_SECOND_KEY) {
        return t;
    }
    event.extra.first_finite(START_ALIASES).unwrap_or(0.0)
}

/// Delay not yet reflected in the stored timestamp: the match-wide delay
/// plus the per-type delay, minus whatever the backend already applied.
pub fn pending_delay(event: &MatchEvent, info: &MatchInfo) -> f64 {
    let applied = event.extra.finite(DELAY_APPLIED_KEY).unwrap_or(0.0);
    info.global_delay_seconds + info.event_delay(&event.event_type) - applied
}

/// The playback target: raw start plus outstanding delay.
pub fn adjusted_start(event: &MatchEvent, info: &MatchInfo) -> f64 {
    resolve_event_start(event) + pending_delay(event, info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_wins_over_clip_start() {
        let mut event = MatchEvent::new(1, "TRY", 12.0);
        event.extra.insert("clip_start", 99.0);
        assert_eq!(resolve_event_start(&event), 12.0);
    }

    #[test]
    fn test_legacy_second_fallback() {
        let mut event = MatchEvent::new(1, "TRY", 0.0);
        event.timestamp_sec = None;
        event.extra.insert("SECOND", "37");
        event.extra.insert("clip_start", 99.0);
        assert_eq!(resolve_event_start(&event), 37.0);
    }

    #[test]
    fn test_alias_chain_order() {
        let mut event = MatchEvent::new(1, "TRY", 0.0);
        event.timestamp_sec = None;
        event.extra.insert("original_start", 50.0);
        event.extra.insert("clipBegin", 40.0);
        assert_eq!(resolve_event_start(&event), 40.0);
    }

    #[test]
    fn test_unresolvable_defaults_to_zero() {
        let mut event = MatchEvent::new(1, "TRY", f64::NAN);
        event.extra.insert("clip_start", "not a number");
        assert_eq!(resolve_event_start(&event), 0.0);
    }

    #[test]
    fn test_delay_arithmetic() {
        let mut event = MatchEvent::new(1, "TRY", 50.0);
        event.extra.insert("_delay_applied", 1.0);
        let mut info = MatchInfo::new(1);
        info.global_delay_seconds = 3.0;
        info.event_delays.insert("TRY".into(), 2.0);
        assert_eq!(adjusted_start(&event, &info), 54.0);
    }

    #[test]
    fn test_delay_type_lookup_case_insensitive() {
        let event = MatchEvent::new(1, "try", 50.0);
        let mut info = MatchInfo::new(1);
        info.event_delays.insert("TRY".into(), 2.0);
        assert_eq!(pending_delay(&event, &info), 2.0);
    }

    #[test]
    fn test_no_delays_is_identity() {
        let event = MatchEvent::new(1, "KICK", 50.0);
        assert_eq!(adjusted_start(&event, &MatchInfo::default()), 50.0);
    }
}
