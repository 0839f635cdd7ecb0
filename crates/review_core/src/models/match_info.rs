//! Per-match metadata.
//!
//! Delay figures live here and are read only by the playback controller.
//! Filtering and ordering never look at them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    /// Source the video surface mounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kickoff: Option<DateTime<Utc>>,
    /// Seconds added to every event of this match at playback time.
    #[serde(default)]
    pub global_delay_seconds: f64,
    /// Extra per-event-type seconds, keyed by event type (case-insensitive lookup).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub event_delays: HashMap<String, f64>,
}

impl MatchInfo {
    pub fn new(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Per-type delay for an event type. Key match is case-insensitive.
    pub fn event_delay(&self, event_type: &str) -> f64 {
        if let Some(delay) = self.event_delays.get(event_type) {
            return *delay;
        }
        self.event_delays
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(event_type))
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_delay_case_insensitive() {
        let mut info = MatchInfo::new(1);
        info.event_delays.insert("TRY".into(), 2.0);
        assert_eq!(info.event_delay("TRY"), 2.0);
        assert_eq!(info.event_delay("try"), 2.0);
        assert_eq!(info.event_delay("Tackle"), 0.0);
    }

    #[test]
    fn test_deserialize_defaults() {
        let info: MatchInfo =
            serde_json::from_str(r#"{"id": 9, "team": "Union RC", "opponent": "RIVAL"}"#).unwrap();
        assert_eq!(info.global_delay_seconds, 0.0);
        assert!(info.event_delays.is_empty());
    }
}
