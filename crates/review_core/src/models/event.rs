//! Raw match event records.
//!
//! Events arrive from the import backend with a small fixed core (id, type,
//! side, timestamp) and an open attribute bag for everything profile-specific.
//! `timestamp_sec` is already delay-adjusted by the backend for filtering and
//! ordering; playback-time delay compensation never mutates the stored event.

use serde::{Deserialize, Serialize};

use super::attr::{AttrBag, AttrValue};

/// Prefix marking the throwing player inside the `players` list.
pub const THROWER_PREFIX: &str = "T:";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    /// Backend-assigned stable identifier.
    pub id: i64,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    /// Authoritative side flag when present; absent means unflagged capture data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_opponent: Option<bool>,
    /// Seconds from video start, delay-adjusted by the backend. Primary ordering key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_sec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Ordered player identifiers; a `T:` prefix marks the thrower.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<String>,
    /// Open descriptor bag.
    #[serde(default, skip_serializing_if = "AttrBag::is_empty")]
    pub extra: AttrBag,
}

impl MatchEvent {
    /// Bare event with the fields every record carries.
    pub fn new(id: i64, event_type: impl Into<String>, timestamp_sec: f64) -> Self {
        Self {
            id,
            event_type: event_type.into(),
            match_id: None,
            team: None,
            opponent: None,
            is_opponent: None,
            timestamp_sec: Some(timestamp_sec),
            duration_sec: None,
            x: None,
            y: None,
            players: Vec::new(),
            extra: AttrBag::new(),
        }
    }

    /// Side of the event; unflagged records count as own-side.
    pub fn is_opponent_side(&self) -> bool {
        self.is_opponent.unwrap_or(false)
    }

    /// Ordering key: missing or non-finite timestamps sort as zero.
    pub fn order_key(&self) -> f64 {
        match self.timestamp_sec {
            Some(t) if t.is_finite() => t,
            _ => 0.0,
        }
    }

    /// Player entries with role prefixes stripped.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| strip_role_prefix(p))
    }

    /// The throwing player, if one is marked.
    pub fn thrower(&self) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.starts_with(THROWER_PREFIX))
            .map(|p| strip_role_prefix(p))
    }

    /// Resolve a descriptor key: the attribute bag first, then the direct
    /// fields the filter surface exposes under well-known names.
    pub fn descriptor_value(&self, key: &str) -> Option<AttrValue> {
        if let Some(value) = self.extra.get_ci(key) {
            return Some(value.clone());
        }
        match key.trim().to_ascii_lowercase().as_str() {
            "type" | "category" => Some(AttrValue::Text(self.event_type.clone())),
            "team" => self.team.clone().map(AttrValue::Text),
            "opponent" => self.opponent.clone().map(AttrValue::Text),
            "players" if !self.players.is_empty() => Some(AttrValue::List(
                self.player_names().map(AttrValue::from).collect(),
            )),
            _ => None,
        }
    }
}

fn strip_role_prefix(entry: &str) -> &str {
    entry.strip_prefix(THROWER_PREFIX).unwrap_or(entry)
}
