//! Backend payload loading.
//!
//! The only place malformed data surfaces as an error. Past this boundary
//! the core falls back to safe defaults instead of failing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use super::event::MatchEvent;
use super::match_info::MatchInfo;

/// Top-level shape of a backend match payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPayload {
    #[serde(rename = "match")]
    pub info: MatchInfo,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

pub fn payload_from_str(json: &str) -> Result<MatchPayload> {
    Ok(serde_json::from_str(json)?)
}

pub fn payload_from_path(path: &Path) -> Result<MatchPayload> {
    let raw = fs::read_to_string(path)?;
    payload_from_str(&raw)
}

pub fn events_from_str(json: &str) -> Result<Vec<MatchEvent>> {
    Ok(serde_json::from_str(json)?)
}
