//! # Team Classifier
//!
//! Derives the set of team labels present in a match from the match metadata
//! and the raw event collection. Labels are heterogeneous across import
//! profiles; the per-event `is_opponent` flag stays authoritative and label
//! matching is only a secondary signal.

use crate::models::{MatchEvent, MatchInfo};

/// Selector value meaning "every non-opponent event".
pub const ALL_OWN_TEAMS: &str = "MIS EQUIPOS";

/// Selector value meaning "every opponent event".
pub const ALL_OPPONENTS: &str = "RIVALES";

/// Literal label import profiles stamp on an unnamed opposing side.
pub const OPPONENT_PLACEHOLDER: &str = "RIVAL";

/// Derived team labels for the active match.
///
/// `labels` keeps first-seen order and is deduplicated. A label observed as
/// both a `team` and an `opponent` value is retained in both derived sets;
/// callers resolve that ambiguity through the event flag, not the label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSheet {
    labels: Vec<String>,
    own_names: Vec<String>,
    opponent_names: Vec<String>,
}

impl TeamSheet {
    /// All labels seen in the match, deduplicated, stable order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels other than the opponent placeholder.
    pub fn own_names(&self) -> &[String] {
        &self.own_names
    }

    /// Labels observed in `opponent` positions, plus the placeholder.
    pub fn opponent_names(&self) -> &[String] {
        &self.opponent_names
    }

    pub fn is_own_name(&self, label: &str) -> bool {
        self.own_names.iter().any(|l| l == label)
    }

    pub fn is_opponent_name(&self, label: &str) -> bool {
        self.opponent_names.iter().any(|l| l == label)
    }
}

/// Recomputed whenever the event collection changes. Pure derivation, no
/// side effects.
pub fn classify_teams(info: &MatchInfo, events: &[MatchEvent]) -> TeamSheet {
    let mut sheet = TeamSheet::default();

    let mut push = |list: &mut Vec<String>, label: &str| {
        let label = label.trim();
        if !label.is_empty() && !list.iter().any(|l| l == label) {
            list.push(label.to_string());
        }
    };

    let mut seen_team: Vec<&str> = Vec::new();
    let mut seen_opponent: Vec<&str> = Vec::new();
    if let Some(team) = info.team.as_deref() {
        seen_team.push(team);
    }
    if let Some(opponent) = info.opponent.as_deref() {
        seen_opponent.push(opponent);
    }
    for event in events {
        if let Some(team) = event.team.as_deref() {
            seen_team.push(team);
        }
        if let Some(opponent) = event.opponent.as_deref() {
            seen_opponent.push(opponent);
        }
    }

    for label in seen_team.iter().chain(seen_opponent.iter()) {
        push(&mut sheet.labels, label);
    }
    for label in &sheet.labels {
        if label != OPPONENT_PLACEHOLDER {
            sheet.own_names.push(label.clone());
        }
    }
    for label in seen_opponent {
        push(&mut sheet.opponent_names, label);
    }
    push(&mut sheet.opponent_names, OPPONENT_PLACEHOLDER);

    sheet
}
