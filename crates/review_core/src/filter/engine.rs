//! # Filter Engine
//!
//! Pure pipeline from the raw event collection and the current filter state
//! to an ordered subset. Stages, each narrowing the next:
//!
//! 1. Category (OR within the set; empty set passes everything)
//! 2. Descriptors (AND across the list)
//! 3. Team (three-mode predicate)
//! 4. Stable ascending sort by timestamp
//!
//! Deterministic, never mutates its input, always returns a newly
//! materialized sequence.

use crate::models::MatchEvent;
use crate::teams::TeamSheet;

use super::state::{normalize_category, FilterState, TeamSelector};

pub fn compute_filtered_events(
    events: &[MatchEvent],
    filter: &FilterState,
    teams: &TeamSheet,
) -> Vec<MatchEvent> {
    let mut filtered: Vec<MatchEvent> = events
        .iter()
        .filter(|e| category_matches(e, filter))
        .filter(|e| descriptors_match(e, filter))
        .filter(|e| team_matches(e, filter.team_selector(), teams))
        .cloned()
        .collect();

    // Vec::sort_by is stable; capture-order ties keep their relative order.
    filtered.sort_by(|a, b| a.order_key().total_cmp(&b.order_key()));
    filtered
}

fn category_matches(event: &MatchEvent, filter: &FilterState) -> bool {
    if filter.categories().is_empty() {
        return true;
    }
    filter
        .categories()
        .contains(&normalize_category(&event.event_type))
}

fn descriptors_match(event: &MatchEvent, filter: &FilterState) -> bool {
    filter.descriptors().iter().all(|d| {
        event
            .descriptor_value(&d.descriptor)
            .map(|value| value.matches_text(&d.value))
            .unwrap_or(false)
    })
}

/// The event flag is authoritative for the two aggregate modes. For a
/// literal name the sheet decides which side the name belongs to; a name
/// seen on both sides falls back to the flag deciding which label field
/// must carry it.
fn team_matches(event: &MatchEvent, selector: TeamSelector<'_>, teams: &TeamSheet) -> bool {
    match selector {
        TeamSelector::Any => true,
        TeamSelector::AllOwn => !event.is_opponent_side(),
        TeamSelector::AllOpponents => event.is_opponent_side(),
        TeamSelector::Name(name) => {
            let on_team = event.team.as_deref() == Some(name);
            let on_opponent = event.opponent.as_deref() == Some(name);
            match (teams.is_own_name(name), teams.is_opponent_name(name)) {
                (true, false) => on_team && !event.is_opponent_side(),
                (false, true) => (on_team || on_opponent) && event.is_opponent_side(),
                (true, true) => {
                    if event.is_opponent_side() {
                        on_opponent
                    } else {
                        on_team
                    }
                }
                // Name never observed in this match: plain label equality.
                (false, false) => on_team || on_opponent,
            }
        }
    }
}

/// Change-suppression check: whether a newly computed list carries the same
/// content as the previously published one. Compares the full id sequence
/// (ids tie-broken by timestamp bits), exact under interior reordering and
/// substitution.
pub fn same_filtered_content(prev: &[MatchEvent], next: &[MatchEvent]) -> bool {
    prev.len() == next.len()
        && prev
            .iter()
            .zip(next.iter())
            .all(|(a, b)| a.id == b.id && a.order_key().to_bits() == b.order_key().to_bits())
}
