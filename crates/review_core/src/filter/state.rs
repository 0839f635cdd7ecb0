//! User-driven filter state.
//!
//! Created empty on match load, mutated by the filter surface. Category
//! names are normalized (trim + uppercase) at the edge so the engine only
//! ever compares normalized values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::teams::{ALL_OPPONENTS, ALL_OWN_TEAMS};

/// One descriptor filter: matches when the event's resolved value for
/// `descriptor` equals `value`, or contains it when array-valued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterDescriptor {
    pub descriptor: String,
    pub value: String,
}

impl FilterDescriptor {
    pub fn new(descriptor: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            value: value.into(),
        }
    }
}

/// Team restriction derived from the selected-team value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSelector<'a> {
    /// No team restriction.
    Any,
    /// Every non-opponent event.
    AllOwn,
    /// Every opponent event.
    AllOpponents,
    /// A literal team name, checked against side consistency.
    Name(&'a str),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    categories: BTreeSet<String>,
    descriptors: Vec<FilterDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_team: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the category set. Entries are trimmed and uppercased; blanks
    /// are dropped. An empty set means no category restriction.
    pub fn set_categories<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.categories = categories
            .into_iter()
            .map(|c| normalize_category(c.as_ref()))
            .filter(|c| !c.is_empty())
            .collect();
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn add_descriptor(&mut self, descriptor: FilterDescriptor) {
        if !self.descriptors.contains(&descriptor) {
            self.descriptors.push(descriptor);
        }
    }

    pub fn remove_descriptor(&mut self, descriptor: &str, value: &str) {
        self.descriptors
            .retain(|d| !(d.descriptor == descriptor && d.value == value));
    }

    pub fn descriptors(&self) -> &[FilterDescriptor] {
        &self.descriptors
    }

    /// Empty and blank values clear the restriction.
    pub fn set_selected_team(&mut self, team: Option<&str>) {
        self.selected_team = team
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from);
    }

    pub fn selected_team(&self) -> Option<&str> {
        self.selected_team.as_deref()
    }

    pub fn team_selector(&self) -> TeamSelector<'_> {
        match self.selected_team.as_deref() {
            None => TeamSelector::Any,
            Some(ALL_OWN_TEAMS) => TeamSelector::AllOwn,
            Some(ALL_OPPONENTS) => TeamSelector::AllOpponents,
            Some(name) => TeamSelector::Name(name),
        }
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.descriptors.clear();
        self.selected_team = None;
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.descriptors.is_empty() && self.selected_team.is_none()
    }
}

pub(crate) fn normalize_category(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_normalized() {
        let mut state = FilterState::new();
        state.set_categories(["  try ", "Tackle", ""]);
        assert!(state.categories().contains("TRY"));
        assert!(state.categories().contains("TACKLE"));
        assert_eq!(state.categories().len(), 2);
    }

    #[test]
    fn test_descriptor_add_remove() {
        let mut state = FilterState::new();
        state.add_descriptor(FilterDescriptor::new("zone", "22"));
        state.add_descriptor(FilterDescriptor::new("zone", "22"));
        assert_eq!(state.descriptors().len(), 1);
        state.remove_descriptor("zone", "22");
        assert!(state.descriptors().is_empty());
    }

    #[test]
    fn test_team_selector_modes() {
        let mut state = FilterState::new();
        assert_eq!(state.team_selector(), TeamSelector::Any);
        state.set_selected_team(Some("MIS EQUIPOS"));
        assert_eq!(state.team_selector(), TeamSelector::AllOwn);
        state.set_selected_team(Some("RIVALES"));
        assert_eq!(state.team_selector(), TeamSelector::AllOpponents);
        state.set_selected_team(Some("Union RC"));
        assert_eq!(state.team_selector(), TeamSelector::Name("Union RC"));
        state.set_selected_team(Some("  "));
        assert_eq!(state.team_selector(), TeamSelector::Any);
    }

    #[test]
    fn test_clear() {
        let mut state = FilterState::new();
        state.set_categories(["TRY"]);
        state.add_descriptor(FilterDescriptor::new("zone", "22"));
        state.set_selected_team(Some("RIVALES"));
        state.clear();
        assert!(state.is_empty());
    }
}
