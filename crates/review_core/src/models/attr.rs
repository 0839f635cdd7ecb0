//! Typed event attribute bag.
//!
//! Imported events carry an open set of extra attributes ("descriptors")
//! whose spelling and casing varies across import profiles. `AttrBag` gives
//! that bag a typed shape with a case-insensitive lookup helper and alias
//! chain resolution for the known legacy key spellings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single attribute value as it arrives from the import payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<AttrValue>),
}

impl AttrValue {
    /// Numeric view of the value. Numeric strings parse; everything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Descriptor match: equality against a filter value, or containment
    /// when the attribute is array-valued.
    pub fn matches_text(&self, needle: &str) -> bool {
        match self {
            AttrValue::Text(s) => s == needle,
            AttrValue::Number(n) => needle.trim().parse::<f64>().map(|v| v == *n).unwrap_or(false),
            AttrValue::Bool(b) => needle.eq_ignore_ascii_case(if *b { "true" } else { "false" }),
            AttrValue::List(items) => items.iter().any(|item| item.matches_text(needle)),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

/// Open attribute mapping attached to every event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AttrBag(HashMap<String, AttrValue>);

impl AttrBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    /// Case-insensitive lookup. An exact spelling wins when both exist.
    pub fn get_ci(&self, key: &str) -> Option<&AttrValue> {
        if let Some(value) = self.0.get(key) {
            return Some(value);
        }
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// Finite numeric value for one key (case-insensitive).
    pub fn finite(&self, key: &str) -> Option<f64> {
        self.get_ci(key)
            .and_then(AttrValue::as_f64)
            .filter(|v| v.is_finite())
    }

    /// First finite numeric value along a legacy alias chain.
    pub fn first_finite(&self, aliases: &[&str]) -> Option<f64> {
        aliases.iter().find_map(|key| self.finite(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let mut bag = AttrBag::new();
        bag.insert("Zone", "22");
        assert!(bag.get("zone").is_none());
        assert_eq!(bag.get_ci("zone"), Some(&AttrValue::Text("22".into())));
        assert_eq!(bag.get_ci("ZONE"), Some(&AttrValue::Text("22".into())));
    }

    #[test]
    fn test_exact_spelling_wins() {
        let mut bag = AttrBag::new();
        bag.insert("start", 10.0);
        bag.insert("Start", 20.0);
        assert_eq!(bag.finite("start"), Some(10.0));
        assert_eq!(bag.finite("Start"), Some(20.0));
    }

    #[test]
    fn test_numeric_strings_parse() {
        let mut bag = AttrBag::new();
        bag.insert("clip_start", " 42.5 ");
        assert_eq!(bag.finite("clip_start"), Some(42.5));
    }

    #[test]
    fn test_alias_chain() {
        let mut bag = AttrBag::new();
        bag.insert("result", "won");
        bag.insert("clipBegin", 7.0);
        assert_eq!(bag.first_finite(&["clip_start", "clipStart", "clipBegin"]), Some(7.0));
        assert_eq!(bag.first_finite(&["clip_start", "result"]), None);
    }

    #[test]
    fn test_list_containment() {
        let value = AttrValue::List(vec!["ruck".into(), "maul".into()]);
        assert!(value.matches_text("maul"));
        assert!(!value.matches_text("scrum"));
    }

    #[test]
    fn test_untagged_deserialization() {
        let bag: AttrBag =
            serde_json::from_str(r#"{"zone":"22","phase":3,"tags":["quick","won"]}"#).unwrap();
        assert_eq!(bag.finite("phase"), Some(3.0));
        assert!(bag.get("tags").unwrap().matches_text("quick"));
    }
}
