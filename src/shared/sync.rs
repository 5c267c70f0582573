//! Sync outcome types

use serde::{Deserialize, Serialize};

use crate::shared::anime::Anime;
use crate::shared::compare::null_as_empty;

/// An entry that could not be added or updated, with the reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fail {
    #[serde(rename = "Anime")]
    pub anime: Anime,
    #[serde(rename = "Error")]
    pub error: String,
}

impl Fail {
    pub fn new(anime: Anime, error: impl Into<String>) -> Self {
        Self {
            anime,
            error: error.into(),
        }
    }
}

/// Per-item results of a sync run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncResult {
    #[serde(rename = "Adds", default, deserialize_with = "null_as_empty")]
    pub adds: Vec<Anime>,
    #[serde(rename = "Updates", default, deserialize_with = "null_as_empty")]
    pub updates: Vec<Anime>,
    #[serde(rename = "AddFails", default, deserialize_with = "null_as_empty")]
    pub add_fails: Vec<Fail>,
    #[serde(rename = "UpdateFails", default, deserialize_with = "null_as_empty")]
    pub update_fails: Vec<Fail>,
}

impl SyncResult {
    pub fn has_failures(&self) -> bool {
        !self.add_fails.is_empty() || !self.update_fails.is_empty()
    }

    pub fn total_succeeded(&self) -> usize {
        self.adds.len() + self.updates.len()
    }

    pub fn total_failed(&self) -> usize {
        self.add_fails.len() + self.update_fails.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let result = SyncResult {
            adds: vec![Anime::new(1, "a")],
            updates: vec![Anime::new(2, "b"), Anime::new(3, "c")],
            add_fails: vec![Fail::new(Anime::new(4, "d"), "boom")],
            update_fails: vec![],
        };
        assert!(result.has_failures());
        assert_eq!(result.total_succeeded(), 3);
        assert_eq!(result.total_failed(), 1);
        assert!(!SyncResult::default().has_failures());
    }

    #[test]
    fn test_wire_names() {
        let result = SyncResult {
            add_fails: vec![Fail::new(Anime::new(4, "d"), "boom")],
            ..Default::default()
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["AddFails"][0]["Error"], "boom");
        assert_eq!(value["AddFails"][0]["Anime"]["ID"], 4);
        assert!(value["Adds"].as_array().unwrap().is_empty());
    }
}
