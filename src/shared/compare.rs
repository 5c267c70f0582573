//! List comparison
//!
//! Compares a MyAnimeList list (left) against a Kitsu list (right) and sorts
//! every Kitsu entry into exactly one bucket: missing from MyAnimeList, in
//! need of an update, up to date, or uncertain.
//!
//! An entry is *uncertain* when all comparable fields agree but the
//! MyAnimeList copy was last updated before the Kitsu one. The MyAnimeList
//! API reports neither notes nor rewatch counts, and it does not always bump
//! its timestamp, so such entries are reported but never synced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::anime::{find_by_id, Anime, WatchStatus};

/// Difference between two anime lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diff {
    #[serde(rename = "Left", default, deserialize_with = "null_as_empty")]
    pub left: Vec<Anime>,
    #[serde(rename = "Right", default, deserialize_with = "null_as_empty")]
    pub right: Vec<Anime>,
    #[serde(rename = "Missing", default, deserialize_with = "null_as_empty")]
    pub missing: Vec<Anime>,
    #[serde(rename = "NeedUpdate", default, deserialize_with = "null_as_empty")]
    pub need_update: Vec<AniDiff>,
    #[serde(rename = "UpToDate", default, deserialize_with = "null_as_empty")]
    pub up_to_date: Vec<Anime>,
    #[serde(rename = "Uncertain", default, deserialize_with = "null_as_empty")]
    pub uncertain: Vec<AniDiff>,
}

impl Diff {
    /// Whether a sync would add or update anything
    pub fn has_work(&self) -> bool {
        !self.missing.is_empty() || !self.need_update.is_empty()
    }
}

/// Per-entry difference; each field is `Some` only when it differs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AniDiff {
    /// The Kitsu entry, i.e. the wanted state
    #[serde(rename = "Anime")]
    pub anime: Anime,
    #[serde(rename = "Status", default)]
    pub status: Option<FieldDiff<Option<WatchStatus>>>,
    #[serde(rename = "EpisodesWatched", default)]
    pub episodes_watched: Option<FieldDiff<u32>>,
    #[serde(rename = "Rating", default)]
    pub rating: Option<FieldDiff<String>>,
    #[serde(rename = "Rewatching", default)]
    pub rewatching: Option<FieldDiff<bool>>,
    #[serde(rename = "LastUpdated", default)]
    pub last_updated: Option<FieldDiff<DateTime<Utc>>>,
}

impl AniDiff {
    /// The differing fields as display strings, in a fixed order
    pub fn changes(&self) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        if let Some(d) = &self.status {
            let show = |s: &Option<WatchStatus>| s.map(|s| s.to_string()).unwrap_or_else(|| "none".into());
            changes.push(FieldChange::new("Status", show(&d.got), show(&d.want)));
        }
        if let Some(d) = &self.episodes_watched {
            changes.push(FieldChange::new("EpisodesWatched", d.got, d.want));
        }
        if let Some(d) = &self.rating {
            changes.push(FieldChange::new("Rating", &d.got, &d.want));
        }
        if let Some(d) = &self.rewatching {
            changes.push(FieldChange::new("Rewatching", d.got, d.want));
        }
        if let Some(d) = &self.last_updated {
            let show = |t: &DateTime<Utc>| t.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S").to_string();
            changes.push(FieldChange::new("LastUpdated", show(&d.got), show(&d.want)));
        }
        changes
    }
}

/// One differing field of an `AniDiff`, formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: &'static str,
    pub got: String,
    pub want: String,
}

impl FieldChange {
    fn new(field: &'static str, got: impl ToString, want: impl ToString) -> Self {
        Self {
            field,
            got: got.to_string(),
            want: want.to_string(),
        }
    }
}

impl std::fmt::Display for FieldChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: got {}, want {}", self.field, self.got, self.want)
    }
}

/// What MyAnimeList has (`got`) versus what Kitsu has (`want`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDiff<T> {
    #[serde(rename = "Got")]
    pub got: T,
    #[serde(rename = "Want")]
    pub want: T,
}

impl<T> FieldDiff<T> {
    pub fn new(got: T, want: T) -> Self {
        Self { got, want }
    }
}

/// Compare two anime lists
///
/// `left` must be sorted by ID. Bucket order follows `right`.
pub fn compare(left: Vec<Anime>, right: Vec<Anime>) -> Diff {
    let mut diff = Diff::default();

    for anime in &right {
        match find_by_id(&left, anime.id) {
            None => diff.missing.push(anime.clone()),
            Some(found) => match compare_entry(found, anime) {
                Outcome::NeedsUpdate(d) => diff.need_update.push(d),
                Outcome::Uncertain(d) => diff.uncertain.push(d),
                Outcome::UpToDate => diff.up_to_date.push(anime.clone()),
            },
        }
    }

    diff.left = left;
    diff.right = right;
    diff
}

enum Outcome {
    NeedsUpdate(AniDiff),
    Uncertain(AniDiff),
    UpToDate,
}

fn compare_entry(left: &Anime, right: &Anime) -> Outcome {
    let mut needs_update = false;
    let mut diff = AniDiff {
        anime: right.clone(),
        ..Default::default()
    };

    if left.status != right.status {
        diff.status = Some(FieldDiff::new(left.status, right.status));
        needs_update = true;
    }
    if left.episodes_watched != right.episodes_watched {
        diff.episodes_watched = Some(FieldDiff::new(left.episodes_watched, right.episodes_watched));
        needs_update = true;
    }
    if left.rating != right.rating && !is_unrated_pair(&left.rating, &right.rating) {
        diff.rating = Some(FieldDiff::new(left.rating.clone(), right.rating.clone()));
        needs_update = true;
    }
    if left.rewatching != right.rewatching {
        diff.rewatching = Some(FieldDiff::new(left.rewatching, right.rewatching));
        needs_update = true;
    }

    let mut stale = false;
    if let (Some(got), Some(want)) = (left.last_updated, right.last_updated) {
        if got < want {
            diff.last_updated = Some(FieldDiff::new(got, want));
            stale = true;
        }
    }

    if needs_update {
        Outcome::NeedsUpdate(diff)
    } else if stale {
        Outcome::Uncertain(diff)
    } else {
        Outcome::UpToDate
    }
}

// MyAnimeList reports a score of 0 for unrated entries.
fn is_unrated_pair(got: &str, want: &str) -> bool {
    (got == "0.0" && want.is_empty()) || (got.is_empty() && want == "0.0")
}

pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn rated(id: u64, rating: &str) -> Anime {
        Anime {
            rating: rating.to_string(),
            ..Anime::new(id, format!("Anime{}", id))
        }
    }

    #[test]
    fn test_need_update_rating() {
        let left = vec![rated(1, "3.0"), rated(2, "4.0")];
        let right = vec![rated(1, "4.0"), rated(2, "5.0")];

        let diff = compare(left, right);

        assert_eq!(diff.need_update.len(), 2);
        assert_eq!(
            diff.need_update[0].rating,
            Some(FieldDiff::new("3.0".to_string(), "4.0".to_string()))
        );
        assert_eq!(diff.need_update[1].anime.rating, "5.0");
        assert!(diff.missing.is_empty());
        assert!(diff.up_to_date.is_empty());
    }

    #[test]
    fn test_unscored_mal_entry_is_not_a_difference() {
        let diff = compare(vec![rated(1, "0.0")], vec![rated(1, "")]);
        assert!(diff.need_update.is_empty());
        assert_eq!(diff.up_to_date.len(), 1);
    }

    #[test]
    fn test_need_update_status_and_episodes() {
        let left = vec![Anime {
            status: Some(WatchStatus::CurrentlyWatching),
            episodes_watched: 2,
            ..Anime::new(1, "Anime1")
        }];
        let right = vec![Anime {
            status: Some(WatchStatus::Completed),
            episodes_watched: 5,
            ..Anime::new(1, "Anime1")
        }];

        let diff = compare(left, right);

        let d = &diff.need_update[0];
        assert_eq!(
            d.status,
            Some(FieldDiff::new(Some(WatchStatus::CurrentlyWatching), Some(WatchStatus::Completed)))
        );
        assert_eq!(d.episodes_watched, Some(FieldDiff::new(2, 5)));
        assert!(d.rating.is_none());
    }

    #[test]
    fn test_changes_lists_differing_fields() {
        let d = AniDiff {
            status: Some(FieldDiff::new(None, Some(WatchStatus::Completed))),
            episodes_watched: Some(FieldDiff::new(5, 12)),
            rating: Some(FieldDiff::new("3.5".to_string(), "4.0".to_string())),
            ..Default::default()
        };

        let lines: Vec<String> = d.changes().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "Status: got none, want completed",
                "EpisodesWatched: got 5, want 12",
                "Rating: got 3.5, want 4.0",
            ]
        );
    }

    #[test]
    fn test_need_update_rewatching() {
        let left = vec![Anime::new(1, "Anime1")];
        let right = vec![Anime {
            rewatching: true,
            ..Anime::new(1, "Anime1")
        }];

        let diff = compare(left, right);
        assert_eq!(diff.need_update[0].rewatching, Some(FieldDiff::new(false, true)));
    }

    #[test]
    fn test_older_mal_timestamp_alone_is_uncertain() {
        let now = Utc::now();
        let before = now - Duration::days(1);
        let left = vec![Anime {
            last_updated: Some(before),
            ..Anime::new(1, "Anime1")
        }];
        let right = vec![Anime {
            last_updated: Some(now),
            ..Anime::new(1, "Anime1")
        }];

        let diff = compare(left, right);

        assert!(diff.need_update.is_empty());
        assert_eq!(diff.uncertain.len(), 1);
        assert_eq!(diff.uncertain[0].last_updated, Some(FieldDiff::new(before, now)));
    }

    #[test]
    fn test_newer_mal_timestamp_is_up_to_date() {
        let now = Utc::now();
        let before = now - Duration::days(1);
        let left = vec![Anime {
            last_updated: Some(now),
            ..Anime::new(1, "Anime1")
        }];
        let right = vec![Anime {
            last_updated: Some(before),
            ..Anime::new(1, "Anime1")
        }];

        let diff = compare(left, right);
        assert_eq!(diff.up_to_date.len(), 1);
        assert!(diff.uncertain.is_empty());
    }

    #[test]
    fn test_missing_keeps_right_order() {
        let left = vec![Anime::new(1, "Anime1")];
        let right = vec![Anime::new(3, "Anime3"), Anime::new(1, "Anime1"), Anime::new(2, "Anime2")];

        let diff = compare(left, right);

        let missing: Vec<u64> = diff.missing.iter().map(|a| a.id).collect();
        assert_eq!(missing, vec![3, 2]);
        assert_eq!(diff.up_to_date.len(), 1);
        assert!(diff.has_work());
        assert_eq!(diff.right.len(), 3);
        assert_eq!(diff.left.len(), 1);
    }

    #[test]
    fn test_null_buckets_deserialize_as_empty() {
        let json = r#"{"Left":null,"Right":[],"Missing":null,"NeedUpdate":null,"UpToDate":null,"Uncertain":null}"#;
        let diff: Diff = serde_json::from_str(json).unwrap();
        assert!(diff.missing.is_empty());
        assert!(!diff.has_work());
    }
}
