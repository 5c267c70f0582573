/**
 * Anime List Model
 *
 * This module defines the service-agnostic `Anime` entry used on both sides
 * of a comparison. MyAnimeList rows and Kitsu library entries are converted
 * into this shape before they are compared, and the same shape travels over
 * the wire in `check` and `sync` responses.
 *
 * Entries are identified by their MyAnimeList anime ID. Kitsu entries get
 * that ID from their `myanimelist/anime` mapping.
 */
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Watch status of a list entry
///
/// Serialized as its kebab-case key. The numeric MyAnimeList codes are:
///
/// | key                  | MAL |
/// |----------------------|-----|
/// | `currently-watching` | 1   |
/// | `completed`          | 2   |
/// | `on-hold`            | 3   |
/// | `dropped`            | 4   |
/// | `plan-to-watch`      | 6   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatchStatus {
    CurrentlyWatching,
    Completed,
    OnHold,
    Dropped,
    PlanToWatch,
}

impl WatchStatus {
    /// The kebab-case key of this status
    pub fn key(&self) -> &'static str {
        match self {
            WatchStatus::CurrentlyWatching => "currently-watching",
            WatchStatus::Completed => "completed",
            WatchStatus::OnHold => "on-hold",
            WatchStatus::Dropped => "dropped",
            WatchStatus::PlanToWatch => "plan-to-watch",
        }
    }

    /// Map a MyAnimeList `my_status` code
    pub fn from_mal_code(code: i64) -> Result<Self, SharedError> {
        match code {
            1 => Ok(WatchStatus::CurrentlyWatching),
            2 => Ok(WatchStatus::Completed),
            3 => Ok(WatchStatus::OnHold),
            4 => Ok(WatchStatus::Dropped),
            6 => Ok(WatchStatus::PlanToWatch),
            other => Err(SharedError::conversion(format!(
                "no valid status value provided: {}",
                other
            ))),
        }
    }

    /// The MyAnimeList code used when adding or updating entries
    pub fn mal_code(&self) -> u8 {
        match self {
            WatchStatus::CurrentlyWatching => 1,
            WatchStatus::Completed => 2,
            WatchStatus::OnHold => 3,
            WatchStatus::Dropped => 4,
            WatchStatus::PlanToWatch => 6,
        }
    }

    /// Map a Kitsu library entry status
    pub fn from_kitsu(status: &str) -> Result<Self, SharedError> {
        match status {
            "current" => Ok(WatchStatus::CurrentlyWatching),
            "planned" => Ok(WatchStatus::PlanToWatch),
            "completed" => Ok(WatchStatus::Completed),
            "on_hold" => Ok(WatchStatus::OnHold),
            "dropped" => Ok(WatchStatus::Dropped),
            other => Err(SharedError::conversion(format!(
                "unknown Kitsu library status: {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WatchStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "currently-watching" => Ok(WatchStatus::CurrentlyWatching),
            "completed" => Ok(WatchStatus::Completed),
            "on-hold" => Ok(WatchStatus::OnHold),
            "dropped" => Ok(WatchStatus::Dropped),
            "plan-to-watch" => Ok(WatchStatus::PlanToWatch),
            _ => Err(SharedError::validation("status", format!("no valid status key provided: {:?}", s))),
        }
    }
}

/// A single anime list entry
///
/// # Fields
/// * `id` - MyAnimeList anime ID, the join key between the two lists
/// * `status` - Watch status, `None` when the source did not provide one
/// * `rating` - Rating out of 5.0 with one decimal (`"4.5"`), empty when unrated
/// * `last_updated` - When the entry was last changed on its service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Status", default)]
    pub status: Option<WatchStatus>,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "EpisodesWatched", default)]
    pub episodes_watched: u32,
    #[serde(rename = "LastUpdated", default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(rename = "Rating", default)]
    pub rating: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,
    #[serde(rename = "TimesRewatched", default)]
    pub times_rewatched: u32,
    #[serde(rename = "Rewatching", default)]
    pub rewatching: bool,
    #[serde(rename = "Image", default)]
    pub image: String,
}

impl Anime {
    /// Create an entry with only an ID and a title
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Sort a list by MyAnimeList ID, as required by [`find_by_id`]
pub fn sort_by_id(anime: &mut [Anime]) {
    anime.sort_by_key(|a| a.id);
}

/// Binary search a list sorted by ID
pub fn find_by_id(anime: &[Anime], id: u64) -> Option<&Anime> {
    anime
        .binary_search_by_key(&id, |a| a.id)
        .ok()
        .map(|i| &anime[i])
}

/// Convert a MyAnimeList score (0-10) to a rating string out of 5.0
pub fn rating_from_mal_score(score: u32) -> String {
    format!("{:.1}", f64::from(score) / 2.0)
}

/// Convert a rating string out of 5.0 to a MyAnimeList score (0-10)
///
/// Half steps round up. Empty or unparsable ratings map to 0.
pub fn mal_score_from_rating(rating: &str) -> u32 {
    match rating.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => (value * 2.0).ceil().min(10.0) as u32,
        _ => 0,
    }
}
