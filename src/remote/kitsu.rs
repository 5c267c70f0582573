//! Kitsu client
//!
//! Reads a user's anime library from the Kitsu JSON:API
//! (`api/edge/library-entries`). Each page includes the related anime and
//! their mappings, which carry the MyAnimeList ID used to join the lists.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::remote::{join_url, send, RemoteError};
use crate::shared::anime::{Anime, WatchStatus};
use crate::shared::error::SharedError;

/// Entries requested per page
pub const PAGE_LIMIT: u32 = 500;

const MAL_ANIME_SITE: &str = "myanimelist/anime";

/// Kitsu API client
#[derive(Debug, Clone)]
pub struct KitsuClient {
    http: reqwest::Client,
    base_url: String,
}

impl KitsuClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// Fetch every page of a user's anime library
    pub async fn library(&self, user_id: &str) -> Result<Vec<Anime>, RemoteError> {
        let limit = PAGE_LIMIT.to_string();
        let mut request = self
            .http
            .get(join_url(&self.base_url, "api/edge/library-entries"))
            .query(&[
                ("filter[userId]", user_id),
                ("filter[kind]", "anime"),
                ("include", "anime,anime.mappings"),
                ("page[limit]", limit.as_str()),
            ]);

        let mut anime = Vec::new();
        loop {
            let (status, summary, body) = send(request).await?;
            let document: Document = serde_json::from_str(&body).map_err(|e| RemoteError::Decode {
                status,
                request: summary.clone(),
                message: e.to_string(),
            })?;

            anime.extend(document.to_anime()?);

            match document.links.and_then(|l| l.next) {
                Some(next) => {
                    tracing::debug!("Following Kitsu page {}", next);
                    request = self.http.get(next);
                }
                None => break,
            }
        }

        tracing::debug!("Kitsu user {} has {} anime entries", user_id, anime.len());
        Ok(anime)
    }
}

/// A JSON:API top-level document
#[derive(Debug, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub data: Vec<Resource>,
    #[serde(default)]
    pub included: Vec<Resource>,
    #[serde(default)]
    pub links: Option<Links>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Value,
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<Linkage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    One(ResourceId),
    Many(Vec<ResourceId>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ResourceId {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Resource {
    fn related(&self, name: &str) -> Vec<&ResourceId> {
        match self.relationships.get(name).and_then(|r| r.data.as_ref()) {
            Some(Linkage::One(id)) => vec![id],
            Some(Linkage::Many(ids)) => ids.iter().collect(),
            None => Vec::new(),
        }
    }

    fn attributes<'de, T: Deserialize<'de>>(&'de self) -> Result<T, SharedError> {
        T::deserialize(&self.attributes).map_err(|e| {
            SharedError::serialization(format!("{} {}: {}", self.kind, self.id, e))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibraryEntryAttributes {
    #[serde(default, deserialize_with = "null_as_default")]
    status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    progress: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    reconsuming: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    reconsume_count: u32,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    rating: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    updated_at: String,
}

/// Kitsu sends `null` for unset attributes; read those as the zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnimeAttributes {
    #[serde(default)]
    canonical_title: String,
    #[serde(default)]
    poster_image: Option<HashMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MappingAttributes {
    #[serde(default)]
    external_site: String,
    #[serde(default)]
    external_id: String,
}

impl Document {
    /// Convert every library entry of this page
    ///
    /// Entries with no MyAnimeList mapping cannot be synced and are skipped.
    /// Unparsable timestamps or mapping IDs fail the whole page.
    pub fn to_anime(&self) -> Result<Vec<Anime>, SharedError> {
        let included: HashMap<(&str, &str), &Resource> = self
            .included
            .iter()
            .map(|r| ((r.kind.as_str(), r.id.as_str()), r))
            .collect();

        let mut anime = Vec::with_capacity(self.data.len());
        for entry in &self.data {
            let related = entry
                .related("anime")
                .into_iter()
                .next()
                .and_then(|id| included.get(&(id.kind.as_str(), id.id.as_str())).copied());
            match library_entry_to_anime(entry, related, &included)? {
                Some(a) => anime.push(a),
                None => tracing::warn!("Skipped Kitsu entry {} without a MyAnimeList mapping", entry.id),
            }
        }
        Ok(anime)
    }
}

fn library_entry_to_anime<'a>(
    entry: &Resource,
    related: Option<&'a Resource>,
    included: &HashMap<(&'a str, &'a str), &'a Resource>,
) -> Result<Option<Anime>, SharedError> {
    let attrs: LibraryEntryAttributes = entry.attributes()?;

    let last_updated = DateTime::parse_from_rfc3339(&attrs.updated_at)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            SharedError::conversion(format!(
                "parsing updatedAt {:?} of library entry {}: {}",
                attrs.updated_at, entry.id, e
            ))
        })?;

    let status = match WatchStatus::from_kitsu(&attrs.status) {
        Ok(status) => Some(status),
        Err(e) => {
            tracing::warn!("Library entry {}: {}", entry.id, e);
            None
        }
    };

    let mut anime = Anime {
        status,
        episodes_watched: attrs.progress,
        last_updated: Some(last_updated),
        rating: attrs.rating.unwrap_or_default(),
        notes: attrs.notes.unwrap_or_default(),
        times_rewatched: attrs.reconsume_count,
        rewatching: attrs.reconsuming,
        ..Default::default()
    };

    let Some(related) = related else {
        return Ok(None);
    };

    let anime_attrs: AnimeAttributes = related.attributes()?;
    anime.title = anime_attrs.canonical_title;
    anime.image = anime_attrs
        .poster_image
        .as_ref()
        .and_then(|images| images.get("tiny"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut mal_id = None;
    for id in related.related("mappings") {
        let Some(mapping) = included.get(&(id.kind.as_str(), id.id.as_str())) else {
            continue;
        };
        let mapping: MappingAttributes = mapping.attributes()?;
        if mapping.external_site == MAL_ANIME_SITE {
            let id = mapping.external_id.trim().parse::<u64>().map_err(|e| {
                SharedError::conversion(format!(
                    "converting anime ID {:?} of {:?}: {}",
                    mapping.external_id, anime.title, e
                ))
            })?;
            mal_id = Some(id);
        }
    }

    Ok(mal_id.map(|id| Anime { id, ..anime }))
}
