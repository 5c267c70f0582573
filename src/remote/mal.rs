/**
 * MyAnimeList Client
 *
 * Client for the MyAnimeList XML API.
 *
 * # Endpoints
 *
 * - `GET malappinfo.php?u={user}&status=all&type=anime` - a user's list
 * - `GET api/account/verify_credentials.xml` - credential check (basic auth)
 * - `POST api/animelist/add/{id}.xml` - add an entry (basic auth)
 * - `POST api/animelist/update/{id}.xml` - update an entry (basic auth)
 *
 * Add and update send the entry as XML in the `data` form field.
 *
 * # Quirks
 *
 * The list endpoint answers 200 with an `<error>` element for unknown users,
 * and titles may contain the HTML entity `&bull;`, which is not valid XML.
 */
use chrono::DateTime;
use reqwest::header::USER_AGENT;
use serde::{Deserialize, Serialize};

use crate::remote::{join_url, send, Credentials, RemoteError};
use crate::shared::anime::{mal_score_from_rating, rating_from_mal_score, Anime, WatchStatus};
use crate::shared::error::SharedError;

/// MyAnimeList API client
#[derive(Debug, Clone)]
pub struct MalClient {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
    credentials: Option<Credentials>,
}

impl MalClient {
    pub fn new(http: reqwest::Client, base_url: &str, user_agent: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            user_agent: user_agent.to_string(),
            credentials: None,
        }
    }

    /// Credentials used for adding and updating entries
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<(), RemoteError> {
        let url = join_url(&self.base_url, "api/account/verify_credentials.xml");
        let request = self
            .http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .basic_auth(username, Some(password));
        send(request).await?;
        Ok(())
    }

    pub async fn anime_list(&self, username: &str) -> Result<Vec<Anime>, RemoteError> {
        let url = join_url(&self.base_url, "malappinfo.php");
        let request = self
            .http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .query(&[("u", username), ("status", "all"), ("type", "anime")]);

        let (status, request, body) = send(request).await?;
        parse_anime_list(&body).map_err(|message| RemoteError::Decode {
            status,
            request,
            message,
        })
    }

    pub async fn add_entry(&self, id: u64, entry: &MalEntry) -> Result<(), RemoteError> {
        self.post_entry(&format!("api/animelist/add/{}.xml", id), entry).await
    }

    pub async fn update_entry(&self, id: u64, entry: &MalEntry) -> Result<(), RemoteError> {
        self.post_entry(&format!("api/animelist/update/{}.xml", id), entry).await
    }

    async fn post_entry(&self, path: &str, entry: &MalEntry) -> Result<(), RemoteError> {
        let data = entry.to_xml()?;
        let mut request = self
            .http
            .post(join_url(&self.base_url, path))
            .header(USER_AGENT, &self.user_agent)
            .form(&[("data", data)]);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }
        send(request).await?;
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct MalListXml {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    anime: Vec<MalAnimeRow>,
}

/// One `<anime>` row of the list endpoint
///
/// Every field is read as text since MyAnimeList sends empty elements for
/// missing numbers.
#[derive(Debug, Default, Deserialize)]
struct MalAnimeRow {
    #[serde(default)]
    series_animedb_id: String,
    #[serde(default)]
    series_title: String,
    #[serde(default)]
    series_image: String,
    #[serde(default)]
    my_watched_episodes: String,
    #[serde(default)]
    my_score: String,
    #[serde(default)]
    my_status: String,
    #[serde(default)]
    my_rewatching: String,
    #[serde(default)]
    my_rewatching_ep: String,
    #[serde(default)]
    my_last_updated: String,
}

impl MalAnimeRow {
    fn to_anime(&self) -> Result<Anime, SharedError> {
        let id = self.series_animedb_id.trim().parse::<u64>().map_err(|e| {
            SharedError::conversion(format!(
                "invalid anime ID {:?} of {:?}: {}",
                self.series_animedb_id, self.series_title, e
            ))
        })?;

        let status = self
            .my_status
            .trim()
            .parse::<i64>()
            .map_err(|e| SharedError::conversion(e.to_string()))
            .and_then(WatchStatus::from_mal_code)
            .map_err(|e| {
                SharedError::conversion(format!(
                    "no status in Anime(ID: {}, Title: {:?}): {}",
                    id, self.series_title, e
                ))
            })?;

        let last_updated = self
            .my_last_updated
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| {
                SharedError::conversion(format!(
                    "could not parse time of Anime(ID: {}, Title: {:?}, LastUpdated: {:?})",
                    id, self.series_title, self.my_last_updated
                ))
            })?;

        Ok(Anime {
            id,
            status: Some(status),
            title: self.series_title.clone(),
            episodes_watched: parse_count(&self.my_watched_episodes),
            last_updated: Some(last_updated),
            rating: rating_from_mal_score(parse_count(&self.my_score)),
            // The list endpoint does not send comments.
            notes: String::new(),
            times_rewatched: parse_count(&self.my_rewatching_ep),
            rewatching: self.my_rewatching.trim() == "1",
            image: self.series_image.clone(),
        })
    }
}

fn parse_count(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

/// Parse the body of the list endpoint
///
/// Rows that cannot be converted are logged and skipped. An `<error>`
/// element or malformed XML fails the whole list.
pub fn parse_anime_list(body: &str) -> Result<Vec<Anime>, String> {
    let body = body.replace("&bull;", "&#8226;");
    let list: MalListXml = quick_xml::de::from_str(&body).map_err(|e| e.to_string())?;

    if let Some(error) = list.error.filter(|e| !e.trim().is_empty()) {
        return Err(error.trim().to_string());
    }

    let mut anime = Vec::with_capacity(list.anime.len());
    for row in &list.anime {
        match row.to_anime() {
            Ok(a) => anime.push(a),
            Err(e) => tracing::warn!("Discarded MyAnimeList entry: {}", e),
        }
    }
    Ok(anime)
}

/// Values sent when adding or updating a MyAnimeList entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename = "entry")]
pub struct MalEntry {
    pub episode: u32,
    pub status: u8,
    pub score: u32,
    pub times_rewatched: u32,
    pub enable_rewatching: u8,
    pub comments: String,
}

impl MalEntry {
    /// Entry carrying the wanted state of `anime`
    ///
    /// Fails when the anime has no status, since MyAnimeList requires one.
    pub fn from_anime(anime: &Anime) -> Result<Self, SharedError> {
        let status = anime.status.ok_or_else(|| {
            SharedError::conversion(format!(
                "no valid status key provided for Anime(ID: {}, Title: {:?})",
                anime.id, anime.title
            ))
        })?;

        Ok(Self {
            episode: anime.episodes_watched,
            status: status.mal_code(),
            score: mal_score_from_rating(&anime.rating),
            times_rewatched: anime.times_rewatched,
            enable_rewatching: u8::from(anime.rewatching),
            comments: anime.notes.clone(),
        })
    }

    pub fn to_xml(&self) -> Result<String, SharedError> {
        let entry = quick_xml::se::to_string(self)
            .map_err(|e| SharedError::serialization(format!("MyAnimeList entry: {}", e)))?;
        Ok(format!(r#"<?xml version="1.0" encoding="UTF-8"?>{}"#, entry))
    }
}
