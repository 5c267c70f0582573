/**
 * Sync Client
 *
 * The sync service: fetches both lists, compares them and pushes the Kitsu
 * state to MyAnimeList.
 *
 * # Sync Process
 *
 * 1. Every `Missing` entry is added to MyAnimeList
 * 2. Every `NeedUpdate` entry is updated on MyAnimeList
 *
 * Calls are made one at a time. A failing entry does not stop the run; it is
 * recorded in `AddFails` or `UpdateFails` with the error text.
 */
use std::sync::Arc;

use thiserror::Error;

use crate::remote::{KitsuApi, MalApi, MalEntry, RemoteError, Resources};
use crate::shared::anime::{sort_by_id, Anime};
use crate::shared::compare::{compare, Diff};
use crate::shared::sync::{Fail, SyncResult};

/// Failure to fetch one of the two lists
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("could not get MyAnimeList: {0}")]
    Mal(#[source] RemoteError),

    #[error("could not get Kitsu list: {0}")]
    Kitsu(#[source] RemoteError),
}

impl DiffError {
    pub fn remote(&self) -> &RemoteError {
        match self {
            DiffError::Mal(e) | DiffError::Kitsu(e) => e,
        }
    }
}

/// Service that compares and syncs anime lists
#[derive(Clone)]
pub struct SyncClient {
    resources: Arc<dyn Resources>,
}

impl SyncClient {
    pub fn new(resources: Arc<dyn Resources>) -> Self {
        Self { resources }
    }

    pub async fn verify_mal_credentials(&self, username: &str, password: &str) -> Result<(), RemoteError> {
        self.resources.verify_credentials(username, password).await
    }

    /// A MyAnimeList list, sorted by ID
    pub async fn mal_list(&self, username: &str) -> Result<Vec<Anime>, RemoteError> {
        let mut anime = self.resources.anime_list(username).await?;
        sort_by_id(&mut anime);
        Ok(anime)
    }

    pub async fn kitsu_list(&self, user_id: &str) -> Result<Vec<Anime>, RemoteError> {
        self.resources.library(user_id).await
    }

    /// Compare a MyAnimeList list against a Kitsu library
    pub async fn diff(&self, mal_username: &str, kitsu_user_id: &str) -> Result<Diff, DiffError> {
        let mal = self.mal_list(mal_username).await.map_err(DiffError::Mal)?;
        let kitsu = self.kitsu_list(kitsu_user_id).await.map_err(DiffError::Kitsu)?;

        let diff = compare(mal, kitsu);
        tracing::info!(
            mal_username,
            kitsu_user_id,
            missing = diff.missing.len(),
            need_update = diff.need_update.len(),
            up_to_date = diff.up_to_date.len(),
            uncertain = diff.uncertain.len(),
            "Compared anime lists"
        );
        Ok(diff)
    }

    /// Add missing entries and update stale ones on MyAnimeList
    pub async fn sync(&self, diff: &Diff) -> SyncResult {
        let mut result = SyncResult::default();

        for anime in &diff.missing {
            match self.add(anime).await {
                Ok(()) => result.adds.push(anime.clone()),
                Err(e) => {
                    tracing::warn!("Failed to add {} {:?}: {}", anime.id, anime.title, e);
                    result.add_fails.push(Fail::new(anime.clone(), e.to_string()));
                }
            }
        }

        for d in &diff.need_update {
            let anime = &d.anime;
            match self.update(anime).await {
                Ok(()) => result.updates.push(anime.clone()),
                Err(e) => {
                    tracing::warn!("Failed to update {} {:?}: {}", anime.id, anime.title, e);
                    result.update_fails.push(Fail::new(anime.clone(), e.to_string()));
                }
            }
        }

        tracing::info!(
            adds = result.adds.len(),
            updates = result.updates.len(),
            add_fails = result.add_fails.len(),
            update_fails = result.update_fails.len(),
            "Sync finished"
        );
        result
    }

    async fn add(&self, anime: &Anime) -> Result<(), RemoteError> {
        let entry = MalEntry::from_anime(anime)?;
        log_operation("adding", anime);
        self.resources.add_entry(anime.id, &entry).await
    }

    async fn update(&self, anime: &Anime) -> Result<(), RemoteError> {
        let entry = MalEntry::from_anime(anime)?;
        log_operation("updating", anime);
        self.resources.update_entry(anime.id, &entry).await
    }
}

fn log_operation(op: &str, anime: &Anime) {
    tracing::info!(
        id = anime.id,
        title = %anime.title,
        status = ?anime.status,
        episodes_watched = anime.episodes_watched,
        rating = %anime.rating,
        rewatching = anime.rewatching,
        times_rewatched = anime.times_rewatched,
        "{} anime",
        op
    );
}
