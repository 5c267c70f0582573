/**
 * Mock Handlers
 *
 * Canned responses under `/api/mock/...` for working on the client without
 * real accounts.
 *
 * # Accounts
 *
 * Only the `test1` fixture exists: both `kitsuUserID` and `malUsername` must
 * be `test1`. Its lists hold four anime: one up to date, one missing and two
 * that need an update.
 *
 * # Sync Outcomes
 *
 * Mock sync picks one of three outcomes at random: everything succeeds, the
 * missing entry fails to be added, or one update fails. The returned diff is
 * recomputed from the fixture lists after applying the successes.
 */
use axum::{
    extract::{rejection::JsonRejection, Query},
    http::StatusCode,
    response::Json,
};
use chrono::{Duration, Utc};
use rand::Rng;

use crate::backend::error::BackendError;
use crate::shared::anime::{sort_by_id, Anime, WatchStatus};
use crate::shared::api::{CheckQuery, CheckResponse, SyncRequest, SyncResponse, VerifyRequest, VerifyResponse};
use crate::shared::compare::compare;
use crate::shared::sync::{Fail, SyncResult};

pub const MOCK_ACCOUNT: &str = "test1";
pub const PLACEHOLDER_IMAGE: &str = "/static/assets/img/placeholder_100x145.png";

/// Number of distinct mock sync outcomes
pub const SYNC_OUTCOMES: u8 = 3;

const ORE_MONOGATARI: u64 = 2;
const KUROKO_NO_BASUKE: u64 = 4;

/// `GET /api/mock/check`
pub async fn mock_check(Query(query): Query<CheckQuery>) -> Result<Json<CheckResponse>, BackendError> {
    check_account(&query.kitsu_user_id, &query.mal_username)?;
    let (mal, kitsu) = fixture();
    Ok(Json(CheckResponse {
        mal_username: query.mal_username,
        diff: compare(mal, kitsu),
    }))
}

/// `POST /api/mock/sync`
pub async fn mock_sync(body: Result<Json<SyncRequest>, JsonRejection>) -> Result<Json<SyncResponse>, BackendError> {
    let Json(request) = body.map_err(|e| {
        BackendError::handler(StatusCode::BAD_REQUEST, "Sync: Could not decode request.", e.body_text())
    })?;
    check_account(&request.kitsu_user_id, &request.mal_username)?;

    let outcome = rand::thread_rng().gen_range(0..SYNC_OUTCOMES);
    tracing::debug!("Mock sync outcome {}", outcome);

    let mut response = sync_outcome(outcome);
    response.mal_username = request.mal_username;
    Ok(Json(response))
}

/// `POST /api/mock/mal-verify`; every username and password is valid
pub async fn mock_mal_verify(body: Result<Json<VerifyRequest>, JsonRejection>) -> Json<VerifyResponse> {
    let value = body.map(|Json(r)| r.mal_username).unwrap_or_default();
    Json(VerifyResponse { is_valid: true, value })
}

fn check_account(kitsu_user_id: &str, mal_username: &str) -> Result<(), BackendError> {
    if kitsu_user_id == MOCK_ACCOUNT && mal_username == MOCK_ACCOUNT {
        Ok(())
    } else {
        let message = "Accounts do not match or unknown test.";
        Err(BackendError::handler(StatusCode::UNAUTHORIZED, message, message))
    }
}

/// The `test1` MyAnimeList and Kitsu lists
pub fn fixture() -> (Vec<Anime>, Vec<Anime>) {
    let now = Utc::now();
    let before = now - Duration::days(1);
    let entry = |id: u64, title: &str, rating: &str| Anime {
        rating: rating.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        ..Anime::new(id, title)
    };

    let mal = vec![
        Anime {
            status: Some(WatchStatus::OnHold),
            last_updated: Some(now),
            ..entry(1, "Death parade", "4.0")
        },
        Anime {
            status: Some(WatchStatus::CurrentlyWatching),
            episodes_watched: 5,
            last_updated: Some(before),
            ..entry(3, "Shingeki no Kyojin", "3.5")
        },
        Anime {
            status: Some(WatchStatus::CurrentlyWatching),
            episodes_watched: 6,
            last_updated: Some(before),
            ..entry(KUROKO_NO_BASUKE, "Kuroko no basuke", "4.5")
        },
    ];

    let kitsu = vec![
        Anime {
            status: Some(WatchStatus::OnHold),
            last_updated: Some(now),
            ..entry(1, "Death parade", "4.0")
        },
        Anime {
            status: Some(WatchStatus::CurrentlyWatching),
            last_updated: Some(now),
            ..entry(ORE_MONOGATARI, "Ore monogatari", "4.0")
        },
        Anime {
            status: Some(WatchStatus::CurrentlyWatching),
            episodes_watched: 10,
            rewatching: true,
            last_updated: Some(now),
            ..entry(3, "Shingeki no Kyojin", "2.5")
        },
        Anime {
            status: Some(WatchStatus::CurrentlyWatching),
            episodes_watched: 6,
            rewatching: true,
            last_updated: Some(now),
            ..entry(KUROKO_NO_BASUKE, "Kuroko no basuke", "5.0")
        },
    ];

    (mal, kitsu)
}

/// Mock sync result number `outcome` (taken modulo `SYNC_OUTCOMES`)
pub fn sync_outcome(outcome: u8) -> SyncResponse {
    let (mut mal, kitsu) = fixture();
    let before = compare(mal.clone(), kitsu.clone());

    let failing = match outcome % SYNC_OUTCOMES {
        0 => None,
        1 => Some((ORE_MONOGATARI, "something went wrong")),
        _ => Some((KUROKO_NO_BASUKE, "misdirection overflow")),
    };
    let fails = |id: u64| failing.filter(|(fid, _)| *fid == id).map(|(_, e)| e);

    let mut sync = SyncResult::default();
    for anime in before.missing {
        match fails(anime.id) {
            Some(error) => sync.add_fails.push(Fail::new(anime, error)),
            None => {
                mal.push(anime.clone());
                sync.adds.push(anime);
            }
        }
    }
    for d in before.need_update {
        let anime = d.anime;
        match fails(anime.id) {
            Some(error) => sync.update_fails.push(Fail::new(anime, error)),
            None => {
                if let Some(slot) = mal.iter_mut().find(|a| a.id == anime.id) {
                    *slot = anime.clone();
                }
                sync.updates.push(anime);
            }
        }
    }

    sort_by_id(&mut mal);
    SyncResponse {
        mal_username: MOCK_ACCOUNT.to_string(),
        sync,
        diff: compare(mal, kitsu),
    }
}
