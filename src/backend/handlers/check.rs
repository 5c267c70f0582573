/**
 * Check Handler
 *
 * `GET /api/check?malUsername=..&kitsuUserID=..`
 *
 * Fetches both lists and returns their difference, together with the
 * MyAnimeList username it was computed for.
 */
use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::api::{CheckQuery, CheckResponse};

/// Check handler
///
/// # Errors
///
/// * `400 Bad Request` - If either account name is empty
/// * `409 Conflict` - If either list cannot be fetched
///
/// # Example Response
///
/// ```json
/// {
///   "MalUsername": "fan",
///   "Left": [...], "Right": [...],
///   "Missing": [...], "NeedUpdate": [...], "UpToDate": [...], "Uncertain": [...]
/// }
/// ```
pub async fn check(
    State(state): State<AppState>,
    Query(query): Query<CheckQuery>,
) -> Result<Json<CheckResponse>, BackendError> {
    query.validate()?;
    tracing::info!(
        "Check request for MyAnimeList {:?} against Kitsu {:?}",
        query.mal_username,
        query.kitsu_user_id
    );

    let client = state.sync_client(None);
    let diff = client.diff(&query.mal_username, &query.kitsu_user_id).await?;

    Ok(Json(CheckResponse {
        mal_username: query.mal_username,
        diff,
    }))
}
