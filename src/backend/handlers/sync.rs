/**
 * Sync Handler
 *
 * `POST /api/sync`
 *
 * # Sync Process
 *
 * 1. Compute the difference between the two lists
 * 2. Add missing entries and update stale ones on MyAnimeList
 * 3. Compute the difference again, so the client sees what is left
 *
 * Per-entry failures do not fail the request; they are reported in `Sync`.
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::remote::Credentials;
use crate::shared::api::{SyncRequest, SyncResponse};

/// Sync handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body cannot be decoded or a field is empty
/// * `409 Conflict` - If either list cannot be fetched
///
/// # Example Request
///
/// ```http
/// POST /api/sync HTTP/1.1
/// Content-Type: application/json
///
/// { "kitsuUserID": "42", "malUsername": "fan", "malPassword": "secret" }
/// ```
pub async fn sync(
    State(state): State<AppState>,
    body: Result<Json<SyncRequest>, JsonRejection>,
) -> Result<Json<SyncResponse>, BackendError> {
    let Json(request) = body.map_err(|e| {
        BackendError::handler(StatusCode::BAD_REQUEST, "Sync: Could not decode request.", e.body_text())
    })?;
    request.validate()?;
    tracing::info!(
        "Sync request for MyAnimeList {:?} from Kitsu {:?}",
        request.mal_username,
        request.kitsu_user_id
    );

    let credentials = Credentials::new(request.mal_username.clone(), request.mal_password);
    let client = state.sync_client(Some(credentials));

    let diff = client.diff(&request.mal_username, &request.kitsu_user_id).await?;
    let sync = client.sync(&diff).await;
    let diff = client.diff(&request.mal_username, &request.kitsu_user_id).await?;

    Ok(Json(SyncResponse {
        mal_username: request.mal_username,
        sync,
        diff,
    }))
}
