/**
 * MyAnimeList Verify Handler
 *
 * `POST /api/mal-verify`
 *
 * Asks MyAnimeList whether a username and password match. The answer is
 * always a 200 with `isValid`; only one value can be echoed back for the two
 * that were sent, so `value` is the username.
 */
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::ResourceProvider;
use crate::remote::MalApi;
use crate::shared::api::{VerifyRequest, VerifyResponse};

/// Verify handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body cannot be decoded
///
/// # Example Response
///
/// ```json
/// { "isValid": true, "value": "fan" }
/// ```
pub async fn mal_verify(
    State(provider): State<Arc<dyn ResourceProvider>>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, BackendError> {
    let Json(request) = body.map_err(|e| {
        BackendError::handler(StatusCode::BAD_REQUEST, "Verify: Could not decode request.", e.body_text())
    })?;

    let resources = provider.resources(None);
    let is_valid = match resources
        .verify_credentials(&request.mal_username, &request.mal_password)
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("MyAnimeList rejected {:?}: {}", request.mal_username, e);
            false
        }
    };

    Ok(Json(VerifyResponse {
        is_valid,
        value: request.mal_username,
    }))
}
