/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be returned directly from handlers.
 *
 * # Response Format
 *
 * Error responses are JSON `ErrorBody` values:
 * ```json
 * {
 *   "Message": "Could not get MyAnimeList to compare.",
 *   "Cause": "GET https://myanimelist.net/malappinfo.php?u=fan: Invalid username",
 *   "StatusCode": 409,
 *   "RemoteResponse": { "StatusCode": 200, "Request": { "Method": "GET", "URL": "..." } }
 * }
 * ```
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;
use crate::remote::DiffError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(self.to_body())).into_response()
    }
}

impl From<DiffError> for BackendError {
    /// A list that cannot be fetched is a 409 naming the list
    fn from(err: DiffError) -> Self {
        match err {
            DiffError::Mal(e) => {
                BackendError::remote(StatusCode::CONFLICT, "Could not get MyAnimeList to compare.", e)
            }
            DiffError::Kitsu(e) => {
                BackendError::remote(StatusCode::CONFLICT, "Could not get Kitsu list to compare.", e)
            }
        }
    }
}
