/**
 * API Routes
 *
 * # Routes
 *
 * ## Real endpoints
 * - `GET /api/check` - Compare a MyAnimeList list with a Kitsu library
 * - `POST /api/sync` - Push the Kitsu state to MyAnimeList
 * - `POST /api/mal-verify` - Check MyAnimeList credentials
 *
 * ## Mock endpoints
 * - `GET /api/mock/check`
 * - `POST /api/mock/sync`
 * - `POST /api/mock/mal-verify`
 */
use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::handlers::{check, mal_verify, mock_check, mock_mal_verify, mock_sync, sync};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Credentials for `sync` and `mal-verify` travel in the JSON body and are
/// only forwarded to MyAnimeList.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/check", get(check))
        .route("/api/sync", post(sync))
        .route("/api/mal-verify", post(mal_verify))
}

/// Configure the canned `/api/mock/*` routes
pub fn configure_mock_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/mock/check", get(mock_check))
        .route("/api/mock/sync", post(mock_sync))
        .route("/api/mock/mal-verify", post(mock_mal_verify))
}
