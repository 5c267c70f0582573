use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::egui_app::api::AnisyncApi;
use crate::egui_app::config::{Config, Preferences};
use crate::egui_app::types::{PasswordState, WorkerResult};
use crate::egui_app::{DebugCategory, DebugLogger};
use crate::shared::api::{CheckQuery, CheckResponse, SyncRequest, SyncResponse, VerifyRequest};
use crate::shared::error::SharedError;
use crate::shared::status::{self, StatusView, Theme};

/// Central application state shared across egui views.
///
/// Views mutate the form fields directly and call the operations below.
/// Every network call runs on a worker thread; `poll` applies the results.
pub struct AppState {
    pub api: AnisyncApi,
    pub preferences_path: Option<PathBuf>,

    pub kitsu_user_id: String,
    pub mal_username: String,
    pub mal_password: String,
    /// Sync mode: the password field and Sync button are shown
    pub switch_on: bool,
    pub password: PasswordState,

    pub loading: bool,
    pub check_resp: Option<CheckResponse>,
    pub sync_resp: Option<SyncResponse>,
    pub status: StatusView,

    pub debug_logger: DebugLogger,
    pub debug_view_expanded: bool,
    pub debug_filter_category: Option<DebugCategory>,

    results_tx: Sender<WorkerResult>,
    results_rx: Receiver<WorkerResult>,
}

impl AppState {
    pub fn new(config: Config, preferences_path: Option<PathBuf>) -> Self {
        let debug_logger = DebugLogger::new(1000);
        debug_logger.info(
            DebugCategory::Config,
            format!("Using {} (mock: {})", config.server_url(), config.use_mock()),
        );

        let preferences = match preferences_path.as_deref().map(Preferences::load) {
            Some(Ok(preferences)) => preferences,
            Some(Err(e)) => {
                debug_logger.warn(DebugCategory::Config, format!("Ignoring preferences: {}", e));
                Preferences::default()
            }
            None => Preferences::default(),
        };

        let (results_tx, results_rx) = channel();
        Self {
            api: AnisyncApi::new(config),
            preferences_path,
            kitsu_user_id: preferences.kitsu_user_id,
            mal_username: preferences.mal_username,
            mal_password: String::new(),
            switch_on: false,
            password: PasswordState::Unchecked,
            loading: false,
            check_resp: None,
            sync_resp: None,
            status: StatusView::default(),
            debug_logger,
            debug_view_expanded: false,
            debug_filter_category: None,
            results_tx,
            results_rx,
        }
    }

    /// Compare the two lists
    pub fn check(&mut self) {
        if self.loading {
            return;
        }

        let query = CheckQuery::new(self.kitsu_user_id.trim(), self.mal_username.trim());
        if let Err(e) = query.validate() {
            self.status = status::notice(Theme::Danger, rejection(e));
            return;
        }

        self.save_preferences();
        self.check_resp = None;
        self.sync_resp = None;
        self.loading = true;
        self.debug_logger.info(
            DebugCategory::Check,
            format!("Checking {} against Kitsu user {}", query.mal_username, query.kitsu_user_id),
        );

        let api = self.api.clone();
        let tx = self.results_tx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(WorkerResult::Check(api.check(&query)));
        });
    }

    /// Push the Kitsu state to MyAnimeList
    pub fn sync(&mut self) {
        if self.loading {
            return;
        }
        if !self.switch_on || self.mal_password.is_empty() {
            self.status = status::notice(Theme::Warning, "Enter your MyAnimeList password to sync.");
            return;
        }

        let request = SyncRequest {
            kitsu_user_id: self.kitsu_user_id.trim().to_string(),
            mal_username: self.mal_username.trim().to_string(),
            mal_password: self.mal_password.clone(),
        };
        if let Err(e) = request.validate() {
            self.status = status::notice(Theme::Danger, rejection(e));
            return;
        }

        self.save_preferences();
        self.sync_resp = None;
        self.loading = true;
        self.debug_logger.info(DebugCategory::Sync, format!("Syncing {}", request.mal_username));

        let api = self.api.clone();
        let tx = self.results_tx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(WorkerResult::Sync(api.sync(&request)));
        });
    }

    /// Flip sync mode
    pub fn switch_toggle(&mut self) {
        self.switch_on = !self.switch_on;
        self.password = PasswordState::Unchecked;
        if self.switch_on {
            self.mal_password.clear();
        }
        self.debug_logger
            .debug(DebugCategory::UI, format!("Sync mode {}", if self.switch_on { "on" } else { "off" }));
    }

    /// Ask the server whether the MyAnimeList credentials are valid
    pub fn password_changed(&mut self) {
        if !self.switch_on {
            return;
        }
        if self.mal_password.is_empty() || self.mal_username.trim().is_empty() {
            self.password = PasswordState::Unchecked;
            return;
        }

        self.password = PasswordState::Checking;
        let request = VerifyRequest {
            mal_username: self.mal_username.trim().to_string(),
            mal_password: self.mal_password.clone(),
        };

        let api = self.api.clone();
        let tx = self.results_tx.clone();
        std::thread::spawn(move || {
            let password = request.mal_password.clone();
            let _ = tx.send(WorkerResult::Verify {
                password,
                result: api.verify(&request),
            });
        });
    }

    /// The username field lost focus; an unverified password is checked again
    pub fn username_committed(&mut self) {
        if self.switch_on && self.password == PasswordState::Unchecked {
            self.password_changed();
        }
    }

    /// Whether the Sync button is enabled
    ///
    /// Only the form matters: a Check beforehand is not required.
    pub fn can_sync(&self) -> bool {
        self.switch_on && !self.loading && self.password == PasswordState::Valid
    }

    /// Apply results from finished workers; called every frame
    pub fn poll(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            self.debug_logger
                .debug(DebugCategory::UI, format!("Worker finished: {}", result.operation()));
            self.handle_result(result);
        }
    }

    pub fn handle_result(&mut self, result: WorkerResult) {
        match result {
            WorkerResult::Check(result) => {
                self.loading = false;
                match result {
                    Ok(resp) => {
                        self.status = status::check_status(&resp);
                        self.debug_logger.info(DebugCategory::Check, self.status.message.clone());
                        self.check_resp = Some(resp);
                    }
                    Err(e) => {
                        self.debug_logger.error(DebugCategory::Network, format!("Check failed: {}", e));
                        self.status = status::error_status(&e);
                    }
                }
            }
            WorkerResult::Sync(result) => {
                self.loading = false;
                match result {
                    Ok(resp) => {
                        self.status = status::sync_status(&resp);
                        for fail in resp.sync.add_fails.iter().chain(&resp.sync.update_fails) {
                            self.debug_logger.warn(
                                DebugCategory::Sync,
                                format!("{} {}: {}", fail.anime.id, fail.anime.title, fail.error),
                            );
                        }
                        self.debug_logger.info(DebugCategory::Sync, self.status.message.clone());
                        self.check_resp = None;
                        self.sync_resp = Some(resp);
                    }
                    Err(e) => {
                        self.debug_logger.error(DebugCategory::Network, format!("Sync failed: {}", e));
                        self.status = status::error_status(&e);
                    }
                }
            }
            WorkerResult::Verify { password, result } => {
                if !self.switch_on || password != self.mal_password {
                    self.debug_logger.debug(DebugCategory::Verify, "Dropping stale verification");
                    return;
                }
                self.password = match result {
                    Ok(resp) if resp.is_valid => PasswordState::Valid,
                    Ok(resp) => {
                        self.debug_logger
                            .warn(DebugCategory::Verify, format!("MyAnimeList rejected {}", resp.value));
                        PasswordState::Invalid
                    }
                    Err(e) => {
                        self.debug_logger.error(DebugCategory::Network, format!("Verify failed: {}", e));
                        PasswordState::Invalid
                    }
                };
            }
        }
    }

    fn save_preferences(&self) {
        let Some(path) = self.preferences_path.as_deref() else {
            return;
        };
        let preferences = Preferences {
            kitsu_user_id: self.kitsu_user_id.trim().to_string(),
            mal_username: self.mal_username.trim().to_string(),
        };
        if let Err(e) = preferences.save(path) {
            self.debug_logger.warn(DebugCategory::Config, format!("Could not save preferences: {}", e));
        }
    }
}

/// Text shown for input rejected before any call is made
fn rejection(err: SharedError) -> String {
    match err {
        SharedError::ValidationError { message, .. } => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::{ApiError, VerifyResponse};
    use crate::shared::compare::Diff;
    use crate::shared::sync::{Fail, SyncResult};
    use crate::shared::Anime;

    fn state() -> AppState {
        AppState::new(Config::default(), None)
    }

    fn missing_one() -> CheckResponse {
        CheckResponse {
            mal_username: "fan".into(),
            diff: Diff {
                missing: vec![Anime::new(7, "Ore monogatari")],
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_check_requires_both_accounts() {
        let mut state = state();
        state.mal_username = "fan".into();

        state.check();

        assert!(!state.loading);
        assert_eq!(state.status.theme, Theme::Danger);
        assert!(state.status.message.contains("Kitsu user ID"));
    }

    #[test]
    fn test_check_result_sets_status() {
        let mut state = state();
        state.loading = true;

        state.handle_result(WorkerResult::Check(Ok(missing_one())));

        assert!(!state.loading);
        assert!(state.status.can_sync);
        assert_eq!(state.status.message, "1 missing on MyAnimeList account \"fan\".");
        assert!(state.check_resp.is_some());
    }

    #[test]
    fn test_check_error_clears_loading() {
        let mut state = state();
        state.loading = true;

        state.handle_result(WorkerResult::Check(Err(ApiError::Http {
            status: 409,
            message: "Could not get Kitsu list to compare.".into(),
        })));

        assert!(!state.loading);
        assert_eq!(state.status.message, "Error: 409 Could not get Kitsu list to compare.");
        assert!(state.check_resp.is_none());
    }

    #[test]
    fn test_sync_requires_password() {
        let mut state = state();
        state.kitsu_user_id = "42".into();
        state.mal_username = "fan".into();
        state.switch_toggle();

        state.sync();

        assert!(!state.loading);
        assert_eq!(state.status.theme, Theme::Warning);
    }

    #[test]
    fn test_sync_result_replaces_check() {
        let mut state = state();
        state.check_resp = Some(missing_one());
        state.loading = true;

        state.handle_result(WorkerResult::Sync(Ok(SyncResponse {
            mal_username: "fan".into(),
            sync: SyncResult {
                add_fails: vec![Fail::new(Anime::new(7, "Ore monogatari"), "something went wrong")],
                ..Default::default()
            },
            diff: missing_one().diff,
        })));

        assert!(!state.loading);
        assert!(state.check_resp.is_none());
        assert!(state.status.show_sync_results);
        assert_eq!(state.status.theme, Theme::Danger);
    }

    #[test]
    fn test_switch_toggle() {
        let mut state = state();
        state.mal_password = "old".into();

        state.switch_toggle();
        assert!(state.switch_on);
        assert!(state.mal_password.is_empty());

        state.password = PasswordState::Valid;
        state.switch_toggle();
        assert!(!state.switch_on);
        assert_eq!(state.password, PasswordState::Unchecked);
    }

    #[test]
    fn test_username_edit_reverifies_password() {
        let mut state = state();
        state.switch_toggle();
        state.mal_username = "fan".into();
        state.mal_password = "secret".into();
        state.password = PasswordState::Unchecked;

        state.username_committed();
        assert_eq!(state.password, PasswordState::Checking);

        state.password = PasswordState::Valid;
        state.username_committed();
        assert_eq!(state.password, PasswordState::Valid);
    }

    #[test]
    fn test_rejection_text() {
        assert_eq!(
            rejection(SharedError::validation("malUsername", "MyAnimeList username is required")),
            "MyAnimeList username is required"
        );
        assert_eq!(rejection(SharedError::conversion("bad")), "Conversion error: bad");
    }

    #[test]
    fn test_poll_applies_worker_results() {
        let mut state = state();
        state.loading = true;
        state
            .results_tx
            .send(WorkerResult::Check(Ok(missing_one())))
            .unwrap();

        state.poll();

        assert!(!state.loading);
        assert!(state
            .debug_logger
            .get_entries_by_category(DebugCategory::UI)
            .iter()
            .any(|e| e.message == "Worker finished: check"));
    }

    #[test]
    fn test_password_changed_ignored_when_switch_off() {
        let mut state = state();
        state.mal_username = "fan".into();
        state.mal_password = "secret".into();

        state.password_changed();

        assert_eq!(state.password, PasswordState::Unchecked);
    }

    #[test]
    fn test_verify_result() {
        let mut state = state();
        state.switch_toggle();
        state.mal_password = "secret".into();

        state.handle_result(WorkerResult::Verify {
            password: "secret".into(),
            result: Ok(VerifyResponse {
                is_valid: true,
                value: "fan".into(),
            }),
        });
        assert_eq!(state.password, PasswordState::Valid);
        assert!(state.can_sync());
    }

    #[test]
    fn test_sync_allowed_without_check() {
        let mut state = state();
        state.switch_toggle();
        state.mal_password = "secret".into();
        state.handle_result(WorkerResult::Verify {
            password: "secret".into(),
            result: Ok(VerifyResponse {
                is_valid: true,
                value: "fan".into(),
            }),
        });
        assert!(state.check_resp.is_none());
        assert!(state.can_sync());

        // A failed call does not lock Sync either
        state.handle_result(WorkerResult::Check(Err(ApiError::Network("Network error: refused".into()))));
        assert!(state.can_sync());

        state.loading = true;
        assert!(!state.can_sync());
    }

    #[test]
    fn test_stale_verify_result_dropped() {
        let mut state = state();
        state.switch_toggle();
        state.mal_password = "secret2".into();
        state.password = PasswordState::Checking;

        state.handle_result(WorkerResult::Verify {
            password: "secret".into(),
            result: Ok(VerifyResponse {
                is_valid: true,
                value: "fan".into(),
            }),
        });

        assert_eq!(state.password, PasswordState::Checking);
    }

    #[test]
    fn test_preferences_loaded_and_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        Preferences {
            kitsu_user_id: "42".into(),
            mal_username: "fan".into(),
        }
        .save(&path)
        .unwrap();

        let mut state = AppState::new(Config::default(), Some(path.clone()));
        assert_eq!(state.kitsu_user_id, "42");

        state.mal_username = " other ".into();
        state.save_preferences();
        assert_eq!(Preferences::load(&path).unwrap().mal_username, "other");
    }
}
