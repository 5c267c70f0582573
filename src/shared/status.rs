//! Status translation
//!
//! Turns `check` and `sync` responses, and failed calls, into what the user
//! sees: a message, a colour theme and which result sections are visible.
//! Everything here is pure so views and tests can share it.

use crate::shared::api::{ApiError, CheckResponse, SyncResponse};

/// Severity of a status message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Success,
    #[default]
    Info,
    Warning,
    Danger,
}

/// Presentational state derived from the last response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusView {
    pub message: String,
    pub theme: Theme,
    pub show_status: bool,
    pub show_results: bool,
    pub show_missing: bool,
    pub show_need_update: bool,
    pub show_sync_results: bool,
    /// A sync would add or update something
    pub can_sync: bool,
}

/// Status after a successful `check`
pub fn check_status(resp: &CheckResponse) -> StatusView {
    let missing = resp.diff.missing.len();
    let need_update = resp.diff.need_update.len();

    let mut view = StatusView {
        show_status: true,
        show_results: true,
        show_missing: missing > 0,
        show_need_update: need_update > 0,
        ..Default::default()
    };

    if missing == 0 && need_update == 0 {
        view.theme = Theme::Success;
        view.message = format!(
            "MyAnimeList account \"{}\" is up to date with Kitsu.",
            resp.mal_username
        );
        return view;
    }

    let mut parts = Vec::new();
    if missing > 0 {
        parts.push(format!("{} missing", missing));
    }
    if need_update > 0 {
        parts.push(format!("{} need update", need_update));
    }

    view.theme = Theme::Info;
    view.can_sync = true;
    view.message = format!(
        "{} on MyAnimeList account \"{}\".",
        parts.join(" and "),
        resp.mal_username
    );
    view
}

/// Status after a successful `sync`
pub fn sync_status(resp: &SyncResponse) -> StatusView {
    let sync = &resp.sync;
    let succeeded = sync.total_succeeded();
    let failed = sync.total_failed();

    let mut message = format!("{} added and {} updated.", sync.adds.len(), sync.updates.len());
    if !sync.add_fails.is_empty() {
        message.push_str(&format!(" {} failed to be added.", sync.add_fails.len()));
    }
    if !sync.update_fails.is_empty() {
        message.push_str(&format!(" {} failed to be updated.", sync.update_fails.len()));
    }

    let remaining = resp.diff.missing.len() + resp.diff.need_update.len();
    if remaining > 0 {
        message.push_str(&format!(" {} still need attention.", remaining));
    }

    let theme = match (succeeded, failed) {
        (_, 0) => Theme::Success,
        (0, _) => Theme::Danger,
        _ => Theme::Warning,
    };

    StatusView {
        message,
        theme,
        show_status: true,
        show_results: true,
        show_missing: !resp.diff.missing.is_empty(),
        show_need_update: !resp.diff.need_update.is_empty(),
        show_sync_results: true,
        can_sync: remaining > 0,
    }
}

/// A plain message, e.g. for input rejected before any call is made
pub fn notice(theme: Theme, message: impl Into<String>) -> StatusView {
    StatusView {
        message: message.into(),
        theme,
        show_status: true,
        ..Default::default()
    }
}

/// Status after a failed call
pub fn error_status(err: &ApiError) -> StatusView {
    StatusView {
        message: format!("Error: {}", err),
        theme: Theme::Danger,
        show_status: true,
        ..Default::default()
    }
}
