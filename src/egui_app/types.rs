/**
 * Shared Types Module
 *
 * Messages passed from worker threads back to the UI, and the password
 * verification state shown next to the password field.
 */
use crate::shared::api::{ApiError, CheckResponse, SyncResponse, VerifyResponse};

/// Result of a call made on a worker thread
#[derive(Debug, Clone)]
pub enum WorkerResult {
    Check(Result<CheckResponse, ApiError>),
    Sync(Result<SyncResponse, ApiError>),
    Verify {
        /// Password that was verified; stale answers are dropped
        password: String,
        result: Result<VerifyResponse, ApiError>,
    },
}

impl WorkerResult {
    pub fn operation(&self) -> &'static str {
        match self {
            WorkerResult::Check(_) => "check",
            WorkerResult::Sync(_) => "sync",
            WorkerResult::Verify { .. } => "verify",
        }
    }
}

/// MyAnimeList password verification state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordState {
    #[default]
    Unchecked,
    Checking,
    Valid,
    Invalid,
}

impl PasswordState {
    /// Marker shown next to the password field
    pub fn marker(&self) -> &'static str {
        match self {
            PasswordState::Unchecked => "",
            PasswordState::Checking => "…",
            PasswordState::Valid => "✔",
            PasswordState::Invalid => "✖",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        let check = WorkerResult::Check(Err(ApiError::Network("down".into())));
        let verify = WorkerResult::Verify {
            password: "secret".into(),
            result: Err(ApiError::Network("down".into())),
        };
        assert_eq!(check.operation(), "check");
        assert_eq!(verify.operation(), "verify");
    }

    #[test]
    fn test_password_state_default() {
        assert_eq!(PasswordState::default(), PasswordState::Unchecked);
        assert_eq!(PasswordState::Valid.marker(), "✔");
    }
}
