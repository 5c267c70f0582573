//! Common test utilities and helpers
//!
//! - Fake MyAnimeList and Kitsu bodies and wiremock mounts
//! - Server construction against those fakes

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::time::Duration;

use anisync::remote::RemoteConfig;
use wiremock::MockServer;

/// Remote configuration pointing both services at `server`
pub fn remote_config(server: &MockServer) -> RemoteConfig {
    RemoteConfig {
        mal_base_url: server.uri(),
        kitsu_base_url: server.uri(),
        mal_user_agent: "anisync-test".to_string(),
        timeout: Duration::from_secs(5),
    }
}
