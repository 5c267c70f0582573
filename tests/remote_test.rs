//! MyAnimeList and Kitsu client tests against fake services

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use wiremock::matchers::{basic_auth, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use anisync::remote::{Credentials, HttpResources, MalEntry, RemoteError, SyncClient};
use anisync::shared::WatchStatus;

use common::*;

fn resources(server: &MockServer, credentials: Option<Credentials>) -> HttpResources {
    let config = remote_config(server);
    HttpResources::new(config.http_client().unwrap(), &config, credentials)
}

#[tokio::test]
async fn test_mal_list_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MAL_LIST_PATH))
        .and(query_param("u", "fan"))
        .and(query_param("status", "all"))
        .and(query_param("type", "anime"))
        .and(header("user-agent", "anisync-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string(mal_list_xml(&sample_mal())))
        .expect(1)
        .mount(&server)
        .await;

    let anime = resources(&server, None).mal.anime_list("fan").await.unwrap();

    assert_eq!(anime.len(), 2);
    assert_eq!(anime[0].title, "Death parade");
    assert_eq!(anime[0].status, Some(WatchStatus::OnHold));
    assert_eq!(anime[0].rating, "4.0");
    assert_eq!(anime[1].episodes_watched, 5);
}

#[tokio::test]
async fn test_mal_list_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MAL_LIST_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Too many requests"))
        .mount(&server)
        .await;

    let err = resources(&server, None).mal.anime_list("fan").await.unwrap_err();

    assert_matches!(&err, RemoteError::Status { status: 503, body, .. } if body == "Too many requests");
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_mal_verify_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MAL_VERIFY_PATH))
        .and(basic_auth("fan", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<user><id>1</id></user>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(MAL_VERIFY_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&server)
        .await;

    let mal = resources(&server, None).mal;
    assert!(mal.verify_credentials("fan", "secret").await.is_ok());
    assert_matches!(
        mal.verify_credentials("fan", "wrong").await,
        Err(RemoteError::Status { status: 401, .. })
    );
}

#[tokio::test]
async fn test_mal_update_sends_xml_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/animelist/update/3.xml"))
        .and(basic_auth("fan", "secret"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("%3Cepisode%3E10%3C%2Fepisode%3E"))
        .and(body_string_contains("%3Cstatus%3E1%3C%2Fstatus%3E"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Updated"))
        .expect(1)
        .mount(&server)
        .await;

    let entry = MalEntry {
        episode: 10,
        status: 1,
        score: 7,
        times_rewatched: 0,
        enable_rewatching: 0,
        comments: String::new(),
    };
    let mal = resources(&server, Some(Credentials::new("fan", "secret"))).mal;

    mal.update_entry(3, &entry).await.unwrap();
}

#[tokio::test]
async fn test_kitsu_library_follows_pages() {
    let server = MockServer::start().await;
    let next = format!("{}/api/edge/library-entries?page%5Boffset%5D=500", server.uri());
    let entries = sample_kitsu();
    let (first, second) = entries.split_at(2);

    Mock::given(method("GET"))
        .and(path(KITSU_LIBRARY_PATH))
        .and(query_param("page[offset]", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kitsu_page(second, None)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(KITSU_LIBRARY_PATH))
        .and(query_param("filter[userId]", "42"))
        .and(query_param("filter[kind]", "anime"))
        .and(query_param("include", "anime,anime.mappings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kitsu_page(first, Some(&next))))
        .expect(1)
        .mount(&server)
        .await;

    let anime = resources(&server, None).kitsu.library("42").await.unwrap();

    assert_eq!(anime.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(anime[1].title, "Ore monogatari");
    assert_eq!(anime[1].status, Some(WatchStatus::CurrentlyWatching));
    assert_eq!(anime[1].rating, "");
}

#[tokio::test]
async fn test_kitsu_bad_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(KITSU_LIBRARY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = resources(&server, None).kitsu.library("42").await.unwrap_err();

    assert_matches!(err, RemoteError::Decode { status: 200, .. });
}

#[tokio::test]
async fn test_sync_client_end_to_end() {
    let server = MockServer::start().await;
    mount_mal_list(&server, "fan", &sample_mal()).await;
    mount_kitsu_library(&server, "42", &sample_kitsu()).await;
    Mock::given(method("POST"))
        .and(path("/api/animelist/add/2.xml"))
        .respond_with(ResponseTemplate::new(201).set_body_string("Created"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/animelist/update/3.xml"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = SyncClient::new(Arc::new(resources(&server, Some(Credentials::new("fan", "secret")))));
    let diff = client.diff("fan", "42").await.unwrap();
    let result = client.sync(&diff).await;

    assert_eq!(result.adds.len(), 1);
    assert_eq!(result.update_fails.len(), 1);
    assert!(result.update_fails[0].error.contains("500 boom"));
}
