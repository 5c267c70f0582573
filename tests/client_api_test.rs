//! Desktop client calls against a fake anisync server

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use anisync::egui_app::{AnisyncApi, ApiError, Config};
use anisync::shared::api::{CheckQuery, VerifyRequest};
use anisync::shared::config::AppConfig;

fn api(server_url: &str, use_mock: bool) -> AnisyncApi {
    let config = Config::with_builder(AppConfig::builder().server_url(server_url).use_mock(use_mock)).unwrap();
    AnisyncApi::new(config)
}

#[tokio::test]
async fn test_check_reads_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/check"))
        .and(query_param("kitsuUserID", "42"))
        .and(query_param("malUsername", "fan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "MalUsername": "fan",
            "UpToDate": [],
            "Missing": [],
            "NeedUpdate": [],
            "Uncertain": [],
            "Left": [],
            "Right": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = api(&server.uri(), false);
    let response = tokio::task::spawn_blocking(move || client.check(&CheckQuery::new("42", "fan")))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(response.mal_username, "fan");
    assert!(!response.diff.has_work());
}

#[tokio::test]
async fn test_mock_mode_uses_mock_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/mock/mal-verify"))
        .and(body_json(json!({ "malUsername": "test1", "malPassword": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "isValid": true, "value": "test1" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = api(&server.uri(), true);
    let request = VerifyRequest {
        mal_username: "test1".into(),
        mal_password: "pw".into(),
    };
    let response = tokio::task::spawn_blocking(move || client.verify(&request))
        .await
        .unwrap()
        .unwrap();

    assert!(response.is_valid);
}

#[tokio::test]
async fn test_error_body_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/check"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "Message": "Could not get Kitsu list to compare.",
            "Cause": "GET https://kitsu.io/api/edge/library-entries: 404 Not Found",
            "StatusCode": 409
        })))
        .mount(&server)
        .await;

    let client = api(&server.uri(), false);
    let err = tokio::task::spawn_blocking(move || client.check(&CheckQuery::new("42", "fan")))
        .await
        .unwrap()
        .unwrap_err();

    assert_matches!(&err, ApiError::Http { status: 409, message } if message.starts_with("Could not get Kitsu list"));
}

#[tokio::test]
async fn test_empty_error_body_uses_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/check"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = api(&server.uri(), false);
    let err = tokio::task::spawn_blocking(move || client.check(&CheckQuery::new("42", "fan")))
        .await
        .unwrap()
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 502,
            message: "Bad Gateway".into()
        }
    );
}

#[test]
fn test_unreachable_server() {
    let client = api("http://127.0.0.1:1", false);

    let err = client.check(&CheckQuery::new("42", "fan")).unwrap_err();

    assert_matches!(err, ApiError::Network(message) if message.starts_with("Network error"));
}
