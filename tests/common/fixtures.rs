//! Fake MyAnimeList and Kitsu responses
//!
//! Builders for the XML list body, Kitsu JSON:API pages and the wiremock
//! mounts that serve them.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MAL_LIST_PATH: &str = "/malappinfo.php";
pub const MAL_VERIFY_PATH: &str = "/api/account/verify_credentials.xml";
pub const KITSU_LIBRARY_PATH: &str = "/api/edge/library-entries";

/// One row of a MyAnimeList list
pub struct MalRow {
    pub id: u64,
    pub title: &'static str,
    pub status: u8,
    pub episodes: u32,
    pub score: u32,
    pub updated: i64,
}

pub fn mal_list_xml(rows: &[MalRow]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><myanimelist><myinfo><user_name>fan</user_name></myinfo>"#,
    );
    for row in rows {
        xml.push_str(&format!(
            "<anime><series_animedb_id>{}</series_animedb_id><series_title>{}</series_title>\
             <series_image></series_image><my_watched_episodes>{}</my_watched_episodes>\
             <my_score>{}</my_score><my_status>{}</my_status><my_rewatching>0</my_rewatching>\
             <my_rewatching_ep>0</my_rewatching_ep><my_last_updated>{}</my_last_updated></anime>",
            row.id, row.title, row.episodes, row.score, row.status, row.updated
        ));
    }
    xml.push_str("</myanimelist>");
    xml
}

/// One Kitsu library entry with its anime and MyAnimeList mapping
pub struct KitsuEntry {
    pub mal_id: u64,
    pub title: &'static str,
    pub status: &'static str,
    pub progress: u32,
    pub rating: Option<&'static str>,
    pub updated_at: &'static str,
}

pub fn kitsu_page(entries: &[KitsuEntry], next: Option<&str>) -> Value {
    let mut data = Vec::new();
    let mut included = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        let anime_id = format!("a{}", entry.mal_id);
        let mapping_id = format!("m{}", entry.mal_id);
        data.push(json!({
            "id": format!("{}", 1000 + i),
            "type": "libraryEntries",
            "attributes": {
                "status": entry.status,
                "progress": entry.progress,
                "reconsuming": false,
                "reconsumeCount": 0,
                "notes": null,
                "rating": entry.rating,
                "updatedAt": entry.updated_at
            },
            "relationships": {
                "anime": { "data": { "type": "anime", "id": anime_id } }
            }
        }));
        included.push(json!({
            "id": anime_id,
            "type": "anime",
            "attributes": { "canonicalTitle": entry.title, "posterImage": null },
            "relationships": {
                "mappings": { "data": [{ "type": "mappings", "id": mapping_id }] }
            }
        }));
        included.push(json!({
            "id": mapping_id,
            "type": "mappings",
            "attributes": { "externalSite": "myanimelist/anime", "externalId": entry.mal_id.to_string() }
        }));
    }

    json!({
        "data": data,
        "included": included,
        "links": { "next": next }
    })
}

pub async fn mount_mal_list(server: &MockServer, username: &str, rows: &[MalRow]) {
    Mock::given(method("GET"))
        .and(path(MAL_LIST_PATH))
        .and(query_param("u", username))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(mal_list_xml(rows), "application/xml; charset=utf-8"),
        )
        .mount(server)
        .await;
}

pub async fn mount_kitsu_library(server: &MockServer, user_id: &str, entries: &[KitsuEntry]) {
    Mock::given(method("GET"))
        .and(path(KITSU_LIBRARY_PATH))
        .and(query_param("filter[userId]", user_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(kitsu_page(entries, None)))
        .mount(server)
        .await;
}

/// `test1`-like lists: 1 up to date, 2 missing, 3 needs more episodes
pub fn sample_mal() -> Vec<MalRow> {
    vec![
        MalRow { id: 1, title: "Death parade", status: 3, episodes: 0, score: 8, updated: 1_479_000_000 },
        MalRow { id: 3, title: "Shingeki no Kyojin", status: 1, episodes: 5, score: 7, updated: 1_479_000_000 },
    ]
}

pub fn sample_kitsu() -> Vec<KitsuEntry> {
    vec![
        KitsuEntry {
            mal_id: 1,
            title: "Death parade",
            status: "on_hold",
            progress: 0,
            rating: Some("4.0"),
            updated_at: "2016-11-13T01:20:00.000Z",
        },
        KitsuEntry {
            mal_id: 2,
            title: "Ore monogatari",
            status: "current",
            progress: 1,
            rating: None,
            updated_at: "2016-11-13T01:20:00.000Z",
        },
        KitsuEntry {
            mal_id: 3,
            title: "Shingeki no Kyojin",
            status: "current",
            progress: 10,
            rating: Some("3.5"),
            updated_at: "2016-11-13T01:20:00.000Z",
        },
    ]
}
