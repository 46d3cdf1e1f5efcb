#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use fanclash_search::{build_router, AppConfig, AppState};

pub fn config_for(engine_url: &str) -> AppConfig {
    AppConfig {
        elasticsearch_url: engine_url.to_string(),
        ..AppConfig::default()
    }
}

pub fn app_for(engine_url: &str) -> Router {
    let state = AppState::new(config_for(engine_url)).expect("state should build");
    build_router(state)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

/// A `_search` response whose hits carry the given sources.
pub fn hits(sources: Vec<Value>) -> String {
    let hits: Vec<Value> = sources
        .into_iter()
        .map(|source| json!({ "_index": "test", "_id": source["id"], "_score": 1.0, "_source": source }))
        .collect();
    json!({
        "took": 1,
        "timed_out": false,
        "hits": { "total": { "value": hits.len(), "relation": "eq" }, "hits": hits }
    })
    .to_string()
}

pub fn match_source(id: i64, home: &str, away: &str) -> Value {
    json!({
        "id": id.to_string(),
        "searchTitle": format!("{} vs {}", home, away),
        "searchDescription": "Football match at Camp Nou",
        "tags": ["football", "match"],
        "flags": [],
        "entityIds": [id.to_string()],
        "data": {
            "id": id,
            "homeTeam": { "id": "fb:t:2000", "name": home },
            "awayTeam": { "id": "fb:t:2001", "name": away },
            "venue": "Camp Nou",
            "kickoffAt": 1_700_000_000_000i64
        }
    })
}

pub fn prediction_source(id: i64) -> Value {
    json!({
        "id": id.to_string(),
        "searchTitle": "Game Instance",
        "tags": ["game", "prediction"],
        "data": { "id": id, "matchId": 1000, "userId": "user1", "predictedOutcome": "HOME_WIN" }
    })
}

pub fn quiz_source(id: i64, title: &str) -> Value {
    json!({
        "id": id.to_string(),
        "searchTitle": title,
        "tags": ["quiz", "game", "sports"],
        "data": { "id": id, "title": title, "category": "Sports" }
    })
}

pub fn player_game_source(id: i64) -> Value {
    json!({
        "id": id.to_string(),
        "searchTitle": "Player of the Match",
        "tags": ["player", "match", "game"],
        "data": { "id": id, "matchId": 1000, "gameStatus": "ACTIVE", "votes": { "Pedri": 3 } }
    })
}
