use axum::{
    extract::{Query, State},
    response::Json,
};
use serde_json::Value;
use tracing::info;

use crate::dtos::search_dtos::{search_modes_payload, SearchQueryParams, TypeSearchParams};
use crate::errors::Result;
use crate::models::search::EntityRecords;
use crate::models::{EntityKind, SearchOutcome};
use crate::state::AppState;

pub async fn unified_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<SearchOutcome>> {
    info!("🔍 GET /api/search called with query: {:?}", params);
    let start_time = std::time::Instant::now();

    let request = params.into_request()?;
    info!(
        "   → type: {:?}, id: {:?}, size: {}, mode: {}",
        request.kind, request.id, request.size, request.mode
    );

    let outcome = state.search.search(request).await?;

    info!("✅ Search completed in {:?}", start_time.elapsed());
    Ok(Json(outcome))
}

pub async fn search_modes() -> Json<Value> {
    Json(search_modes_payload())
}

async fn search_by_kind(
    state: &AppState,
    kind: EntityKind,
    params: TypeSearchParams,
) -> Result<Json<EntityRecords>> {
    info!("🔍 GET /api/{} called with query: {:?}", kind, params);
    let start_time = std::time::Instant::now();

    let request = params.into_request(kind)?;
    let records = state
        .search
        .search_kind(kind, &request.text, request.size, request.mode)
        .await?;

    info!(
        "✅ Found {} {} in {:?}",
        records.len(),
        kind,
        start_time.elapsed()
    );
    Ok(Json(records))
}

pub async fn search_matches(
    State(state): State<AppState>,
    Query(params): Query<TypeSearchParams>,
) -> Result<Json<EntityRecords>> {
    search_by_kind(&state, EntityKind::Matches, params).await
}

pub async fn search_predictions(
    State(state): State<AppState>,
    Query(params): Query<TypeSearchParams>,
) -> Result<Json<EntityRecords>> {
    search_by_kind(&state, EntityKind::Predictions, params).await
}

pub async fn search_quiz_games(
    State(state): State<AppState>,
    Query(params): Query<TypeSearchParams>,
) -> Result<Json<EntityRecords>> {
    search_by_kind(&state, EntityKind::QuizGames, params).await
}

pub async fn search_player_games(
    State(state): State<AppState>,
    Query(params): Query<TypeSearchParams>,
) -> Result<Json<EntityRecords>> {
    search_by_kind(&state, EntityKind::PlayerGames, params).await
}
