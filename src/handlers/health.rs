use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::state::AppState;

pub async fn root_handler() -> &'static str {
    "🚀 FanClash Search API is running!"
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Pings the engine root. Down is reported as 503, never as a request error.
pub async fn elasticsearch_health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let start_time = std::time::Instant::now();

    match state.engine.ping().await {
        Ok(_) => {
            info!("✅ Elasticsearch reachable in {:?}", start_time.elapsed());
            (
                StatusCode::OK,
                Json(json!({
                    "status": "UP",
                    "elasticsearch": "Connected"
                })),
            )
        }
        Err(e) => {
            warn!("❌ Elasticsearch health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "DOWN",
                    "elasticsearch": "Disconnected",
                    "error": e.to_string()
                })),
            )
        }
    }
}
