use axum::{routing::get, Router};

use crate::handlers::health;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health_check))
        .route("/elasticsearch", get(health::elasticsearch_health))
}
