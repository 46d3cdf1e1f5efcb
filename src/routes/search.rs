use axum::{routing::get, Router};

use crate::handlers::search;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::unified_search))
        .route("/search/modes", get(search::search_modes))
        .route("/matches", get(search::search_matches))
        .route("/predictions", get(search::search_predictions))
        .route("/quiz-games", get(search::search_quiz_games))
        .route("/player-games", get(search::search_player_games))
}
