// src/models/search.rs

use serde::Serialize;
use validator::Validate;

use super::entity::EntityKind;
use super::football::Match;
use super::potm::PlayerOfTheMatch;
use super::prediction::GameInstance;
use super::quiz::Quiz;
use super::search_mode::SearchMode;

pub const DEFAULT_SEARCH_SIZE: u32 = 10;
pub const MAX_SEARCH_SIZE: u32 = 10_000;

/// A fully parsed search call.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct SearchRequest {
    pub kind: Option<EntityKind>,
    pub id: Option<i64>,
    #[validate(length(max = 1024, message = "Query must be at most 1024 characters"))]
    pub text: String,
    #[validate(range(min = 1, max = 10000, message = "Size must be between 1 and 10000"))]
    pub size: u32,
    pub mode: SearchMode,
}

impl SearchRequest {
    pub fn text(text: impl Into<String>, size: u32, mode: SearchMode) -> Self {
        SearchRequest {
            kind: None,
            id: None,
            text: text.into(),
            size,
            mode,
        }
    }

    pub fn of_kind(mut self, kind: EntityKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// Per-index slice size for a type-less search.
pub fn fan_out_size(size: u32) -> u32 {
    (size / EntityKind::ALL.len() as u32).max(1)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityRecord {
    Match(Match),
    Prediction(GameInstance),
    Quiz(Quiz),
    PlayerGame(PlayerOfTheMatch),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityRecords {
    Matches(Vec<Match>),
    Predictions(Vec<GameInstance>),
    Quizzes(Vec<Quiz>),
    PlayerGames(Vec<PlayerOfTheMatch>),
}

impl EntityRecords {
    pub fn len(&self) -> usize {
        match self {
            EntityRecords::Matches(records) => records.len(),
            EntityRecords::Predictions(records) => records.len(),
            EntityRecords::Quizzes(records) => records.len(),
            EntityRecords::PlayerGames(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedSearchResponse {
    pub matches: Vec<Match>,
    pub predictions: Vec<GameInstance>,
    pub quiz_games: Vec<Quiz>,
    pub player_games: Vec<PlayerOfTheMatch>,
    pub total_results: usize,
}

impl UnifiedSearchResponse {
    /// Total is the plain sum of the four slices.
    pub fn of(
        matches: Vec<Match>,
        predictions: Vec<GameInstance>,
        quiz_games: Vec<Quiz>,
        player_games: Vec<PlayerOfTheMatch>,
    ) -> Self {
        let total_results =
            matches.len() + predictions.len() + quiz_games.len() + player_games.len();
        UnifiedSearchResponse {
            matches,
            predictions,
            quiz_games,
            player_games,
            total_results,
        }
    }
}

/// Result of a dispatched search: one record, one type's list, or the unified aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchOutcome {
    Record(EntityRecord),
    Records(EntityRecords),
    Unified(UnifiedSearchResponse),
}
