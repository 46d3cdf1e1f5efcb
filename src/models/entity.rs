// src/models/entity.rs

use serde::Serialize;

use crate::errors::{AppError, Result};

pub const MATCHES_INDEX: &str = "football_matches";
pub const PREDICTIONS_INDEX: &str = "predictions";
pub const QUIZ_GAMES_INDEX: &str = "quiz_games";
pub const PLAYER_GAMES_INDEX: &str = "player_games";

/// The four searchable entity families, each backed by a fixed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Matches,
    Predictions,
    QuizGames,
    PlayerGames,
}

impl EntityKind {
    /// Fan-out order for unified search.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Matches,
        EntityKind::Predictions,
        EntityKind::QuizGames,
        EntityKind::PlayerGames,
    ];

    /// Resolves a `type` query parameter, accepting the legacy aliases.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "matches" | "match" | "football-matches" => Ok(EntityKind::Matches),
            "predictions" | "prediction" | "game-instances" => Ok(EntityKind::Predictions),
            "quiz-games" | "quizzes" | "classic-quizzes" => Ok(EntityKind::QuizGames),
            "player-games" | "potm" | "player-of-the-match" => Ok(EntityKind::PlayerGames),
            _ => Err(AppError::UnknownEntityType(raw.to_string())),
        }
    }

    pub fn index(&self) -> &'static str {
        match self {
            EntityKind::Matches => MATCHES_INDEX,
            EntityKind::Predictions => PREDICTIONS_INDEX,
            EntityKind::QuizGames => QUIZ_GAMES_INDEX,
            EntityKind::PlayerGames => PLAYER_GAMES_INDEX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Matches => "matches",
            EntityKind::Predictions => "predictions",
            EntityKind::QuizGames => "quiz-games",
            EntityKind::PlayerGames => "player-games",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
