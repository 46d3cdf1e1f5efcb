// src/models/prediction.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use super::wrapper::{tags, Searchable};
use crate::errors::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    TopX,
    MatchQuiz,
    /// Single prediction without a game.
    Single,
    /// Uses a template id instead of a game id.
    Fantasy,
    Bracket,
    Standing,
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Not yet open to users.
    Pending,
    /// Accepts entries.
    #[default]
    Open,
    /// No longer accepts entries.
    Live,
    /// Matches are over and resolving is in progress.
    Closed,
    /// Matches are over and resolving is done.
    Settled,
    /// Manually cancelled by staff.
    Canceled,
}

impl GameStatus {
    pub fn next_statuses(&self) -> &'static [GameStatus] {
        match self {
            GameStatus::Pending => &[GameStatus::Open, GameStatus::Canceled],
            GameStatus::Open => &[GameStatus::Live, GameStatus::Canceled],
            GameStatus::Live => &[GameStatus::Closed, GameStatus::Settled, GameStatus::Canceled],
            GameStatus::Closed => &[GameStatus::Settled],
            GameStatus::Settled | GameStatus::Canceled => &[],
        }
    }

    pub fn can_update(&self, next: GameStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_uppercase().as_str() {
            "PENDING" => Ok(GameStatus::Pending),
            "OPEN" => Ok(GameStatus::Open),
            "LIVE" => Ok(GameStatus::Live),
            "CLOSED" => Ok(GameStatus::Closed),
            "SETTLED" => Ok(GameStatus::Settled),
            "CANCELED" => Ok(GameStatus::Canceled),
            other => Err(AppError::invalid_data(format!("Unknown game status '{}'", other))),
        }
    }

    /// Parses a list such as `"open, live"`.
    pub fn parse_list(statuses: &str) -> Result<Vec<GameStatus>> {
        statuses.split(',').map(GameStatus::parse).collect()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFixture {
    pub match_id: Option<String>,
    pub match_type: Option<String>,
    pub market: Option<String>,
    pub match_status: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Images {
    pub main: Option<String>,
    pub cover: Option<String>,
    pub mobile: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntity {
    pub entity_id: Option<String>,
    pub entity_type: Option<String>,
    pub entity_relationship: Option<String>,
}

/// A user's forecast for a match, plus the optional game configuration it belongs to.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInstance {
    pub id: Option<i64>,
    pub match_id: Option<i64>,
    pub user_id: Option<String>,
    pub predicted_home_score: Option<i32>,
    pub predicted_away_score: Option<i32>,
    pub predicted_outcome: Option<PredictionOutcome>,
    pub prediction_time: Option<DateTime<Utc>>,
    /// 1-100
    pub confidence: Option<i32>,
    pub is_correct: Option<bool>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub game_type: Option<GameType>,
    pub status: Option<GameStatus>,
    pub auth_requirement: Option<String>,
    pub fixtures: Option<Vec<GameFixture>>,
    pub rules: Option<String>,
    pub flags: Option<Vec<String>>,
    pub images: Option<Images>,
    pub tiebreaker: Option<serde_json::Value>,
    pub participants_count: Option<i32>,
    pub excluded_profile_ids: Option<Vec<String>>,
    pub predictions_cutoff: Option<DateTime<Utc>>,
    pub schedule_open_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub system_last_kickoff: Option<DateTime<Utc>>,
    pub related: Option<Vec<RelatedEntity>>,
    pub labels: Option<BTreeMap<String, String>>,
    pub custom_fields: Option<BTreeMap<String, String>>,
}

impl Searchable for GameInstance {
    const KIND: EntityKind = EntityKind::Predictions;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| "Game Instance".to_string())
    }

    fn search_description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| "Prediction game".to_string())
    }

    fn tags(&self) -> Vec<String> {
        tags(&["game", "prediction"])
    }

    fn flags(&self) -> Vec<String> {
        self.flags.clone().unwrap_or_default()
    }
}
