// src/models/potm.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use super::wrapper::{tags, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PotmStatus {
    Active,
    Completed,
    Expired,
}

/// A "player of the match" voting game tied to one fixture.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerOfTheMatch {
    pub id: Option<i64>,
    pub match_id: Option<i64>,
    pub game_title: Option<String>,
    pub player_options: Option<Vec<String>>,
    pub correct_player: Option<String>,
    pub user_id: Option<String>,
    pub selected_player: Option<String>,
    pub points: Option<i32>,
    pub submission_time: Option<DateTime<Utc>>,
    pub is_correct: Option<bool>,
    pub game_status: Option<PotmStatus>,
    /// Vote tally per candidate.
    pub votes: Option<BTreeMap<String, i32>>,
}

impl Searchable for PlayerOfTheMatch {
    const KIND: EntityKind = EntityKind::PlayerGames;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_title(&self) -> String {
        self.game_title
            .clone()
            .unwrap_or_else(|| "Player of the Match".to_string())
    }

    fn search_description(&self) -> String {
        let options = self.player_options.as_ref().map_or(0, Vec::len);
        format!("Player of the match game with {} options", options)
    }

    fn tags(&self) -> Vec<String> {
        tags(&["player", "match", "game"])
    }

    fn entity_ids(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.match_id.map(|id| id.to_string()).unwrap_or_default(),
        ]
    }
}
