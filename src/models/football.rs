// src/models/football.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use super::wrapper::{tags, Searchable};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: Option<String>,
    pub name: Option<String>,
    pub alias: Option<String>,
    pub country_code: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Option<String>,
    pub country: Option<Country>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub short_name: Option<String>,
    pub national: Option<bool>,
    pub code: Option<String>,
    pub gender: Option<String>,
    pub undecided: Option<bool>,
    pub is_deleted: Option<bool>,
}

impl Team {
    pub fn named(id: impl Into<String>, name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Team {
            id: Some(id.into()),
            name: Some(name.into()),
            short_name: Some(short_name.into()),
            national: Some(false),
            ..Default::default()
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: Option<String>,
    pub country: Option<Country>,
    pub gender: Option<String>,
    pub competition_type: Option<String>,
    pub name: Option<String>,
}

impl Competition {
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Competition {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStatus {
    pub id: Option<u8>,
    #[serde(rename = "type")]
    pub status_type: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
}

impl MatchStatus {
    pub fn finished() -> Self {
        MatchStatus {
            id: Some(1),
            status_type: Some("finished".to_string()),
            name: Some("Finished".to_string()),
            code: Some("FT".to_string()),
        }
    }

    pub fn scheduled() -> Self {
        MatchStatus {
            id: Some(2),
            status_type: Some("scheduled".to_string()),
            name: Some("Scheduled".to_string()),
            code: Some("NS".to_string()),
        }
    }
}

/// A football fixture. Timestamps travel as epoch milliseconds.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Option<i64>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub kickoff_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
    pub status: Option<MatchStatus>,
    pub home_team: Option<Team>,
    pub away_team: Option<Team>,
    pub competition: Option<Competition>,
    pub goals_full_time_home: Option<i32>,
    pub goals_full_time_away: Option<i32>,
    pub goals_half_time_home: Option<i32>,
    pub goals_half_time_away: Option<i32>,
    pub venue: Option<String>,
    pub referee: Option<String>,
    pub lineups_confirmed: Option<bool>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub started_at: Option<DateTime<Utc>>,
    pub minute: Option<String>,
    pub is_deleted: Option<bool>,
    pub undecided: Option<bool>,
}

fn team_name(team: &Option<Team>) -> &str {
    team.as_ref()
        .and_then(|t| t.name.as_deref())
        .unwrap_or("Unknown")
}

impl Searchable for Match {
    const KIND: EntityKind = EntityKind::Matches;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_title(&self) -> String {
        format!("{} vs {}", team_name(&self.home_team), team_name(&self.away_team))
    }

    fn search_description(&self) -> String {
        format!(
            "Football match at {}",
            self.venue.as_deref().unwrap_or("Unknown venue")
        )
    }

    fn tags(&self) -> Vec<String> {
        tags(&["football", "match"])
    }

    fn entity_ids(&self) -> Vec<String> {
        [
            self.id.map(|id| id.to_string()),
            self.home_team.as_ref().and_then(|t| t.id.clone()),
            self.away_team.as_ref().and_then(|t| t.id.clone()),
            self.competition.as_ref().and_then(|c| c.id.clone()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
