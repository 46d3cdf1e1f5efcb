// src/models/quiz.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use super::wrapper::Searchable;

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameImages {
    pub main: Option<String>,
    pub mobile: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingColors {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub content_color: Option<String>,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub additional_color: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingUrls {
    pub primary_url: Option<String>,
    pub secondary_url: Option<String>,
    pub privacy_policy_url: Option<String>,
    pub terms_and_conditions_url: Option<String>,
    pub additional_url: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingImages {
    pub main_logo: Option<String>,
    pub mobile_logo: Option<String>,
    pub background_image: Option<String>,
    pub mobile_background_image: Option<String>,
    pub additional_image: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branding {
    pub colors: Option<BrandingColors>,
    pub urls: Option<BrandingUrls>,
    pub images: Option<BrandingImages>,
}

/// A classic trivia quiz.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub questions: Option<Vec<String>>,
    pub correct_answers: Option<Vec<String>>,
    pub category: Option<String>,
    /// 1-5
    pub difficulty: Option<i32>,
    /// Seconds.
    pub time_limit: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub is_active: Option<bool>,
    #[serde(rename = "type")]
    pub quiz_type: Option<String>,
    pub images: Option<GameImages>,
    pub participation_count: Option<i32>,
    pub questions_count: Option<i32>,
    pub status: Option<String>,
    pub auth_requirement: Option<String>,
    pub flags: Option<Vec<String>>,
    pub time: Option<i32>,
    pub custom_fields: Option<BTreeMap<String, String>>,
    pub labels: Option<BTreeMap<String, String>>,
    pub average_score: Option<f32>,
    pub perfect_score: Option<i32>,
    pub ad_content: Option<String>,
    pub branding: Option<Branding>,
    pub scored: Option<bool>,
    pub language: Option<String>,
    pub alternative_title: Option<String>,
    pub points: Option<i32>,
    pub max_attempts: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Searchable for Quiz {
    const KIND: EntityKind = EntityKind::QuizGames;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| "Classic Quiz".to_string())
    }

    fn search_description(&self) -> String {
        self.description.clone().unwrap_or_else(|| "Quiz game".to_string())
    }

    fn tags(&self) -> Vec<String> {
        let category = self
            .category
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| "general".to_string());
        vec!["quiz".to_string(), "game".to_string(), category]
    }

    fn flags(&self) -> Vec<String> {
        self.flags.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchWrapper;

    #[test]
    fn category_becomes_a_lowercase_tag() {
        let quiz = Quiz {
            id: Some(5000),
            title: Some("Football Trivia".to_string()),
            category: Some("Sports".to_string()),
            ..Default::default()
        };
        let wrapper = quiz.into_wrapper();
        assert_eq!(wrapper.tags, vec!["quiz", "game", "sports"]);
        assert_eq!(wrapper.search_title.as_deref(), Some("Football Trivia"));
        assert_eq!(wrapper.search_description.as_deref(), Some("Quiz game"));
        assert_eq!(wrapper.entity_ids, vec!["5000"]);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let wrapper = Quiz::default().into_wrapper();
        assert!(wrapper.id.is_none());
        assert_eq!(wrapper.search_title.as_deref(), Some("Classic Quiz"));
        assert_eq!(wrapper.tags, vec!["quiz", "game", "general"]);
        assert_eq!(wrapper.entity_ids, vec![""]);
    }

    #[test]
    fn unwrapping_returns_the_original_quiz() {
        let original = Quiz {
            id: Some(5001),
            title: Some("Premier League Quiz".to_string()),
            questions: Some(vec!["Who won the first Premier League title?".to_string()]),
            correct_answers: Some(vec!["Manchester United".to_string()]),
            difficulty: Some(4),
            branding: Some(Branding {
                colors: Some(BrandingColors {
                    primary_color: Some("#38003c".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(original.clone().into_wrapper()).unwrap();
        assert_eq!(json["data"]["branding"]["colors"]["primaryColor"], "#38003c");

        let parsed: SearchWrapper<Quiz> = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.into_data(), original);
    }
}
