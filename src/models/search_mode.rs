// src/models/search_mode.rs

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};

/// How free text is matched against indexed documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchMode {
    /// Fuzzy partial matching, `game` matches `Game 21` and `GAME`.
    #[default]
    CaseInsensitive,
    /// Boosted partial matching over the display fields with an exact alternative.
    CaseSensitive,
    /// Phrase match with zero slop.
    FullMatch,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [
        SearchMode::CaseInsensitive,
        SearchMode::CaseSensitive,
        SearchMode::FullMatch,
    ];

    /// Parses a caller-supplied mode. Blank or missing input yields the default.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(SearchMode::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(SearchMode::default());
        }

        match trimmed.to_uppercase().as_str() {
            "CASE_INSENSITIVE" | "CASE-INSENSITIVE" | "INSENSITIVE" => Ok(SearchMode::CaseInsensitive),
            "CASE_SENSITIVE" | "CASE-SENSITIVE" | "SENSITIVE" => Ok(SearchMode::CaseSensitive),
            "FULL_MATCH" | "FULL-MATCH" | "FULL" | "EXACT" => Ok(SearchMode::FullMatch),
            _ => Err(AppError::UnknownSearchMode(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::CaseInsensitive => "CASE_INSENSITIVE",
            SearchMode::CaseSensitive => "CASE_SENSITIVE",
            SearchMode::FullMatch => "FULL_MATCH",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SearchMode::CaseInsensitive => "Case insensitive partial matching",
            SearchMode::CaseSensitive => "Case sensitive partial matching",
            SearchMode::FullMatch => "Full string match (case insensitive)",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            SearchMode::CaseInsensitive => &["case_insensitive", "case-insensitive", "insensitive"],
            SearchMode::CaseSensitive => &["case_sensitive", "case-sensitive", "sensitive"],
            SearchMode::FullMatch => &["full_match", "full-match", "full", "exact"],
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
