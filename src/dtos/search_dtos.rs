use serde::Deserialize;
use serde_json::{json, Map, Value};
use validator::Validate;

use crate::errors::{AppError, Result};
use crate::models::search::{DEFAULT_SEARCH_SIZE, MAX_SEARCH_SIZE};
use crate::models::{EntityKind, SearchMode, SearchRequest};

/// Raw `/api/search` query string. Everything arrives as text and is checked in `into_request`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQueryParams {
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    pub id: Option<String>,
    pub q: Option<String>,
    pub size: Option<String>,
    pub mode: Option<String>,
}

impl SearchQueryParams {
    /// The mode is checked first so a bad mode is reported whatever else is wrong.
    pub fn into_request(self) -> Result<SearchRequest> {
        let mode = SearchMode::parse(self.mode.as_deref())?;

        let entity_type = non_blank(self.entity_type);
        let id = non_blank(self.id);
        if id.is_some() && entity_type.is_none() {
            return Err(AppError::IdWithoutType);
        }

        let kind = entity_type.as_deref().map(EntityKind::parse).transpose()?;
        let id = id.map(|raw| parse_id(&raw)).transpose()?;
        let size = parse_size(self.size.as_deref())?;

        let request = SearchRequest {
            kind,
            id,
            text: self.q.unwrap_or_default(),
            size,
            mode,
        };
        request.validate()?;
        Ok(request)
    }
}

/// Query string of the per-type list routes.
#[derive(Debug, Default, Deserialize)]
pub struct TypeSearchParams {
    pub q: Option<String>,
    pub size: Option<String>,
    pub mode: Option<String>,
}

impl TypeSearchParams {
    pub fn into_request(self, kind: EntityKind) -> Result<SearchRequest> {
        let mode = SearchMode::parse(self.mode.as_deref())?;
        let size = parse_size(self.size.as_deref())?;

        let request = SearchRequest::text(self.q.unwrap_or_default(), size, mode).of_kind(kind);
        request.validate()?;
        Ok(request)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}

fn parse_size(raw: Option<&str>) -> Result<u32> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_SEARCH_SIZE),
        Some(value) => value.parse().map_err(|_| {
            AppError::invalid_data(format!(
                "Invalid size '{}': expected a number between 1 and {}",
                value, MAX_SEARCH_SIZE
            ))
        }),
    }
}

/// Static description of the search modes served at `/api/search/modes`.
pub fn search_modes_payload() -> Value {
    let mut modes = Map::new();
    for mode in SearchMode::ALL {
        modes.insert(
            mode.as_str().to_string(),
            json!({
                "description": mode.description(),
                "default": mode == SearchMode::default(),
                "aliases": mode.aliases(),
            }),
        );
    }

    json!({
        "modes": modes,
        "examples": {
            "case_insensitive": "/api/search?q=barcelona&mode=case_insensitive",
            "case_sensitive": "/api/search?q=Barcelona&mode=case_sensitive",
            "full_match": "/api/search?q=Real%20Madrid&mode=full_match",
        }
    })
}
