//! Engine query builders.
//!
//! Queries are assembled as `serde_json` values, so user text is escaped by
//! serialization and never spliced into a template.

use serde::Serialize;
use serde_json::{json, Value};

use crate::models::SearchMode;

/// Wrapper metadata searched by the default fuzzy mode.
pub const WRAPPER_FIELDS: [&str; 6] = [
    "id",
    "searchTitle",
    "searchDescription",
    "tags",
    "flags",
    "entityIds",
];

/// Display fields of the wrapped records, with boosts.
pub const BOOSTED_FIELDS: [&str; 9] = [
    "data.title^3",
    "data.gameTitle^3",
    "data.name^3",
    "data.homeTeam.name^2",
    "data.awayTeam.name^2",
    "data.competition.name^2",
    "data.venue",
    "data.referee",
    "searchTitle^3",
];

/// Request body for `POST /<index>/_search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub size: u32,
    pub query: Value,
}

pub fn build_query(text: &str, size: u32, mode: SearchMode) -> SearchQuery {
    let text = text.trim();
    if text.is_empty() {
        return match_all(size);
    }

    let query = match mode {
        SearchMode::CaseInsensitive => case_insensitive_query(text),
        SearchMode::CaseSensitive => case_sensitive_query(text),
        SearchMode::FullMatch => full_match_query(text),
    };
    SearchQuery { size, query }
}

pub fn match_all(size: u32) -> SearchQuery {
    SearchQuery {
        size,
        query: json!({ "match_all": {} }),
    }
}

fn case_insensitive_query(text: &str) -> Value {
    json!({
        "multi_match": {
            "query": text,
            "fields": WRAPPER_FIELDS,
            "fuzziness": "AUTO",
            "lenient": true
        }
    })
}

fn case_sensitive_query(text: &str) -> Value {
    json!({
        "bool": {
            "should": [
                {
                    "multi_match": {
                        "query": text,
                        "fields": BOOSTED_FIELDS,
                        "type": "best_fields"
                    }
                },
                {
                    "multi_match": {
                        "query": text,
                        "fields": unboosted_fields(),
                        "fuzziness": 0
                    }
                }
            ],
            "minimum_should_match": 1
        }
    })
}

fn full_match_query(text: &str) -> Value {
    let should: Vec<Value> = unboosted_fields()
        .into_iter()
        .map(|field| json!({ "match_phrase": { field: { "query": text, "slop": 0 } } }))
        .collect();

    json!({
        "bool": {
            "should": should,
            "minimum_should_match": 1
        }
    })
}

/// `BOOSTED_FIELDS` with the `^n` suffixes removed.
fn unboosted_fields() -> Vec<&'static str> {
    BOOSTED_FIELDS
        .iter()
        .map(|field| field.split('^').next().unwrap_or(field))
        .collect()
}
