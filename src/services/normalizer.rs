// services/normalizer.rs
use serde::de::DeserializeOwned;

use crate::errors::Result;
use crate::models::SearchWrapper;
use crate::services::elastic::{GetDocumentResponse, SearchResponse};

/// Deserializes every hit's `_source` into `T`, in engine order.
pub fn parse_hits<T: DeserializeOwned>(response: SearchResponse) -> Result<Vec<T>> {
    response
        .hits
        .hits
        .into_iter()
        .map(|hit| serde_json::from_value(hit.source).map_err(Into::into))
        .collect()
}

pub fn parse_get<T: DeserializeOwned>(response: GetDocumentResponse) -> Result<Option<T>> {
    if !response.found {
        return Ok(None);
    }
    match response.source {
        Some(source) => Ok(Some(serde_json::from_value(source)?)),
        None => Ok(None),
    }
}

pub fn unwrap_records<T>(wrappers: Vec<SearchWrapper<T>>) -> Vec<T> {
    wrappers.into_iter().map(SearchWrapper::into_data).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::{GameInstance, Match, Searchable};
    use serde_json::json;

    fn search_response(sources: Vec<serde_json::Value>) -> SearchResponse {
        let hits: Vec<_> = sources.into_iter().map(|s| json!({ "_source": s })).collect();
        serde_json::from_value(json!({ "took": 1, "hits": { "hits": hits } })).unwrap()
    }

    #[test]
    fn hits_keep_engine_order() {
        let response = search_response(vec![
            json!({ "id": "2", "data": { "id": 2 } }),
            json!({ "id": "1", "data": { "id": 1 } }),
        ]);
        let wrappers: Vec<SearchWrapper<Match>> = parse_hits(response).unwrap();
        let ids: Vec<_> = unwrap_records(wrappers).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![Some(2), Some(1)]);
    }

    #[test]
    fn unknown_and_missing_fields_are_tolerated() {
        let response = search_response(vec![json!({
            "id": "4000",
            "somethingNew": true,
            "data": { "id": 4000, "title": "Derby", "notAField": [1, 2] }
        })]);
        let wrappers: Vec<SearchWrapper<GameInstance>> = parse_hits(response).unwrap();
        let game = &wrappers[0].data;
        assert_eq!(game.id, Some(4000));
        assert_eq!(game.title.as_deref(), Some("Derby"));
        assert!(game.description.is_none());
        assert!(wrappers[0].tags.is_empty());
    }

    #[test]
    fn mismatched_source_is_an_error() {
        let response = search_response(vec![json!({ "data": { "id": "not-a-number" } })]);
        let err = parse_hits::<SearchWrapper<Match>>(response).unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn get_returns_none_when_not_found() {
        let response = GetDocumentResponse {
            found: false,
            ..Default::default()
        };
        assert!(parse_get::<SearchWrapper<Match>>(response).unwrap().is_none());
    }

    #[test]
    fn get_unwraps_found_document() {
        let original = Match {
            id: Some(1000),
            venue: Some("Camp Nou".to_string()),
            ..Default::default()
        };
        let response = GetDocumentResponse {
            found: true,
            source: Some(serde_json::to_value(original.clone().into_wrapper()).unwrap()),
            ..Default::default()
        };
        let wrapper = parse_get::<SearchWrapper<Match>>(response).unwrap().unwrap();
        assert_eq!(wrapper.into_data(), original);
    }
}
