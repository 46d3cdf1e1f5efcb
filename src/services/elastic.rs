// services/elastic.rs
//! Thin HTTP client for the Elasticsearch REST API.
//!
//! Only the handful of endpoints this service needs are wrapped. Every call is a
//! single attempt; a transport failure or non-2xx status is returned to the caller.

use std::collections::HashMap;
use std::time::Instant;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::services::query_builder::SearchQuery;

#[derive(Clone)]
pub struct EngineClient {
    client: Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl EngineClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.elasticsearch_timeout)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(EngineClient {
            client,
            base_url: config.elasticsearch_url.trim_end_matches('/').to_string(),
            username: config.elasticsearch_username.clone(),
            password: config.elasticsearch_password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request = self.client.request(method, url);
        match &self.username {
            Some(username) => request.basic_auth(username, self.password.as_deref()),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        let start_time = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        debug!("   → {} {} answered {} in {:?}", method, path, status, start_time.elapsed());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::engine(format!(
                "{} {} returned {}: {}",
                method, path, status, body
            )));
        }

        Ok(response.json::<T>().await?)
    }

    /// `GET /` on the engine root, returning its banner.
    pub async fn ping(&self) -> Result<Value> {
        self.send(Method::GET, "/", self.request(Method::GET, "/")).await
    }

    pub async fn search(&self, index: &str, query: &SearchQuery) -> Result<SearchResponse> {
        let path = format!("/{}/_search", index);
        let request = self.request(Method::POST, &path).json(query);
        self.send(Method::POST, &path, request).await
    }

    /// Fetches one document. A 404, for a missing document or a missing index, reads as `found: false`.
    pub async fn get_document(&self, index: &str, id: &str) -> Result<GetDocumentResponse> {
        let path = format!("/{}/_doc/{}", index, id);
        let start_time = Instant::now();
        let response = self.request(Method::GET, &path).send().await?;
        let status = response.status();
        debug!("   → GET {} answered {} in {:?}", path, status, start_time.elapsed());

        if status == StatusCode::NOT_FOUND {
            let envelope = response
                .json::<GetDocumentResponse>()
                .await
                .unwrap_or_default();
            return Ok(GetDocumentResponse {
                found: false,
                source: None,
                ..envelope
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::engine(format!(
                "GET {} returned {}: {}",
                path, status, body
            )));
        }

        Ok(response.json::<GetDocumentResponse>().await?)
    }

    /// Upserts one document under an explicit id.
    pub async fn index_document<T: Serialize + ?Sized>(
        &self,
        index: &str,
        id: &str,
        document: &T,
    ) -> Result<IndexDocumentResponse> {
        let path = format!("/{}/_doc/{}", index, id);
        let request = self.request(Method::PUT, &path).json(document);
        self.send(Method::PUT, &path, request).await
    }

    /// Sends index actions through `_bulk` without forcing a refresh.
    pub async fn bulk(&self, operations: &[BulkOperation]) -> Result<BulkResponse> {
        let mut body = String::new();
        for operation in operations {
            operation.write_ndjson(&mut body)?;
        }

        let request = self
            .request(Method::POST, "/_bulk")
            .query(&[("refresh", "false")])
            .header("Content-Type", "application/x-ndjson")
            .body(body);
        let response: BulkResponse = self.send(Method::POST, "/_bulk", request).await?;

        if response.errors {
            warn!(
                "⚠️ Bulk request finished with {} failed item(s) out of {}",
                response.failed_items(),
                response.items.len()
            );
        }
        Ok(response)
    }

    pub async fn refresh(&self) -> Result<()> {
        let _: Value = self
            .send(Method::POST, "/_refresh", self.request(Method::POST, "/_refresh"))
            .await?;
        Ok(())
    }
}

/// One `index` action of a bulk request.
#[derive(Debug, Clone)]
pub struct BulkOperation {
    pub index: String,
    pub id: String,
    pub document: Value,
}

impl BulkOperation {
    pub fn index<T: Serialize>(index: &str, id: impl Into<String>, document: &T) -> Result<Self> {
        Ok(BulkOperation {
            index: index.to_string(),
            id: id.into(),
            document: serde_json::to_value(document)?,
        })
    }

    fn write_ndjson(&self, body: &mut String) -> Result<()> {
        let action = json!({ "index": { "_index": self.index, "_id": self.id } });
        body.push_str(&serde_json::to_string(&action)?);
        body.push('\n');
        body.push_str(&serde_json::to_string(&self.document)?);
        body.push('\n');
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub timed_out: bool,
    pub hits: HitsInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitsInfo {
    #[serde(default)]
    pub total: Option<TotalHits>,
    #[serde(default)]
    pub max_score: Option<f32>,
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TotalHits {
    pub value: u64,
    pub relation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hit {
    #[serde(rename = "_index", default)]
    pub index: Option<String>,
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "_score", default)]
    pub score: Option<f32>,
    #[serde(rename = "_source", default)]
    pub source: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetDocumentResponse {
    #[serde(rename = "_index", default)]
    pub index: Option<String>,
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub found: bool,
    #[serde(rename = "_source", default)]
    pub source: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexDocumentResponse {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub result: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub took: u64,
    pub errors: bool,
    #[serde(default)]
    pub items: Vec<HashMap<String, BulkActionResult>>,
}

impl BulkResponse {
    pub fn failed_items(&self) -> usize {
        self.items
            .iter()
            .flat_map(|item| item.values())
            .filter(|result| result.error.is_some())
            .count()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkActionResult {
    #[serde(rename = "_index", default)]
    pub index: Option<String>,
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub status: u16,
    #[serde(default)]
    pub error: Option<BulkError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_operation_renders_action_and_source_lines() {
        let op = BulkOperation::index("predictions", "4000", &json!({ "id": "4000" })).unwrap();
        let mut body = String::new();
        op.write_ndjson(&mut body).unwrap();

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 2);
        let action: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(action["index"]["_index"], "predictions");
        assert_eq!(action["index"]["_id"], "4000");
        assert_eq!(lines[1], r#"{"id":"4000"}"#);
        assert!(body.ends_with('\n'));
    }

    #[test]
    fn search_envelope_tolerates_missing_metadata() {
        let response: SearchResponse = serde_json::from_value(json!({
            "hits": { "hits": [ { "_source": { "id": "1" } } ] }
        }))
        .unwrap();
        assert_eq!(response.hits.hits.len(), 1);
        assert!(response.hits.total.is_none());
        assert_eq!(response.hits.hits[0].source["id"], "1");
    }

    #[test]
    fn bulk_response_counts_failed_items() {
        let response: BulkResponse = serde_json::from_value(json!({
            "took": 3,
            "errors": true,
            "items": [
                { "index": { "_index": "quiz_games", "_id": "1", "status": 201 } },
                { "index": { "_index": "quiz_games", "_id": "2", "status": 400,
                    "error": { "type": "mapper_parsing_exception", "reason": "bad" } } }
            ]
        }))
        .unwrap();
        assert_eq!(response.failed_items(), 1);
    }
}
