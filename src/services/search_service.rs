// services/search_service.rs
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};
use validator::Validate;

use crate::errors::{AppError, Result};
use crate::models::search::{fan_out_size, EntityRecord, EntityRecords};
use crate::models::{
    EntityKind, GameInstance, Match, PlayerOfTheMatch, Quiz, SearchMode, SearchOutcome,
    SearchRequest, SearchWrapper, Searchable, UnifiedSearchResponse,
};
use crate::services::elastic::EngineClient;
use crate::services::normalizer::{parse_get, parse_hits, unwrap_records};
use crate::services::query_builder::build_query;

/// Routes a parsed search to the right index and unwraps what comes back.
#[derive(Clone)]
pub struct SearchService {
    engine: Arc<EngineClient>,
}

impl SearchService {
    pub fn new(engine: Arc<EngineClient>) -> Self {
        SearchService { engine }
    }

    /// Single entry point: id lookup, per-type search, or the four-index fan-out.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchOutcome> {
        request.validate()?;

        match (request.kind, request.id) {
            (Some(kind), Some(id)) => self.find_record(kind, id).await.map(SearchOutcome::Record),
            (Some(kind), None) => self
                .search_kind(kind, &request.text, request.size, request.mode)
                .await
                .map(SearchOutcome::Records),
            (None, Some(_)) => Err(AppError::IdWithoutType),
            (None, None) => self
                .unified_search(&request.text, request.size, request.mode)
                .await
                .map(SearchOutcome::Unified),
        }
    }

    pub async fn search_kind(
        &self,
        kind: EntityKind,
        text: &str,
        size: u32,
        mode: SearchMode,
    ) -> Result<EntityRecords> {
        let records = match kind {
            EntityKind::Matches => EntityRecords::Matches(self.search_index(text, size, mode).await?),
            EntityKind::Predictions => {
                EntityRecords::Predictions(self.search_index(text, size, mode).await?)
            }
            EntityKind::QuizGames => EntityRecords::Quizzes(self.search_index(text, size, mode).await?),
            EntityKind::PlayerGames => {
                EntityRecords::PlayerGames(self.search_index(text, size, mode).await?)
            }
        };
        Ok(records)
    }

    async fn find_record(&self, kind: EntityKind, id: i64) -> Result<EntityRecord> {
        let record = match kind {
            EntityKind::Matches => self.find_by_id::<Match>(id).await?.map(EntityRecord::Match),
            EntityKind::Predictions => self
                .find_by_id::<GameInstance>(id)
                .await?
                .map(EntityRecord::Prediction),
            EntityKind::QuizGames => self.find_by_id::<Quiz>(id).await?.map(EntityRecord::Quiz),
            EntityKind::PlayerGames => self
                .find_by_id::<PlayerOfTheMatch>(id)
                .await?
                .map(EntityRecord::PlayerGame),
        };

        record.ok_or(AppError::DocumentNotFound {
            kind: kind.as_str(),
            id,
        })
    }

    /// Free-text search over one record family's index.
    pub async fn search_index<T: Searchable>(
        &self,
        text: &str,
        size: u32,
        mode: SearchMode,
    ) -> Result<Vec<T>> {
        let start_time = Instant::now();
        let index = T::KIND.index();
        let query = build_query(text, size, mode);

        let response = self.engine.search(index, &query).await?;
        let records = unwrap_records(parse_hits::<SearchWrapper<T>>(response)?);

        debug!(
            "   → {} returned {} record(s) for '{}' ({}) in {:?}",
            index,
            records.len(),
            text,
            mode,
            start_time.elapsed()
        );
        Ok(records)
    }

    pub async fn find_by_id<T: Searchable>(&self, id: i64) -> Result<Option<T>> {
        let index = T::KIND.index();
        let response = self.engine.get_document(index, &id.to_string()).await?;
        let wrapper = parse_get::<SearchWrapper<T>>(response)?;

        if wrapper.is_none() {
            debug!("   → {} has no document {}", index, id);
        }
        Ok(wrapper.map(SearchWrapper::into_data))
    }

    /// Queries every index in turn with a quarter of the requested size.
    pub async fn unified_search(
        &self,
        text: &str,
        size: u32,
        mode: SearchMode,
    ) -> Result<UnifiedSearchResponse> {
        let start_time = Instant::now();
        let per_index = fan_out_size(size);

        let matches = self.search_index::<Match>(text, per_index, mode).await?;
        let predictions = self.search_index::<GameInstance>(text, per_index, mode).await?;
        let quiz_games = self.search_index::<Quiz>(text, per_index, mode).await?;
        let player_games = self.search_index::<PlayerOfTheMatch>(text, per_index, mode).await?;

        let response = UnifiedSearchResponse::of(matches, predictions, quiz_games, player_games);
        info!(
            "✅ Unified search found {} result(s) across {} indices in {:?}",
            response.total_results,
            EntityKind::ALL.len(),
            start_time.elapsed()
        );
        Ok(response)
    }
}
