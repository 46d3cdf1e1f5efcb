pub mod elastic;
pub mod normalizer;
pub mod query_builder;
pub mod sample_data;
pub mod search_service;

pub use elastic::EngineClient;
pub use search_service::SearchService;
