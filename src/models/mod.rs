pub mod entity;
pub mod football;
pub mod potm;
pub mod prediction;
pub mod quiz;
pub mod search;
pub mod search_mode;
pub mod wrapper;

pub use entity::EntityKind;
pub use football::Match;
pub use potm::PlayerOfTheMatch;
pub use prediction::GameInstance;
pub use quiz::Quiz;
pub use search::{SearchOutcome, SearchRequest, UnifiedSearchResponse};
pub use search_mode::SearchMode;
pub use wrapper::{SearchWrapper, Searchable};
