mod engine;
mod filter;
mod types;

pub use engine::ScanEngine;
pub use filter::CandidateFilter;
pub use types::{CancelToken, SearchHit, SearchQuery, TodoItem};
