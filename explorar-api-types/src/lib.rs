pub mod graphql;
pub mod search;

pub use search::{SearchResult, SearchResults, Tag};
