use serde::{Deserialize, Serialize};

use crate::SearchResult;

/// The `search` query understood by the explorar node.
pub const SEARCH_QUERY: &str = r#"query SearchQuery($query: String!) {
  search(query: $query) {
    txid
    title
    description
    type
    markers
    tags {
      key
      value
    }
  }
}"#;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct GraphQlRequest<V> {
    pub query: String,
    pub variables: V,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SearchVariables {
    pub query: String,
}

impl GraphQlRequest<SearchVariables> {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            query: SEARCH_QUERY.to_string(),
            variables: SearchVariables {
                query: query.into(),
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SearchData {
    pub search: Vec<SearchResult>,
}
