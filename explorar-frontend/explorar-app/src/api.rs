use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use explorar_api_types::{
    graphql::{GraphQlRequest, GraphQlResponse, SearchData},
    SearchResult,
};
use leptos::prelude::*;
use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{AppError, AppResult};

/// Client for the explorar node's GraphQL endpoint.
///
/// Results are cached in memory per trimmed query for the lifetime of the page. The
/// cache is never evicted.
#[derive(Clone, Debug)]
pub struct GraphQlClient {
    uri: Arc<str>,
    cache: Arc<RwLock<HashMap<String, Vec<SearchResult>>>>,
}

impl GraphQlClient {
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self {
            uri: uri.into(),
            cache: Arc::default(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::EmptyString);
        }
        if let Some(results) = self.cached(query) {
            debug!("cache hit for {query:?}");
            return Ok(results);
        }
        let response: GraphQlResponse<SearchData> =
            post_graphql(&self.uri, &GraphQlRequest::search(query)).await?;
        let results = search_results(response)?;
        self.store(query, results.clone());
        Ok(results)
    }

    fn cached(&self, query: &str) -> Option<Vec<SearchResult>> {
        let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
        cache.get(query).cloned()
    }

    fn store(&self, query: &str, results: Vec<SearchResult>) {
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        cache.insert(query.to_string(), results);
    }
}

pub fn provide_graphql_client(uri: &str) -> GraphQlClient {
    let client = GraphQlClient::new(uri);
    provide_context(client.clone());
    client
}

pub fn use_graphql_client() -> Option<GraphQlClient> {
    use_context::<GraphQlClient>()
}

fn search_results(response: GraphQlResponse<SearchData>) -> AppResult<Vec<SearchResult>> {
    if !response.errors.is_empty() {
        let messages: Vec<_> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(AppError::GraphQl(messages.join("; ")));
    }
    response
        .data
        .map(|data| data.search)
        .ok_or_else(|| AppError::GraphQl("response contained no data".to_string()))
}

#[cfg(feature = "csr")]
async fn post_graphql<B, T>(uri: &str, body: &B) -> AppResult<T>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = gloo_net::http::Request::post(uri)
        .json(body)?
        .send()
        .await
        .map_err(|e| {
            log::error!("Request to {uri} failed {e}");
            e
        })?;
    if !response.ok() {
        return Err(AppError::GraphQl(format!(
            "{uri} returned HTTP {}",
            response.status()
        )));
    }
    let json = response.text().await?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(not(feature = "csr"))]
async fn post_graphql<B, T>(uri: &str, body: &B) -> AppResult<T>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let client = reqwest::Client::new();
    let response = client
        .post(uri)
        .json(body)
        .send()
        .await
        .map_err(|e| {
            log::error!("Request to {uri} failed {e}");
            e
        })?;
    if !response.status().is_success() {
        return Err(AppError::GraphQl(format!(
            "{uri} returned HTTP {}",
            response.status().as_u16()
        )));
    }
    let json = response.text().await?;
    Ok(serde_json::from_str(&json)?)
}
