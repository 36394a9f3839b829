//! GraphQL-backed species source.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Deserialize;
use serde_json::{Value, json};

use super::{FetchCapability, Result};
use crate::state::{Entity, FetchResult, Label, QueryParameters};

/// Public PokeAPI GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://beta.pokeapi.co/graphql/v1beta";

/// Species page query; names are restricted to the languages the list shows.
pub const SPECIES_QUERY: &str = "query SpeciesList($limit: Int!, $offset: Int!, $languages: [Int!]) {
  species: pokemon_v2_pokemonspecies(limit: $limit, offset: $offset, order_by: {id: asc}) {
    id
    names: pokemon_v2_pokemonspeciesnames(where: {language_id: {_in: $languages}}) {
      language_id
      name
    }
  }
}";

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    /// Payload; absent when the server rejected the query.
    data: Option<SpeciesData>,
    /// Server-reported errors.
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

/// One entry of the `errors` array.
#[derive(Debug, Deserialize)]
struct GraphqlError {
    /// Human-readable message.
    message: String,
}

/// `data` object of the species query.
#[derive(Debug, Deserialize)]
struct SpeciesData {
    /// Species rows in server order.
    species: Vec<SpeciesNode>,
}

/// One species row.
#[derive(Debug, Deserialize)]
struct SpeciesNode {
    /// Species id.
    id: i64,
    /// Localized names.
    #[serde(default)]
    names: Vec<NameNode>,
}

/// One localized name row.
#[derive(Debug, Deserialize)]
struct NameNode {
    /// Language of the name; the API allows null.
    language_id: Option<i64>,
    /// The name itself.
    name: String,
}

/// What: Build the JSON body for one page request.
///
/// Inputs:
/// - `params`: Offset/limit of the page
/// - `languages`: Language ids to request names for
///
/// Output:
/// - `{"query": ..., "variables": {"limit", "offset", "languages"}}`.
#[must_use]
pub fn request_body(params: QueryParameters, languages: &[i64]) -> Value {
    json!({
        "query": SPECIES_QUERY,
        "variables": {
            "limit": params.limit,
            "offset": params.offset,
            "languages": languages,
        }
    })
}

/// What: Decode a GraphQL response body into entities.
///
/// Inputs:
/// - `body`: Raw response text
///
/// Output:
/// - `Ok(entities)` in response order; `Err` when the body is not JSON, carries
///   GraphQL errors, or has no `data`.
///
/// Details:
/// - Only the first GraphQL error message is reported.
/// - Names with a null language are dropped.
pub(crate) fn decode_response(body: &str) -> Result<Vec<Entity>> {
    let resp: GraphqlResponse = serde_json::from_str(body)?;
    if let Some(first) = resp.errors.into_iter().next() {
        return Err(first.message.into());
    }
    let Some(data) = resp.data else {
        return Err("response contained no data".into());
    };
    Ok(data
        .species
        .into_iter()
        .map(|node| Entity {
            id: node.id,
            labels: node
                .names
                .into_iter()
                .filter_map(|n| n.language_id.map(|language_id| Label::new(language_id, n.name)))
                .collect(),
        })
        .collect())
}

/// Fetch capability that queries a GraphQL endpoint over HTTP.
#[derive(Clone, Debug)]
pub struct GraphqlSource {
    /// Shared HTTP client (connection pooling is per client).
    client: reqwest::Client,
    /// Endpoint URL.
    endpoint: String,
    /// Language ids whose names are requested.
    languages: Vec<i64>,
}

impl GraphqlSource {
    /// What: Create a source for `endpoint`.
    ///
    /// Inputs:
    /// - `endpoint`: GraphQL URL
    /// - `timeout`: Whole-request timeout
    /// - `languages`: Language ids to request names for
    ///
    /// Output:
    /// - `Ok(GraphqlSource)`; `Err` when the HTTP client cannot be built.
    ///
    /// # Errors
    /// - Returns `Err` when the TLS backend fails to initialize.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        languages: Vec<i64>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .user_agent(format!("dexpage/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {e}"))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            languages,
        })
    }

    /// Endpoint URL this source queries.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// What: POST one page query and decode the answer.
///
/// Inputs:
/// - `client`: HTTP client
/// - `endpoint`: GraphQL URL
/// - `body`: JSON request body
///
/// Output:
/// - Entities of the page, or an error describing the failure.
async fn post_query(client: reqwest::Client, endpoint: String, body: Value) -> Result<Vec<Entity>> {
    let resp = client
        .post(&endpoint)
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {e}"))?;
    if !status.is_success() {
        // GraphQL servers often explain a 4xx in the errors array.
        if let Ok(parsed) = serde_json::from_str::<GraphqlResponse>(&text)
            && let Some(first) = parsed.errors.into_iter().next()
        {
            return Err(format!("HTTP {status}: {}", first.message).into());
        }
        return Err(format!("HTTP {status}").into());
    }
    decode_response(&text)
}

impl FetchCapability for GraphqlSource {
    fn fetch(&self, params: QueryParameters) -> BoxFuture<'static, FetchResult> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let body = request_body(params, &self.languages);
        async move {
            let started = std::time::Instant::now();
            match post_query(client, endpoint, body).await {
                Ok(entities) => {
                    tracing::debug!(
                        offset = params.offset,
                        limit = params.limit,
                        count = entities.len(),
                        elapsed = ?started.elapsed(),
                        "fetched species page"
                    );
                    FetchResult::Success(entities)
                }
                Err(e) => FetchResult::Error(e.to_string()),
            }
        }
        .boxed()
    }
}
