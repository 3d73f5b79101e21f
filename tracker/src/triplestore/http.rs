use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client,
};
use std::time::Duration;

use super::Triplestore;
use crate::config::TriplestoreConfig;
use crate::error::{Result, TrackerError};
use crate::sparql::{parse_ask, parse_select, PreparedQuery, QueryBinding};

const SPARQL_QUERY: &str = "application/sparql-query";
const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// SPARQL 1.1 Protocol client. Queries are sent as the unencoded POST body;
/// there are no retries, a failed request fails the lookup.
#[derive(Clone)]
pub struct SparqlHttpClient {
    client: Client,
    endpoint: String,
}

impl SparqlHttpClient {
    pub fn new(config: &TriplestoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TrackerError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.url.clone(),
        })
    }

    async fn execute(&self, query: &PreparedQuery) -> Result<String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(SPARQL_QUERY));
        headers.insert(ACCEPT, HeaderValue::from_static(SPARQL_RESULTS_JSON));

        tracing::debug!(endpoint = %self.endpoint, query = %query, "Issuing SPARQL query");

        let resp = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .body(query.as_str().to_owned())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TrackerError::Triplestore(format!(
                "SPARQL endpoint returned {status}: {body}"
            )));
        }

        Ok(resp.text().await?)
    }
}

#[async_trait]
impl Triplestore for SparqlHttpClient {
    async fn select(&self, query: &PreparedQuery) -> Result<Vec<QueryBinding>> {
        let body = self.execute(query).await?;
        let rows = parse_select(&body)?;
        tracing::debug!(rows = rows.len(), "SELECT returned");
        Ok(rows)
    }

    async fn ask(&self, query: &PreparedQuery) -> Result<bool> {
        let body = self.execute(query).await?;
        parse_ask(&body)
    }
}
