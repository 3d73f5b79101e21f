use std::sync::Arc;

use crate::error::{Result, TrackerError};
use crate::sparql::vocab::DC_IDENTIFIER;
use crate::sparql::QueryTemplate;
use crate::triplestore::Triplestore;

const DIRECT_ADDRESS_QUERY: &str = "ASK { $uri ?p ?o }";

const LITERAL_IDENTIFIER_QUERY: &str = "SELECT ?s
WHERE {
  ?s $identifier $id .
}";

/// Turns an opaque identifier into the canonical addresses it denotes.
pub struct IdentifierResolver {
    triplestore: Arc<dyn Triplestore>,
    repository_root: String,
}

impl IdentifierResolver {
    pub fn new(triplestore: Arc<dyn Triplestore>, repository_root: impl Into<String>) -> Self {
        Self {
            triplestore,
            repository_root: repository_root.into(),
        }
    }

    /// Direct-address match first, then every subject carrying `id` as a
    /// `dc:identifier` literal. The two lists are concatenated as-is, so an
    /// address found both ways appears twice.
    pub async fn resolve(&self, id: &str) -> Result<Vec<String>> {
        let mut addresses = Vec::new();

        if let Some(address) = self.direct_address(id).await? {
            addresses.push(address);
        }
        addresses.extend(self.literal_identifier_matches(id).await?);

        tracing::debug!(id, matches = addresses.len(), "Resolved identifier");
        Ok(addresses)
    }

    async fn direct_address(&self, id: &str) -> Result<Option<String>> {
        let address = format!("{}{}", self.repository_root, id);

        let query = match QueryTemplate::new(DIRECT_ADDRESS_QUERY)
            .bind_iri("uri", address.as_str())
            .render()
        {
            Ok(query) => query,
            // Cannot name a resource, so nothing lives there.
            Err(TrackerError::InvalidTerm(reason)) => {
                tracing::debug!(id, %reason, "Identifier is not a valid repository path");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if self.triplestore.ask(&query).await? {
            Ok(Some(address))
        } else {
            Ok(None)
        }
    }

    async fn literal_identifier_matches(&self, id: &str) -> Result<Vec<String>> {
        let query = QueryTemplate::new(LITERAL_IDENTIFIER_QUERY)
            .bind_iri("identifier", DC_IDENTIFIER)
            .bind_literal("id", id)
            .render()?;

        Ok(self
            .triplestore
            .select(&query)
            .await?
            .iter()
            .filter_map(|row| row.get("s").map(str::to_string))
            .collect())
    }
}
