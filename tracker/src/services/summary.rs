use std::sync::Arc;

use crate::error::Result;
use crate::models::ResourceSummary;
use crate::triplestore::Triplestore;

use super::neighborhood::{best_label, NeighborhoodBuilder};
use super::properties::PropertyAggregator;
use super::resolver::IdentifierResolver;
use super::timeline::TimelineBuilder;

/// Entry point for item lookups: resolves an identifier and composes one
/// summary per resolved address.
#[derive(Clone)]
pub struct SummaryService {
    inner: Arc<Components>,
}

struct Components {
    resolver: IdentifierResolver,
    properties: PropertyAggregator,
    timeline: TimelineBuilder,
    neighborhood: NeighborhoodBuilder,
}

impl SummaryService {
    pub fn new(triplestore: Arc<dyn Triplestore>, repository_root: &str) -> Self {
        Self {
            inner: Arc::new(Components {
                resolver: IdentifierResolver::new(triplestore.clone(), repository_root),
                properties: PropertyAggregator::new(triplestore.clone()),
                timeline: TimelineBuilder::new(triplestore.clone()),
                neighborhood: NeighborhoodBuilder::new(triplestore, repository_root),
            }),
        }
    }

    /// Summaries for every address `id` resolves to, in resolver order.
    /// An unknown identifier yields an empty list.
    pub async fn lookup(&self, id: &str) -> Result<Vec<ResourceSummary>> {
        let addresses = self.inner.resolver.resolve(id).await?;

        let mut summaries = Vec::with_capacity(addresses.len());
        for address in &addresses {
            summaries.push(self.compose(address).await?);
        }

        tracing::info!(id, resources = summaries.len(), "Item lookup complete");
        Ok(summaries)
    }

    /// Full summary for one canonical address. Any failed sub-query fails
    /// the whole summary.
    pub async fn compose(&self, address: &str) -> Result<ResourceSummary> {
        let facets = self.inner.properties.aggregate(address).await?;
        let events = self.inner.timeline.timeline(address).await?;

        let root_id = self.inner.neighborhood.compact_id(address);
        let root_label = best_label(
            facets.titles.first().map(String::as_str),
            facets.identifiers.first().map(String::as_str),
            &root_id,
        );
        let graph = self
            .inner
            .neighborhood
            .neighborhood(address, &root_label)
            .await?;

        Ok(ResourceSummary {
            uri: address.to_string(),
            titles: facets.titles,
            identifiers: facets.identifiers,
            published_views: facets.published_views,
            system_of_record: facets.system_of_record,
            is_preservation_package: facets.is_preservation_package,
            events,
            graph_nodes: graph.nodes,
            graph_edges: graph.edges,
        })
    }
}
