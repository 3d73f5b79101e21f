use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{GraphEdge, GraphNode, NeighborhoodGraph};
use crate::sparql::vocab::{FCREPO_RESOURCE, NAMESPACE_PREFIXES, RDF_TYPE};
use crate::sparql::QueryTemplate;
use crate::triplestore::Triplestore;

const NEIGHBORS_QUERY: &str = "PREFIX dc: <http://purl.org/dc/elements/1.1/>

SELECT ?p ?o ?id ?title
WHERE {
    $uri ?p ?o .
    ?o $type $resource .
  OPTIONAL { ?o dc:title ?title }
  OPTIONAL { ?o dc:identifier ?id }
}";

/// First non-empty of title, identifier, then the fallback.
pub fn best_label(title: Option<&str>, identifier: Option<&str>, fallback: &str) -> String {
    [title, identifier]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Replaces each known namespace with its display prefix, in table order.
/// Anything else is returned unchanged.
pub fn compact_namespace(iri: &str) -> String {
    NAMESPACE_PREFIXES
        .iter()
        .fold(iri.to_string(), |label, &(namespace, prefix)| {
            label.replace(namespace, prefix)
        })
}

/// Builds the one-hop relationship graph around a resource.
pub struct NeighborhoodBuilder {
    triplestore: Arc<dyn Triplestore>,
    repository_root: String,
}

impl NeighborhoodBuilder {
    pub fn new(triplestore: Arc<dyn Triplestore>, repository_root: impl Into<String>) -> Self {
        Self {
            triplestore,
            repository_root: repository_root.into(),
        }
    }

    /// Display id for a resource: its address without the repository root.
    pub fn compact_id(&self, address: &str) -> String {
        address
            .strip_prefix(self.repository_root.as_str())
            .unwrap_or(address)
            .to_string()
    }

    /// `root_label` is the root's already-resolved label. Neighbors are
    /// deduplicated by full address; every row still yields an edge.
    pub async fn neighborhood(&self, address: &str, root_label: &str) -> Result<NeighborhoodGraph> {
        let query = QueryTemplate::new(NEIGHBORS_QUERY)
            .bind_iri("uri", address)
            .bind_iri("type", RDF_TYPE)
            .bind_iri("resource", FCREPO_RESOURCE)
            .render()?;

        let root_id = self.compact_id(address);
        let mut graph = NeighborhoodGraph::rooted_at(root_id.clone(), root_label.to_string());
        let mut seen: HashSet<String> = HashSet::new();

        for row in self.triplestore.select(&query).await? {
            let (Some(predicate), Some(neighbor)) = (row.get("p"), row.get("o")) else {
                continue;
            };
            let neighbor_id = self.compact_id(neighbor);

            if seen.insert(neighbor.to_string()) {
                let label = best_label(row.get("title"), row.get("id"), &neighbor_id);
                graph.add_node(GraphNode::neighbor(neighbor_id.clone(), label));
            }
            graph.add_edge(GraphEdge::new(
                root_id.clone(),
                neighbor_id,
                compact_namespace(predicate),
            ));
        }

        tracing::debug!(
            address,
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "Built neighborhood graph"
        );
        Ok(graph)
    }
}
