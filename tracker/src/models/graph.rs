use serde::{Deserialize, Serialize};

/// vis.js color for every node other than the one being summarized.
pub const NEIGHBOR_COLOR: &str = "gray";

/// A node in the relationship neighborhood (vis.js `DataSet` shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GraphNode {
    /// Resource address with the repository root stripped
    pub id: String,

    /// Best available human-readable label
    pub label: String,

    /// Only set on neighbor nodes; the root node keeps the default style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A directed, labelled edge from the root to one neighbor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,

    /// Predicate with its namespace compacted to a short prefix
    pub label: String,
}

/// Nodes and edges around one resource. The root node is always first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborhoodGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl NeighborhoodGraph {
    /// Start a graph containing only the root node
    pub fn rooted_at(id: String, label: String) -> Self {
        Self {
            nodes: vec![GraphNode::root(id, label)],
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: GraphNode) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: GraphEdge) {
        self.edges.push(edge);
    }
}

impl GraphNode {
    pub fn root(id: String, label: String) -> Self {
        Self {
            id,
            label,
            color: None,
        }
    }

    pub fn neighbor(id: String, label: String) -> Self {
        Self {
            id,
            label,
            color: Some(NEIGHBOR_COLOR.to_string()),
        }
    }
}

impl GraphEdge {
    pub fn new(from: String, to: String, label: String) -> Self {
        Self { from, to, label }
    }
}
