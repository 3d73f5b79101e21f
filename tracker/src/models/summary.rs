use serde::{Deserialize, Serialize};

use super::{GraphEdge, GraphNode};

/// One PREMIS event attached to a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Event type, e.g. `Ingest` or a PREMIS event-type IRI
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event timestamp exactly as stored
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bag_size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bag_payload_size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

/// Provenance digest for one canonical resource.
///
/// Facets, events and the system of record are left out of the JSON when
/// empty; `uri`, `APTrust-bound` and the graph are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResourceSummary {
    pub uri: String,

    #[serde(rename = "title", default, skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<String>,

    #[serde(rename = "id", default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<String>,

    #[serde(
        rename = "published URLs",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub published_views: Vec<String>,

    #[serde(
        rename = "system of record",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub system_of_record: Option<String>,

    #[serde(rename = "APTrust-bound", default)]
    pub is_preservation_package: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventRecord>,

    #[serde(rename = "_graph_nodes", default)]
    pub graph_nodes: Vec<GraphNode>,

    #[serde(rename = "_graph_edges", default)]
    pub graph_edges: Vec<GraphEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bare(uri: &str) -> ResourceSummary {
        ResourceSummary {
            uri: uri.to_string(),
            titles: vec![],
            identifiers: vec![],
            published_views: vec![],
            system_of_record: None,
            is_preservation_package: false,
            events: vec![],
            graph_nodes: vec![GraphNode::root("x".to_string(), "x".to_string())],
            graph_edges: vec![],
        }
    }

    #[test]
    fn test_empty_facets_are_omitted() {
        let value = serde_json::to_value(bare("http://repo/rest/x")).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["uri"], "http://repo/rest/x");
        assert_eq!(object["APTrust-bound"], false);
        assert!(!object.contains_key("title"));
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("published URLs"));
        assert!(!object.contains_key("system of record"));
        assert!(!object.contains_key("events"));
        assert_eq!(object["_graph_nodes"], json!([{"id": "x", "label": "x"}]));
        assert_eq!(object["_graph_edges"], json!([]));
    }

    #[test]
    fn test_populated_summary_uses_wire_names() {
        let mut summary = bare("http://repo/rest/x");
        summary.titles = vec!["A".to_string()];
        summary.identifiers = vec!["id-1".to_string()];
        summary.published_views = vec!["http://search/x".to_string()];
        summary.system_of_record = Some("Virgo (u123)".to_string());
        summary.is_preservation_package = true;

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["title"], json!(["A"]));
        assert_eq!(value["id"], json!(["id-1"]));
        assert_eq!(value["published URLs"], json!(["http://search/x"]));
        assert_eq!(value["system of record"], "Virgo (u123)");
        assert_eq!(value["APTrust-bound"], true);
    }

    #[test]
    fn test_event_optional_fields_omitted() {
        let event = EventRecord {
            event_type: "Ingest".to_string(),
            date: "2020-01-01".to_string(),
            bag_size: None,
            bag_payload_size: Some("1024".to_string()),
            outcome: None,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({"type": "Ingest", "date": "2020-01-01", "bagPayloadSize": "1024"})
        );
    }
}
