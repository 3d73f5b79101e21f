use std::sync::Arc;

use crate::error::Result;
use crate::sparql::vocab::{
    DC_IDENTIFIER, DC_TITLE, PRES_EXTERNAL_SYSTEM, PRES_HAS_VIRGO_VIEW,
    PRES_PRESERVATION_PACKAGE, RDF_TYPE,
};
use crate::sparql::{QueryBinding, QueryTemplate};
use crate::triplestore::Triplestore;

const PROPERTIES_QUERY: &str = "PREFIX dc: <http://purl.org/dc/elements/1.1/>
PREFIX dcterms: <http://purl.org/dc/terms/>

SELECT ?p ?o ?oid ?odesc
WHERE {
    $uri ?p ?o .
    OPTIONAL { ?o dc:identifier ?oid }
    OPTIONAL { ?o dcterms:description ?odesc }
}";

/// Which part of the summary a property feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    PreservationPackage,
    Identifier,
    Title,
    PublishedView,
    SystemOfRecord,
}

/// Matches a predicate, and optionally an exact object, to a facet.
#[derive(Debug, Clone, Copy)]
pub struct FacetRule {
    pub predicate: &'static str,
    pub object: Option<&'static str>,
    pub facet: Facet,
}

pub const FACET_TABLE: &[FacetRule] = &[
    FacetRule {
        predicate: RDF_TYPE,
        object: Some(PRES_PRESERVATION_PACKAGE),
        facet: Facet::PreservationPackage,
    },
    FacetRule {
        predicate: DC_IDENTIFIER,
        object: None,
        facet: Facet::Identifier,
    },
    FacetRule {
        predicate: DC_TITLE,
        object: None,
        facet: Facet::Title,
    },
    FacetRule {
        predicate: PRES_HAS_VIRGO_VIEW,
        object: None,
        facet: Facet::PublishedView,
    },
    FacetRule {
        predicate: PRES_EXTERNAL_SYSTEM,
        object: None,
        facet: Facet::SystemOfRecord,
    },
];

/// Looks a `(predicate, object)` pair up in [`FACET_TABLE`].
pub fn classify(predicate: &str, object: &str) -> Option<Facet> {
    FACET_TABLE
        .iter()
        .find(|rule| {
            rule.predicate == predicate && rule.object.map_or(true, |expected| expected == object)
        })
        .map(|rule| rule.facet)
}

/// Direct properties of one resource, sorted into facets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFacets {
    pub titles: Vec<String>,
    pub identifiers: Vec<String>,
    pub published_views: Vec<String>,
    pub system_of_record: Option<String>,
    pub is_preservation_package: bool,
}

impl ResourceFacets {
    fn record(&mut self, facet: Facet, object: &str, row: &QueryBinding) {
        match facet {
            Facet::PreservationPackage => self.is_preservation_package = true,
            Facet::Identifier => self.identifiers.push(object.to_string()),
            Facet::Title => self.titles.push(object.to_string()),
            Facet::PublishedView => self.published_views.push(object.to_string()),
            Facet::SystemOfRecord => {
                self.system_of_record = Some(system_of_record_label(
                    object,
                    row.get("odesc"),
                    row.get("oid"),
                ));
            }
        }
    }
}

/// `"<description> (<identifier>)"`. Without a description the system's own
/// address stands in; without an identifier the parenthesised part is dropped.
fn system_of_record_label(
    object: &str,
    description: Option<&str>,
    identifier: Option<&str>,
) -> String {
    let name = description.unwrap_or(object);
    match identifier {
        Some(id) => format!("{name} ({id})"),
        None => name.to_string(),
    }
}

pub struct PropertyAggregator {
    triplestore: Arc<dyn Triplestore>,
}

impl PropertyAggregator {
    pub fn new(triplestore: Arc<dyn Triplestore>) -> Self {
        Self { triplestore }
    }

    pub async fn aggregate(&self, address: &str) -> Result<ResourceFacets> {
        let query = QueryTemplate::new(PROPERTIES_QUERY)
            .bind_iri("uri", address)
            .render()?;

        let mut facets = ResourceFacets::default();
        for row in self.triplestore.select(&query).await? {
            let (Some(predicate), Some(object)) = (row.get("p"), row.get("o")) else {
                continue;
            };
            if let Some(facet) = classify(predicate, object) {
                facets.record(facet, object, &row);
            }
        }

        Ok(facets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triplestore::fake::{row, Answer, FakeTriplestore};

    const URI: &str = "http://repo.test/rest/a/b";

    async fn aggregate(rows: Vec<QueryBinding>) -> ResourceFacets {
        let store = Arc::new(FakeTriplestore::new().on(&["?odesc"], Answer::Rows(rows)));
        PropertyAggregator::new(store).aggregate(URI).await.unwrap()
    }

    #[test]
    fn preservation_package_rule_requires_the_package_type() {
        assert_eq!(
            classify(RDF_TYPE, PRES_PRESERVATION_PACKAGE),
            Some(Facet::PreservationPackage)
        );
        assert_eq!(classify(RDF_TYPE, "http://www.w3.org/ns/ldp#Container"), None);
    }

    #[test]
    fn identifier_rule() {
        assert_eq!(classify(DC_IDENTIFIER, "MSS 1234"), Some(Facet::Identifier));
    }

    #[test]
    fn title_rule() {
        assert_eq!(classify(DC_TITLE, "Letters"), Some(Facet::Title));
    }

    #[test]
    fn published_view_rule() {
        assert_eq!(
            classify(PRES_HAS_VIRGO_VIEW, "http://search.lib/catalog/u1"),
            Some(Facet::PublishedView)
        );
    }

    #[test]
    fn system_of_record_rule() {
        assert_eq!(
            classify(PRES_EXTERNAL_SYSTEM, "http://repo.test/rest/systems/virgo"),
            Some(Facet::SystemOfRecord)
        );
    }

    #[test]
    fn unknown_predicate_is_ignored() {
        assert_eq!(classify("http://www.w3.org/ns/ldp#contains", "x"), None);
    }

    #[tokio::test]
    async fn facets_keep_row_order() {
        let facets = aggregate(vec![
            row(&[("p", DC_TITLE), ("o", "A")]),
            row(&[("p", DC_IDENTIFIER), ("o", "id-2")]),
            row(&[("p", DC_TITLE), ("o", "B")]),
            row(&[("p", DC_IDENTIFIER), ("o", "id-1")]),
            row(&[("p", PRES_HAS_VIRGO_VIEW), ("o", "http://search/u1")]),
        ])
        .await;

        assert_eq!(facets.titles, vec!["A", "B"]);
        assert_eq!(facets.identifiers, vec!["id-2", "id-1"]);
        assert_eq!(facets.published_views, vec!["http://search/u1"]);
        assert!(!facets.is_preservation_package);
        assert_eq!(facets.system_of_record, None);
    }

    #[tokio::test]
    async fn preservation_flag_is_idempotent() {
        let facets = aggregate(vec![
            row(&[("p", RDF_TYPE), ("o", PRES_PRESERVATION_PACKAGE)]),
            row(&[
                ("p", RDF_TYPE),
                ("o", "http://fedora.info/definitions/v4/repository#Resource"),
            ]),
            row(&[("p", RDF_TYPE), ("o", PRES_PRESERVATION_PACKAGE)]),
        ])
        .await;
        assert!(facets.is_preservation_package);
    }

    #[tokio::test]
    async fn other_types_do_not_set_the_flag() {
        let facets = aggregate(vec![row(&[
            ("p", RDF_TYPE),
            ("o", "http://fedora.info/definitions/v4/repository#Container"),
        ])])
        .await;
        assert!(!facets.is_preservation_package);
    }

    #[tokio::test]
    async fn system_of_record_last_row_wins() {
        let facets = aggregate(vec![
            row(&[
                ("p", PRES_EXTERNAL_SYSTEM),
                ("o", "http://repo.test/rest/sys/1"),
                ("odesc", "ArchivesSpace"),
                ("oid", "as-1"),
            ]),
            row(&[
                ("p", PRES_EXTERNAL_SYSTEM),
                ("o", "http://repo.test/rest/sys/2"),
                ("odesc", "Virgo"),
                ("oid", "u123"),
            ]),
        ])
        .await;
        assert_eq!(facets.system_of_record.as_deref(), Some("Virgo (u123)"));
    }

    #[test]
    fn system_of_record_label_fallbacks() {
        assert_eq!(
            system_of_record_label("http://sys", Some("Virgo"), None),
            "Virgo"
        );
        assert_eq!(
            system_of_record_label("http://sys", None, Some("u1")),
            "http://sys (u1)"
        );
    }

    #[tokio::test]
    async fn query_binds_the_address_as_iri() {
        let store = Arc::new(FakeTriplestore::new());
        PropertyAggregator::new(store.clone())
            .aggregate(URI)
            .await
            .unwrap();
        assert!(store.queries()[0].contains("<http://repo.test/rest/a/b> ?p ?o ."));
    }
}
