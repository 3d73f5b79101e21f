//! SPARQL 1.1 Query Results JSON Format (`application/sparql-results+json`).

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Result, TrackerError};

/// One solution row: variable name to value. Variables left unbound by an
/// `OPTIONAL` clause are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBinding(HashMap<String, String>);

impl QueryBinding {
    pub fn get(&self, var: &str) -> Option<&str> {
        self.0.get(var).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryBinding {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct ResultsDocument {
    #[serde(default)]
    results: Option<ResultSet>,
    #[serde(default)]
    boolean: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ResultSet {
    bindings: Vec<HashMap<String, RdfTerm>>,
}

#[derive(Debug, Deserialize)]
struct RdfTerm {
    // "uri", "literal", "bnode" (or "typed-literal" from older stores);
    // only the lexical value is used.
    #[allow(dead_code)]
    #[serde(rename = "type")]
    kind: String,
    value: String,
}

fn parse_document(body: &str) -> Result<ResultsDocument> {
    serde_json::from_str(body).map_err(|e| {
        TrackerError::MalformedResponse(format!("body is not SPARQL results JSON: {e}"))
    })
}

/// Parses the body of a `SELECT` response.
pub fn parse_select(body: &str) -> Result<Vec<QueryBinding>> {
    let doc = parse_document(body)?;
    let results = doc.results.ok_or_else(|| {
        TrackerError::MalformedResponse("SELECT response has no 'results' member".to_string())
    })?;

    Ok(results
        .bindings
        .into_iter()
        .map(|row| row.into_iter().map(|(var, term)| (var, term.value)).collect())
        .collect())
}

/// Parses the body of an `ASK` response. A missing `boolean` member is a
/// malformed response, not `false`.
pub fn parse_ask(body: &str) -> Result<bool> {
    let doc = parse_document(body)?;
    doc.boolean.ok_or_else(|| {
        TrackerError::MalformedResponse("ASK response has no 'boolean' member".to_string())
    })
}
