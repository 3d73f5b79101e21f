// Shared helpers for the integration tests
#![allow(dead_code)]

use std::sync::Once;

use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tracker::config::{Config, RepositoryConfig, ServerConfig, TriplestoreConfig};

pub const QUERY_PATH: &str = "/ds/query";
pub const REPOSITORY_ROOT: &str = "http://repo.test/rest/";

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn test_config(mock_server: &MockServer) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        triplestore: TriplestoreConfig {
            url: format!("{}{}", mock_server.uri(), QUERY_PATH),
            timeout_secs: 5,
        },
        repository: RepositoryConfig {
            root: REPOSITORY_ROOT.to_string(),
        },
    }
}

/// `application/sparql-results+json` body for an ASK query
pub fn ask_body(answer: bool) -> Value {
    json!({ "head": {}, "boolean": answer })
}

/// `application/sparql-results+json` body for a SELECT query. Each row is a
/// list of `(variable, value)` pairs; values starting with `http` are typed
/// as IRIs, everything else as literals.
pub fn select_body(vars: &[&str], rows: &[&[(&str, &str)]]) -> Value {
    let bindings: Vec<Value> = rows
        .iter()
        .map(|row| {
            let mut binding = serde_json::Map::new();
            for (var, value) in row.iter() {
                let kind = if value.starts_with("http") { "uri" } else { "literal" };
                binding.insert(var.to_string(), json!({ "type": kind, "value": value }));
            }
            Value::Object(binding)
        })
        .collect();

    json!({ "head": { "vars": vars }, "results": { "bindings": bindings } })
}

/// Answer any SPARQL POST whose body contains every fragment.
pub async fn mount_query(server: &MockServer, fragments: &[&str], body: Value) {
    let mut mock = Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(header("content-type", "application/sparql-query"));
    for fragment in fragments {
        mock = mock.and(body_string_contains(*fragment));
    }
    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Fallback for every query not mounted explicitly: no rows / false.
pub async fn mount_empty_defaults(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_string_contains("ASK"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ask_body(false)))
        .with_priority(10)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_string_contains("SELECT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(select_body(&[], &[])))
        .with_priority(10)
        .mount(server)
        .await;
}
