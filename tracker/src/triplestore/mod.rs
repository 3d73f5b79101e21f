mod http;

pub use http::SparqlHttpClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::sparql::{PreparedQuery, QueryBinding};

/// Read-only query access to the triplestore.
#[async_trait]
pub trait Triplestore: Send + Sync {
    /// Runs a `SELECT` query and returns one binding per solution row, in
    /// the order the store returned them.
    async fn select(&self, query: &PreparedQuery) -> Result<Vec<QueryBinding>>;

    /// Runs an `ASK` query.
    async fn ask(&self, query: &PreparedQuery) -> Result<bool>;
}
