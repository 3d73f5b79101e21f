use std::sync::Arc;

use crate::config::Config;
use crate::services::SummaryService;
use crate::triplestore::Triplestore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Shared, read-only SPARQL access. Also used directly by the health probe.
    pub triplestore: Arc<dyn Triplestore>,
    pub summaries: SummaryService,
}

impl AppState {
    pub fn new(config: Config, triplestore: Arc<dyn Triplestore>) -> Self {
        let config = Arc::new(config);
        let summaries = SummaryService::new(triplestore.clone(), &config.repository.root);

        Self {
            config,
            triplestore,
            summaries,
        }
    }
}
