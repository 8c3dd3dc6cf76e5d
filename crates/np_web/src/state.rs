use std::sync::Arc;

use np_analysis::Analyzer;
use np_news::NewsSource;

pub struct AppState {
    pub source: Arc<dyn NewsSource>,
    pub analyzer: Analyzer,
}

impl AppState {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self {
            source,
            analyzer: Analyzer::new(),
        }
    }
}
