use std::sync::Arc;
use std::time::Instant;

use crate::source::{DataSource, FixtureSource};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DataSource>,
    pub started: Instant, // for /api/health uptime
}

impl AppState {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source, started: Instant::now() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureSource))
    }
}
