use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::ocr::{OcrWorkerPool, TextRecognizer};

/// Shared handler state: the immutable configuration and the bounded
/// OCR worker pool. Everything else is request-scoped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pool: OcrWorkerPool,
}

impl AppState {
    pub fn new(config: Config, recognizer: Arc<dyn TextRecognizer>) -> Self {
        let config = Arc::new(config);
        let pool = OcrWorkerPool::new(
            recognizer,
            config.pool.capacity,
            Duration::from_secs(config.pool.job_timeout_secs),
        );

        Self { config, pool }
    }
}
