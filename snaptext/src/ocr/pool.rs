use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;

use crate::error::{Result, SnaptextError};

use super::TextRecognizer;

/// Bounded executor for OCR jobs.
///
/// At most `capacity` recognitions run at any instant; additional
/// submitters suspend until a slot frees. Waiters are served in arrival
/// order (tokio's semaphore queues them FIFO). Each job carries a
/// deadline: if the recognizer does not finish in time the job task is
/// aborted, the slot is released, and the caller gets
/// [`SnaptextError::OcrTimeout`]. A panicking recognizer is captured as a
/// job failure; it cannot take down a slot or the process.
#[derive(Clone)]
pub struct OcrWorkerPool {
    recognizer: Arc<dyn TextRecognizer>,
    slots: Arc<Semaphore>,
    deadline: Duration,
}

impl OcrWorkerPool {
    pub fn new(recognizer: Arc<dyn TextRecognizer>, capacity: usize, deadline: Duration) -> Self {
        Self {
            recognizer,
            slots: Arc::new(Semaphore::new(capacity.max(1))),
            deadline,
        }
    }

    /// Run one recognition, suspending until a slot is free.
    ///
    /// The slot is held for the full duration of the job and released on
    /// every exit path, success or failure.
    pub async fn submit(&self, image: Vec<u8>) -> Result<String> {
        let _permit = self
            .slots
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| SnaptextError::Internal("worker pool closed".into()))?;

        let recognizer = Arc::clone(&self.recognizer);
        let job = tokio::spawn(async move { recognizer.extract_text(&image).await });
        let abort = job.abort_handle();

        match tokio::time::timeout(self.deadline, job).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(join_error)) => Err(SnaptextError::Ocr(format!(
                "OCR job aborted: {join_error}"
            ))),
            Err(_) => {
                abort.abort();
                Err(SnaptextError::OcrTimeout(self.deadline.as_secs()))
            }
        }
    }
}
