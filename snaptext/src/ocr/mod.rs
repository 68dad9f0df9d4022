//! OCR (Optical Character Recognition) Module
//!
//! Everything between a validated upload and extracted text lives here:
//!
//! - [`TextRecognizer`] is the capability seam: image bytes in, text out.
//! - [`OcrProvider`] implements it with a local Tesseract backend or an
//!   OpenAI-compatible hosted vision backend, selected via `OCR_MODEL`.
//! - [`OcrWorkerPool`] bounds how many recognitions run at once and puts
//!   a deadline on each job.
//! - [`prepare_image`] normalizes uploads (dimension bounds, grayscale)
//!   before they reach an engine.

mod api;
mod pool;
mod preprocessing;
mod provider;

pub use pool::OcrWorkerPool;
pub use preprocessing::prepare_image;
pub use provider::OcrProvider;

use async_trait::async_trait;

use crate::error::Result;

/// The opaque capability the worker pool schedules.
///
/// Implementations must be cheap to share behind an `Arc` and safe to
/// call concurrently; the pool, not the recognizer, enforces the
/// concurrency bound.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn extract_text(&self, image: &[u8]) -> Result<String>;
}
