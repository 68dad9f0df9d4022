//! snaptext: a request-scoped image-to-text extraction service.
//!
//! An authenticated `POST /process-image` multipart upload is validated,
//! normalized, and handed to an OCR engine through a bounded worker
//! pool; the caller gets back a fixed `{message, data}` envelope with
//! the extracted text or a typed failure.

pub mod api;
pub mod config;
pub mod error;
pub mod ocr;
pub mod upload;
