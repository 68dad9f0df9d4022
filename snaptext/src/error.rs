use axum::http::StatusCode;
use thiserror::Error;

/// Error taxonomy for the request pipeline.
///
/// Every failure a request can produce is one of these kinds; the
/// coordinator converts each into exactly one response envelope before it
/// leaves the handler. Nothing propagates as a process-level fault.
#[derive(Error, Debug)]
pub enum SnaptextError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("no image file provided")]
    MissingFile,

    #[error("no image selected for uploading")]
    EmptyFile,

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("image decode error: {0}")]
    ImageDecode(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("OCR timed out after {0} seconds")]
    OcrTimeout(u64),

    #[error("internal error: {0}")]
    Internal(String),
}

impl SnaptextError {
    /// HTTP status for this error kind. Auth and validation failures are
    /// client errors; everything past the validator is a server error.
    pub fn status(&self) -> StatusCode {
        match self {
            SnaptextError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            SnaptextError::MissingFile
            | SnaptextError::EmptyFile
            | SnaptextError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
            SnaptextError::ImageDecode(_) | SnaptextError::Ocr(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            SnaptextError::OcrUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            SnaptextError::OcrTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            SnaptextError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, SnaptextError>;
