//! # Response Envelope
//!
//! Every endpoint returns the same two-field JSON shape:
//!
//! ```json
//! { "message": "Image processed successfully!", "data": "extracted text" }
//! ```
//!
//! `message` is a fixed human-readable category; `data` carries the
//! extracted text on success, an error detail on failure, or `null`.
//! Both fields are always present on the wire. The HTTP status rides
//! alongside and is applied when the envelope becomes a response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::SnaptextError;

/// The sole externally visible response shape.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub message: String,
    pub data: Option<String>,

    /// HTTP status to use in the response. Not serialized on the wire.
    #[serde(skip)]
    status: StatusCode,
}

impl Envelope {
    /// Success envelope carrying extracted text (HTTP 200).
    pub fn ok(message: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: Some(data.into()),
            status: StatusCode::OK,
        }
    }

    /// Success envelope with no payload, e.g. the health check (HTTP 200).
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            status: StatusCode::OK,
        }
    }

    fn failure(status: StatusCode, message: impl Into<String>, data: Option<String>) -> Self {
        Self {
            message: message.into(),
            data,
            status,
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<SnaptextError> for Envelope {
    /// The fixed outcome table: every error kind maps to exactly one
    /// `{message, data}` template. Internal details are logged, never
    /// leaked.
    fn from(err: SnaptextError) -> Self {
        let status = err.status();
        match err {
            SnaptextError::Unauthorized(detail) => {
                Envelope::failure(status, "Invalid or missing API key.", Some(detail))
            }
            SnaptextError::MissingFile => {
                Envelope::failure(status, "No image file provided.", None)
            }
            SnaptextError::EmptyFile => {
                Envelope::failure(status, "No image selected for uploading.", None)
            }
            SnaptextError::UnsupportedFormat(_) => Envelope::failure(
                status,
                "Invalid file format. Allowed types are: png, jpg, jpeg.",
                None,
            ),
            SnaptextError::ImageDecode(detail) => {
                Envelope::failure(status, "Error opening or processing image.", Some(detail))
            }
            SnaptextError::Ocr(detail) => {
                Envelope::failure(status, "Error processing the image.", Some(detail))
            }
            SnaptextError::OcrUnavailable(detail) => {
                Envelope::failure(status, "OCR engine unavailable.", Some(detail))
            }
            SnaptextError::OcrTimeout(secs) => Envelope::failure(
                status,
                "OCR processing timed out.",
                Some(format!("No result after {secs} seconds.")),
            ),
            SnaptextError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error mapped to response envelope");
                Envelope::failure(status, "Unexpected server error.", None)
            }
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_envelope_serializes_both_fields() {
        let envelope = Envelope::ok("Image processed successfully!", "Amoxicillin 500mg");
        let json = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(json["message"], "Image processed successfully!");
        assert_eq!(json["data"], "Amoxicillin 500mg");
        assert_eq!(envelope.status(), StatusCode::OK);
    }

    #[test]
    fn empty_envelope_serializes_null_data() {
        let envelope = Envelope::ok_empty("Server is up!");
        let json = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(json["message"], "Server is up!");
        assert!(json["data"].is_null());
        assert!(json.as_object().unwrap().contains_key("data"));
    }

    #[test]
    fn status_is_not_serialized() {
        let envelope = Envelope::ok_empty("Server is up!");
        let json = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn validation_errors_map_to_the_fixed_messages() {
        let envelope = Envelope::from(SnaptextError::MissingFile);
        assert_eq!(envelope.message, "No image file provided.");
        assert_eq!(envelope.status(), StatusCode::BAD_REQUEST);
        assert!(envelope.data.is_none());

        let envelope = Envelope::from(SnaptextError::EmptyFile);
        assert_eq!(envelope.message, "No image selected for uploading.");

        let envelope = Envelope::from(SnaptextError::UnsupportedFormat("scan.gif".into()));
        assert_eq!(
            envelope.message,
            "Invalid file format. Allowed types are: png, jpg, jpeg."
        );
        assert!(envelope.data.is_none());
    }

    #[test]
    fn ocr_failure_carries_the_detail() {
        let envelope = Envelope::from(SnaptextError::Ocr("No text detected in the image.".into()));
        assert_eq!(envelope.message, "Error processing the image.");
        assert_eq!(
            envelope.data.as_deref(),
            Some("No text detected in the image.")
        );
        assert_eq!(envelope.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn timeout_maps_to_gateway_timeout() {
        let envelope = Envelope::from(SnaptextError::OcrTimeout(60));
        assert_eq!(envelope.message, "OCR processing timed out.");
        assert_eq!(envelope.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(envelope.data.as_deref(), Some("No result after 60 seconds."));
    }

    #[test]
    fn internal_errors_never_leak_details() {
        let envelope = Envelope::from(SnaptextError::Internal("secret debug info".into()));
        assert_eq!(envelope.message, "Unexpected server error.");
        assert!(envelope.data.is_none());
    }
}
