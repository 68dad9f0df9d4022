//! Request handlers.
//!
//! `process_image` is the coordinator for the extraction pipeline: the
//! auth middleware has already run by the time it executes, and each
//! remaining stage (read upload, validate, prepare, recognize) either
//! advances the request or ends it with a single typed failure. Exactly
//! one envelope leaves this module per request.

use axum::extract::{Multipart, State};

use crate::error::Result;
use crate::ocr::prepare_image;
use crate::upload::{self, RawUpload};

use super::response::Envelope;
use super::state::AppState;

/// Name of the multipart field carrying the upload.
const IMAGE_FIELD: &str = "image";

/// `GET /ping`
///
/// Health check. No auth, no side effects, same envelope every time.
pub async fn ping() -> Envelope {
    Envelope::ok_empty("Server is up!")
}

/// `POST /process-image`
///
/// Multipart upload in, extracted text (or a typed failure) out.
pub async fn process_image(State(state): State<AppState>, multipart: Multipart) -> Envelope {
    match run_pipeline(&state, multipart).await {
        Ok(text) => Envelope::ok("Image processed successfully!", text),
        Err(err) => Envelope::from(err),
    }
}

async fn run_pipeline(state: &AppState, mut multipart: Multipart) -> Result<String> {
    let upload = read_image_field(&mut multipart).await;
    let upload = upload::validate(upload)?;
    let prepared = prepare_image(&upload.bytes, &state.config.ocr)?;
    state.pool.submit(prepared).await
}

/// Pull the `image` field out of the multipart stream.
///
/// Returns `None` when the field is absent or the stream is malformed;
/// the validator turns that into the missing-file rejection.
async fn read_image_field(multipart: &mut Multipart) -> Option<RawUpload> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(_) => return None,
        };

        return Some(RawUpload { filename, bytes });
    }

    None
}
