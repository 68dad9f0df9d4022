//! Upload validation.
//!
//! Checks run in order: an upload part was present, the filename and
//! payload are non-empty, the declared extension is on the allow-list,
//! and the magic bytes identify an accepted image container. Pixel
//! decoding is deliberately left to the OCR preprocessing stage.

use crate::error::{Result, SnaptextError};

/// Accepted upload extensions, matched case-insensitively.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// An upload as read off the wire: declared filename plus raw bytes.
#[derive(Debug, Clone)]
pub struct RawUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// An upload that passed validation and may be handed to the OCR stage.
#[derive(Debug, Clone)]
pub struct ValidatedUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Validate an upload, or explain why it was rejected.
pub fn validate(upload: Option<RawUpload>) -> Result<ValidatedUpload> {
    let upload = upload.ok_or(SnaptextError::MissingFile)?;

    if upload.filename.is_empty() || upload.bytes.is_empty() {
        return Err(SnaptextError::EmptyFile);
    }

    if !has_allowed_extension(&upload.filename) {
        return Err(SnaptextError::UnsupportedFormat(upload.filename));
    }

    // Magic-byte sniff: the payload must at least look like a PNG or JPEG
    // container, whatever the filename claims.
    match infer::get(&upload.bytes) {
        Some(kind) if ALLOWED_EXTENSIONS.contains(&kind.extension()) => Ok(ValidatedUpload {
            filename: upload.filename,
            bytes: upload.bytes,
        }),
        Some(kind) => Err(SnaptextError::UnsupportedFormat(format!(
            "{} (detected {})",
            upload.filename,
            kind.mime_type()
        ))),
        None => Err(SnaptextError::UnsupportedFormat(format!(
            "{} (unrecognized content)",
            upload.filename
        ))),
    }
}

fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
