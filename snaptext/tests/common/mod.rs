#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use image::{DynamicImage, ImageFormat};

use snaptext::api::{create_router, AppState};
use snaptext::config::{Config, OcrConfig, PoolConfig, ServerConfig};
use snaptext::error::{Result, SnaptextError};
use snaptext::ocr::TextRecognizer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const BOUNDARY: &str = "snaptext-test-boundary";

/// What the stub recognizer should do with each job.
pub enum StubBehavior {
    Reply(String),
    Fail(String),
    Hang,
}

/// Recognizer double recording every invocation.
pub struct StubRecognizer {
    calls: AtomicUsize,
    behavior: StubBehavior,
}

impl StubRecognizer {
    pub fn new(behavior: StubBehavior) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            behavior,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextRecognizer for StubRecognizer {
    async fn extract_text(&self, _image: &[u8]) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            StubBehavior::Reply(text) => Ok(text.clone()),
            StubBehavior::Fail(detail) => Err(SnaptextError::Ocr(detail.clone())),
            StubBehavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

pub fn test_config(job_timeout_secs: u64) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            api_key: Some(TEST_API_KEY.to_string()),
            max_upload_bytes: 4 * 1024 * 1024,
        },
        ocr: OcrConfig {
            model: "local/tesseract".to_string(),
            api_key: None,
            base_url: None,
            languages: "eng".to_string(),
            max_image_dimension: 4096,
            min_image_dimension: 10,
        },
        pool: PoolConfig {
            capacity: 2,
            job_timeout_secs,
        },
    }
}

pub fn test_app(recognizer: Arc<StubRecognizer>) -> Router {
    create_router(AppState::new(test_config(5), recognizer))
}

pub fn test_app_with_timeout(recognizer: Arc<StubRecognizer>, job_timeout_secs: u64) -> Router {
    create_router(AppState::new(test_config(job_timeout_secs), recognizer))
}

/// A small valid PNG generated in memory.
pub fn png_bytes() -> Vec<u8> {
    let img = DynamicImage::new_rgb8(64, 64);
    let mut out = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut out), ImageFormat::Png)
        .unwrap();
    out
}

/// A small valid JPEG generated in memory.
pub fn jpeg_bytes() -> Vec<u8> {
    let img = DynamicImage::new_rgb8(64, 64);
    let mut out = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut out), ImageFormat::Jpeg)
        .unwrap();
    out
}

/// Build a `multipart/form-data` body with a single file field.
pub fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// A multipart body with no file field at all.
pub fn multipart_body_without_file() -> Vec<u8> {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nno image here\r\n--{BOUNDARY}--\r\n"
    )
    .into_bytes()
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
