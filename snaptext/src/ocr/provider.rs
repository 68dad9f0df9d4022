use std::sync::Arc;

use async_trait::async_trait;
use leptess::LepTess;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::{parse_provider_model, OcrConfig};
use crate::error::{Result, SnaptextError};

use super::api::VisionApiClient;
use super::TextRecognizer;

#[derive(Clone)]
enum OcrBackend {
    Local { tesseract: Arc<Mutex<LepTess>> },
    Api { client: VisionApiClient },
    Unavailable { reason: String },
}

/// Engine selection and invocation behind the [`TextRecognizer`] seam.
///
/// Construction never fails: a backend that cannot be initialized
/// degrades to `Unavailable`, so the server still starts and reports the
/// condition per request instead of crashing at boot.
#[derive(Clone)]
pub struct OcrProvider {
    backend: OcrBackend,
}

fn create_tesseract(languages: &str) -> std::result::Result<LepTess, String> {
    LepTess::new(None, languages).map_err(|e| e.to_string())
}

impl OcrProvider {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let (provider, _model) = parse_provider_model(&config.model);

        let backend = match provider.to_lowercase().as_str() {
            "openai" => match VisionApiClient::new(config) {
                Ok(client) => {
                    info!("hosted vision OCR backend initialized");
                    OcrBackend::Api { client }
                }
                Err(e) => {
                    let reason = format!("hosted vision OCR backend unavailable: {e}");
                    warn!("{}", reason);
                    OcrBackend::Unavailable { reason }
                }
            },
            _ => match create_tesseract(&config.languages) {
                Ok(lt) => {
                    info!(languages = %config.languages, "Tesseract OCR initialized");
                    OcrBackend::Local {
                        tesseract: Arc::new(Mutex::new(lt)),
                    }
                }
                Err(e) => {
                    let reason = format!("Tesseract not available: {e}");
                    warn!("{}", reason);
                    OcrBackend::Unavailable { reason }
                }
            },
        };

        Ok(Self { backend })
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, OcrBackend::Unavailable { .. })
    }

    async fn run_backend(&self, image: &[u8]) -> Result<String> {
        match &self.backend {
            OcrBackend::Local { tesseract } => {
                let bytes = image.to_vec();
                let tesseract = Arc::clone(tesseract);

                // Tesseract is synchronous and CPU-bound; keep it off the
                // request threads.
                let text = tokio::task::spawn_blocking(move || {
                    let mut lt = tesseract.blocking_lock();
                    lt.set_image_from_mem(&bytes)
                        .map_err(|e| SnaptextError::Ocr(format!("Failed to set image: {e}")))?;
                    lt.get_utf8_text()
                        .map_err(|e| SnaptextError::Ocr(format!("Failed to extract text: {e}")))
                })
                .await
                .map_err(|e| SnaptextError::Ocr(format!("OCR task panicked: {e}")))??;

                Ok(text)
            }
            OcrBackend::Api { client } => client.ocr(image).await,
            OcrBackend::Unavailable { reason } => {
                Err(SnaptextError::OcrUnavailable(reason.clone()))
            }
        }
    }
}

#[async_trait]
impl TextRecognizer for OcrProvider {
    async fn extract_text(&self, image: &[u8]) -> Result<String> {
        let text = self.run_backend(image).await?;
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(SnaptextError::Ocr("No text detected in the image.".into()));
        }
        Ok(text)
    }
}
