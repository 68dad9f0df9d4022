use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{parse_provider_model, OcrConfig};
use crate::error::{Result, SnaptextError};

const EXTRACTION_PROMPT: &str =
    "Extract all text from this image. Return only the extracted text without any explanations or formatting.";

/// OpenAI-compatible vision backend: the image is sent as a base64 data
/// URL in a chat-completions request. One attempt per job; retry policy
/// belongs to the caller, not this pipeline.
#[derive(Clone, Debug)]
pub struct VisionApiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct VisionRequest {
    model: String,
    messages: Vec<VisionMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct VisionMessage {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct VisionResponse {
    choices: Vec<VisionChoice>,
}

#[derive(Debug, Deserialize)]
struct VisionChoice {
    message: VisionReply,
}

#[derive(Debug, Deserialize)]
struct VisionReply {
    content: String,
}

impl VisionApiClient {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| SnaptextError::Ocr("API key required for hosted vision OCR".into()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string());

        let (_provider, model) = parse_provider_model(&config.model);

        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| SnaptextError::Ocr(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url,
            model: model.to_string(),
        })
    }

    pub async fn ocr(&self, image_bytes: &[u8]) -> Result<String> {
        let base64_image = STANDARD.encode(image_bytes);
        let data_url = format!("data:image/png;base64,{base64_image}");

        let request = VisionRequest {
            model: self.model.clone(),
            messages: vec![VisionMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: EXTRACTION_PROMPT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_url },
                    },
                ],
            }],
            max_tokens: 4096,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SnaptextError::Ocr(format!("API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SnaptextError::Ocr(format!(
                "API request failed: {status} - {body}"
            )));
        }

        let parsed: VisionResponse = response
            .json()
            .await
            .map_err(|e| SnaptextError::Ocr(format!("Failed to parse response: {e}")))?;

        parsed
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| SnaptextError::Ocr("No response from API".into()))
    }
}
