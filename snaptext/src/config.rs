use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Immutable process configuration, built once at startup and passed
/// explicitly into the constructors that need it.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub pool: PoolConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The single caller credential. When unset the upload route is locked.
    pub api_key: Option<String>,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub languages: String,
    pub max_image_dimension: u32,
    pub min_image_dimension: u32,
}

/// Worker pool sizing. Capacity is fixed for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    pub capacity: usize,
    pub job_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("SNAPTEXT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("SNAPTEXT_PORT", 5000),
                api_key: env::var("SNAPTEXT_API_KEY").ok().filter(|k| !k.is_empty()),
                max_upload_bytes: parse_env_or("SNAPTEXT_MAX_UPLOAD_BYTES", 10 * 1024 * 1024),
            },
            ocr: OcrConfig {
                model: env::var("OCR_MODEL").unwrap_or_else(|_| "local/tesseract".to_string()),
                api_key: env::var("OCR_API_KEY").ok(),
                base_url: env::var("OCR_BASE_URL").ok(),
                languages: env::var("OCR_LANGUAGES").unwrap_or_else(|_| "eng".to_string()),
                max_image_dimension: parse_env_or("OCR_MAX_DIMENSION", 4096),
                min_image_dimension: parse_env_or("OCR_MIN_DIMENSION", 50),
            },
            pool: PoolConfig {
                capacity: parse_env_or("OCR_WORKERS", 2),
                job_timeout_secs: parse_env_or("OCR_TIMEOUT", 60),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// Recognized `OCR_MODEL` provider prefixes.
const KNOWN_PROVIDERS: &[&str] = &["openai", "local"];

/// Parse an `OCR_MODEL` value into a (provider, model) tuple.
///
/// `openai/gpt-4o-mini` selects the hosted vision backend; anything else
/// is treated as a local Tesseract selection.
pub fn parse_provider_model(model: &str) -> (&str, &str) {
    if let Some((prefix, rest)) = model.split_once('/') {
        let prefix_lower = prefix.to_lowercase();
        if KNOWN_PROVIDERS.contains(&prefix_lower.as_str()) {
            return (prefix, rest);
        }
    }
    ("local", model)
}
