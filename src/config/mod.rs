use serde::{Deserialize, Serialize};

use crate::errors::CopycraftError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout_secs: u64,
    pub debug: bool,
}

impl Config {
    /// Reads the credential from `GEMINI_API_KEY`. A missing or empty key is
    /// a fatal configuration error raised here, before any remote call.
    pub fn from_env() -> Result<Self, CopycraftError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| CopycraftError::Config("GEMINI_API_KEY env var is not set".into()))?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.into(),
            text_model: "gemini-2.5-flash".into(),
            image_model: "imagen-4.0-generate-001".into(),
            timeout_secs: 300,
            debug: false,
        })
    }
}
