use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;

pub mod gemini;

/// Capability that turns an instruction prompt into generated text.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Capability that turns an image-description prompt into one square image,
/// returned as a self-describing data URI.
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub type DynTextGeneration = Box<dyn TextGeneration>;
pub type DynImageGeneration = Box<dyn ImageGeneration>;

/// Builds the two Gemini-backed capabilities from one config. The credential
/// is injected here, at construction time, so the orchestrator itself never
/// touches ambient environment state.
pub fn make_capabilities(cfg: &Config) -> (DynTextGeneration, DynImageGeneration) {
    (
        Box::new(gemini::GeminiTextClient::new(cfg)),
        Box::new(gemini::GeminiImageClient::new(cfg)),
    )
}
