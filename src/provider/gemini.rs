use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::config::Config;

/// Text generation over the Gemini `generateContent` endpoint. The whole
/// instruction is sent as a single user part, with no extra scaffolding.
pub struct GeminiTextClient {
    api_key: String,
    base_url: String,
    model: String,
    client: Client,
    timeout_secs: u64,
    debug: bool,
}

impl GeminiTextClient {
    pub fn new(cfg: &Config) -> Self {
        Self {
            api_key: cfg.api_key.clone(),
            base_url: cfg.base_url.clone(),
            model: cfg.text_model.clone(),
            client: Client::new(),
            timeout_secs: cfg.timeout_secs,
            debug: cfg.debug,
        }
    }
}

#[async_trait]
impl super::TextGeneration for GeminiTextClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        if self.debug {
            eprintln!("debug[gemini-text]: HTTP POST {url}");
        }

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if self.debug {
            eprintln!("debug[gemini-text]: raw status: {status}");
            eprintln!("debug[gemini-text]: raw response:\n{text}");
        }

        if !status.is_success() {
            return Err(anyhow!("Gemini API error ({}): {}", status, text));
        }

        // Minimal structs for the generateContent response
        #[derive(Deserialize)]
        struct Part {
            #[serde(default)]
            text: String,
        }
        #[derive(Deserialize)]
        struct Content {
            #[serde(default)]
            parts: Vec<Part>,
        }
        #[derive(Deserialize)]
        struct Candidate {
            content: Content,
        }
        #[derive(Deserialize)]
        struct GenerateContentResponse {
            #[serde(default)]
            candidates: Vec<Candidate>,
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse Gemini response: {e}\nRaw: {text}"))?;

        let content = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        if content.is_empty() {
            return Err(anyhow!("Gemini returned no text candidates"));
        }
        Ok(content)
    }
}

/// Image generation over the Imagen `predict` endpoint. One square JPEG per
/// call, returned as a data URI.
pub struct GeminiImageClient {
    api_key: String,
    base_url: String,
    model: String,
    client: Client,
    timeout_secs: u64,
    debug: bool,
}

impl GeminiImageClient {
    pub fn new(cfg: &Config) -> Self {
        Self {
            api_key: cfg.api_key.clone(),
            base_url: cfg.base_url.clone(),
            model: cfg.image_model.clone(),
            client: Client::new(),
            timeout_secs: cfg.timeout_secs,
            debug: cfg.debug,
        }
    }
}

#[async_trait]
impl super::ImageGeneration for GeminiImageClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:predict", self.base_url, self.model);
        let body = json!({
            "instances": [ { "prompt": prompt } ],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": "1:1",
                "outputMimeType": "image/jpeg"
            }
        });

        if self.debug {
            eprintln!("debug[gemini-image]: HTTP POST {url}");
        }

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if self.debug {
            eprintln!("debug[gemini-image]: raw status: {status}");
        }

        if !status.is_success() {
            return Err(anyhow!("Imagen API error ({}): {}", status, text));
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Prediction {
            bytes_base64_encoded: Option<String>,
            mime_type: Option<String>,
        }
        #[derive(Deserialize)]
        struct PredictResponse {
            #[serde(default)]
            predictions: Vec<Prediction>,
        }

        let parsed: PredictResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse Imagen response: {e}\nRaw: {text}"))?;

        let prediction = parsed
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No image data found in response"))?;
        let bytes = prediction
            .bytes_base64_encoded
            .ok_or_else(|| anyhow!("No image data found in response"))?;
        let mime = prediction.mime_type.unwrap_or_else(|| "image/jpeg".into());

        Ok(format!("data:{mime};base64,{bytes}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ImageGeneration, TextGeneration};

    fn test_config(base_url: String) -> Config {
        Config {
            api_key: "test-key".into(),
            base_url,
            text_model: "gemini-2.5-flash".into(),
            image_model: "imagen-4.0-generate-001".into(),
            timeout_secs: 5,
            debug: false,
        }
    }

    #[tokio::test]
    async fn text_client_returns_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .with_status(200)
            .with_body(
                r###"{"candidates":[{"content":{"parts":[{"text":"## A\ncontent"}]}}]}"###,
            )
            .create_async()
            .await;

        let client = GeminiTextClient::new(&test_config(server.url()));
        let out = client.generate("prompt").await.unwrap();
        assert_eq!(out, "## A\ncontent");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn text_client_surfaces_api_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(429)
            .with_body(r#"{"error":"quota exceeded"}"#)
            .create_async()
            .await;

        let client = GeminiTextClient::new(&test_config(server.url()));
        let err = client.generate("prompt").await.unwrap_err();
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn image_client_builds_a_data_uri() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/imagen-4.0-generate-001:predict")
            .with_status(200)
            .with_body(
                r#"{"predictions":[{"bytesBase64Encoded":"aGVsbG8=","mimeType":"image/jpeg"}]}"#,
            )
            .create_async()
            .await;

        let client = GeminiImageClient::new(&test_config(server.url()));
        let out = client.generate("a red kettle").await.unwrap();
        assert_eq!(out, "data:image/jpeg;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn image_client_rejects_empty_predictions() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/imagen-4.0-generate-001:predict")
            .with_status(200)
            .with_body(r#"{"predictions":[]}"#)
            .create_async()
            .await;

        let client = GeminiImageClient::new(&test_config(server.url()));
        let err = client.generate("a red kettle").await.unwrap_err();
        assert!(err.to_string().contains("No image data"));
    }
}
