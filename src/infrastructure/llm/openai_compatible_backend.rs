use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use image::DynamicImage;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{InferenceBackend, InferenceError};
use crate::application::services::image_codec::encode_jpeg;

/// Any server speaking the OpenAI chat-completions dialect with image parts
/// (LM Studio, vLLM, Ollama's `/v1` endpoint, hosted APIs).
pub struct OpenAiCompatibleBackend {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl OpenAiCompatibleBackend {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        max_tokens: u32,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InferenceError::Unavailable(format!("http client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            max_tokens,
            temperature,
            timeout,
        })
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl InferenceBackend for OpenAiCompatibleBackend {
    fn name(&self) -> &str {
        "openai-compatible"
    }

    #[tracing::instrument(skip(self, image, prompt), fields(model = %self.model))]
    async fn infer(&self, image: &DynamicImage, prompt: &str) -> Result<String, InferenceError> {
        let jpeg = encode_jpeg(image).map_err(|e| InferenceError::ImageEncoding(e.to_string()))?;
        let data_uri = format!(
            "data:image/jpeg;base64,{}",
            general_purpose::STANDARD.encode(&jpeg)
        );

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        { "type": "image_url", "image_url": { "url": data_uri } },
                        { "type": "text", "text": prompt }
                    ]
                }
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "stream": false
        });

        let url = format!("{}/v1/chat/completions", self.base_url);
        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                InferenceError::Timeout(self.timeout.as_secs())
            } else {
                InferenceError::ApiRequestFailed(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(InferenceError::ApiRequestFailed(format!(
                "{url} returned {status}: {text}"
            )));
        }

        let raw = response
            .bytes()
            .await
            .map_err(|e| InferenceError::ApiRequestFailed(format!("read body: {e}")))?;

        let completion: ChatCompletion = serde_json::from_slice(&raw).map_err(|e| {
            tracing::error!(
                raw_response = %String::from_utf8_lossy(&raw),
                "Failed to parse chat completion JSON"
            );
            InferenceError::InvalidResponse(e.to_string())
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| InferenceError::InvalidResponse("no completion content".to_string()))
    }
}
