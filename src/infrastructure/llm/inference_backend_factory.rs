use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{InferenceBackend, InferenceError};
use crate::presentation::config::InferenceSettings;

use super::mock_inference_backend::MockInferenceBackend;
use super::ollama_cli_backend::OllamaCliBackend;
use super::openai_compatible_backend::OpenAiCompatibleBackend;
use super::unconfigured_backend::UnconfiguredBackend;

pub const SUPPORTED_PROVIDERS: [&str; 3] = ["ollama_cli", "openai_compatible", "mock"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceProvider {
    OllamaCli,
    OpenAiCompatible,
    Mock,
}

impl FromStr for InferenceProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            // "ollama_llava" is accepted for older deployments
            "ollama_cli" | "ollama" | "ollama_llava" => Ok(Self::OllamaCli),
            "openai_compatible" | "openai" | "lmstudio" => Ok(Self::OpenAiCompatible),
            "mock" => Ok(Self::Mock),
            other => Err(format!("Unknown inference provider: {}", other)),
        }
    }
}

pub struct InferenceBackendFactory;

impl InferenceBackendFactory {
    /// Resolves the process-wide backend once at startup. Unknown providers
    /// and missing required settings yield a backend that reports itself as
    /// not configured.
    pub fn create(settings: &InferenceSettings) -> Result<Arc<dyn InferenceBackend>, InferenceError> {
        let provider = match settings.provider.parse::<InferenceProvider>() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "Inference backend not configured");
                return Ok(Arc::new(UnconfiguredBackend::new(&settings.provider)));
            }
        };

        let timeout = Duration::from_secs(settings.timeout_seconds);

        match provider {
            InferenceProvider::OllamaCli => Ok(Arc::new(OllamaCliBackend::new(
                &settings.ollama_binary,
                &settings.model,
                timeout,
            ))),
            InferenceProvider::OpenAiCompatible => {
                let Some(base_url) = settings
                    .base_url
                    .as_deref()
                    .filter(|url| !url.trim().is_empty())
                else {
                    tracing::warn!("openai_compatible selected without inference.base_url");
                    return Ok(Arc::new(UnconfiguredBackend::missing_setting(
                        "openai_compatible",
                        "inference.base_url",
                    )));
                };
                let backend = OpenAiCompatibleBackend::new(
                    base_url,
                    &settings.model,
                    settings.api_key.clone(),
                    settings.max_tokens,
                    settings.temperature,
                    timeout,
                )?;
                Ok(Arc::new(backend))
            }
            InferenceProvider::Mock => Ok(Arc::new(MockInferenceBackend)),
        }
    }
}
