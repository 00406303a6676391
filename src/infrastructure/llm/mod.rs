mod inference_backend_factory;
mod mock_inference_backend;
mod ollama_cli_backend;
mod openai_compatible_backend;
mod unconfigured_backend;

pub use inference_backend_factory::{
    InferenceBackendFactory, InferenceProvider, SUPPORTED_PROVIDERS,
};
pub use mock_inference_backend::MockInferenceBackend;
pub use ollama_cli_backend::OllamaCliBackend;
pub use openai_compatible_backend::OpenAiCompatibleBackend;
pub use unconfigured_backend::UnconfiguredBackend;
