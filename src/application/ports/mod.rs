mod conversation_repository;
mod detection_service;
mod inference_backend;
mod repository_error;

pub use conversation_repository::{ConversationHandle, ConversationRepository};
pub use detection_service::{DetectionError, DetectionService};
pub use inference_backend::{InferenceBackend, InferenceError};
pub use repository_error::RepositoryError;
