pub mod image_codec;
mod inference_client;
pub mod report_prompts;
mod report_session_service;

pub use image_codec::ImageCodecError;
pub use inference_client::{BACKEND_ERROR_MARKER, InferenceClient, InferenceOutcome};
pub use report_session_service::{LookupPolicy, ReportSessionService, SessionError, SessionReply};
