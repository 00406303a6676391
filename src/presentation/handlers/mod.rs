mod conversations;
mod detect;
mod error;
mod follow_up;
mod health;
mod report;
mod upload;

pub use conversations::conversation_handler;
pub use detect::detect_handler;
pub use error::{ErrorResponse, error_response, session_error_response};
pub use follow_up::{chat_handler, report_qa_handler};
pub use health::health_handler;
pub use report::generate_report_handler;
