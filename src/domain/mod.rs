mod conversation;
mod conversation_id;
mod detection;
mod encoded_image;
mod message_role;
mod turn;

pub use conversation::{Conversation, ConversationError};
pub use conversation_id::ConversationId;
pub use detection::{BoundingBox, Detection, NO_TUMOR_FINDINGS, Prediction};
pub use encoded_image::EncodedImage;
pub use message_role::MessageRole;
pub use turn::Turn;
