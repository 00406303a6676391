use chrono::{DateTime, Utc};

use super::{ConversationId, EncodedImage, MessageRole, Turn};

/// Session state for one MRI study.
///
/// The image is attached at most once and the history is append-only; the
/// fields are private so neither invariant can be bypassed.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: ConversationId,
    image: Option<EncodedImage>,
    history: Vec<Turn>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversationError {
    #[error("conversation {0} already has an image")]
    ImageAlreadySet(ConversationId),
}

impl Conversation {
    pub fn new(id: ConversationId) -> Self {
        let now = Utc::now();
        Self {
            id,
            image: None,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn image(&self) -> Option<&EncodedImage> {
        self.image.as_ref()
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn attach_image(&mut self, image: EncodedImage) -> Result<(), ConversationError> {
        if self.image.is_some() {
            return Err(ConversationError::ImageAlreadySet(self.id));
        }
        self.image = Some(image);
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn append(&mut self, turn: Turn) {
        self.updated_at = turn.created_at;
        self.history.push(turn);
    }

    /// Content of the most recent assistant turn, if any.
    pub fn current_report(&self) -> Option<&str> {
        self.history
            .iter()
            .rev()
            .find(|t| t.role == MessageRole::Assistant)
            .map(|t| t.content.as_str())
    }
}
