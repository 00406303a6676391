use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Conversation, ConversationId};

use super::RepositoryError;

/// Exclusive access to one conversation; holding the lock serialises turns.
pub type ConversationHandle = Arc<Mutex<Conversation>>;

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Returns the conversation for `id`, creating an empty one if absent.
    async fn ensure(&self, id: ConversationId) -> Result<ConversationHandle, RepositoryError>;

    /// Looks up `id` without creating anything.
    async fn find(&self, id: ConversationId) -> Result<Option<ConversationHandle>, RepositoryError>;

    /// Inserts a brand-new conversation. Fails if the id is already taken.
    async fn insert(&self, conversation: Conversation)
    -> Result<ConversationHandle, RepositoryError>;

    async fn count(&self) -> Result<usize, RepositoryError>;
}
