use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::application::ports::{ConversationHandle, ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId};

/// Process-lifetime conversation store. Nothing is persisted or expired.
///
/// The outer map lock is only held for the lookup/insert itself; each
/// conversation carries its own async mutex for turn serialisation.
#[derive(Default)]
pub struct InMemoryConversationRepository {
    conversations: RwLock<HashMap<ConversationId, ConversationHandle>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(e: std::sync::PoisonError<T>) -> RepositoryError {
    RepositoryError::LockPoisoned(e.to_string())
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    #[instrument(skip(self), fields(conversation_id = %id))]
    async fn ensure(&self, id: ConversationId) -> Result<ConversationHandle, RepositoryError> {
        let mut conversations = self.conversations.write().map_err(poisoned)?;
        let handle = conversations.entry(id).or_insert_with(|| {
            tracing::debug!("Creating empty conversation on first reference");
            Arc::new(Mutex::new(Conversation::new(id)))
        });
        Ok(Arc::clone(handle))
    }

    async fn find(&self, id: ConversationId) -> Result<Option<ConversationHandle>, RepositoryError> {
        let conversations = self.conversations.read().map_err(poisoned)?;
        Ok(conversations.get(&id).map(Arc::clone))
    }

    #[instrument(skip(self, conversation), fields(conversation_id = %conversation.id()))]
    async fn insert(
        &self,
        conversation: Conversation,
    ) -> Result<ConversationHandle, RepositoryError> {
        let mut conversations = self.conversations.write().map_err(poisoned)?;
        match conversations.entry(conversation.id()) {
            Entry::Occupied(entry) => Err(RepositoryError::ConstraintViolation(format!(
                "conversation {} already exists",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                let handle = Arc::new(Mutex::new(conversation));
                entry.insert(Arc::clone(&handle));
                Ok(handle)
            }
        }
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.conversations.read().map_err(poisoned)?.len())
    }
}
