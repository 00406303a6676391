use std::sync::Arc;

use crate::application::ports::{ConversationHandle, ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationError, ConversationId, Turn};

use super::image_codec::{self, ImageCodecError};
use super::inference_client::{InferenceClient, InferenceOutcome};
use super::report_prompts;

/// How refine/ask treat a conversation id the store has never seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPolicy {
    /// Unknown ids are rejected with `SessionError::ConversationNotFound`.
    Strict,
    /// Unknown ids get an empty conversation, which then fails the image check.
    CreateOnMiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FollowUp {
    Refine,
    Ask,
}

impl FollowUp {
    fn field(self) -> &'static str {
        match self {
            FollowUp::Refine => "message",
            FollowUp::Ask => "question",
        }
    }

    fn prompt(self, current_report: Option<&str>, text: &str) -> String {
        match self {
            FollowUp::Refine => report_prompts::build_refine_prompt(current_report, text),
            FollowUp::Ask => report_prompts::build_qa_prompt(current_report, text),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionReply {
    pub conversation_id: ConversationId,
    pub outcome: InferenceOutcome,
}

/// Drives generate, refine and ask against one conversation store.
///
/// Every operation holds the conversation's lock from context lookup until
/// its assistant turn is appended, so turns for one id never interleave.
/// Conversations are independent and never contend with each other.
pub struct ReportSessionService {
    repository: Arc<dyn ConversationRepository>,
    inference: InferenceClient,
    lookup_policy: LookupPolicy,
}

impl ReportSessionService {
    pub fn new(
        repository: Arc<dyn ConversationRepository>,
        inference: InferenceClient,
        lookup_policy: LookupPolicy,
    ) -> Self {
        Self {
            repository,
            inference,
            lookup_policy,
        }
    }

    pub fn backend_name(&self) -> &str {
        self.inference.backend_name()
    }

    #[tracing::instrument(skip(self, image_bytes), fields(image_bytes = image_bytes.len()))]
    pub async fn generate(
        &self,
        image_bytes: &[u8],
        findings: &str,
    ) -> Result<SessionReply, SessionError> {
        let findings = findings.trim();
        if findings.is_empty() {
            return Err(SessionError::EmptyInput("findings"));
        }

        let decoded = image_codec::decode_image(image_bytes).map_err(SessionError::InvalidImage)?;

        let mut conversation = Conversation::new(ConversationId::new());
        conversation.attach_image(image_codec::encode_base64(image_bytes))?;
        let conversation_id = conversation.id();

        let handle = self.repository.insert(conversation).await?;
        let mut conversation = handle.lock().await;

        conversation.append(Turn::system(report_prompts::SYSTEM_FRAMING));
        conversation.append(Turn::user(report_prompts::findings_turn(findings)));

        let prompt = report_prompts::build_initial_prompt(findings);
        let outcome = self.inference.infer(&decoded, &prompt).await;
        conversation.append(Turn::assistant(outcome.text()));

        tracing::info!(
            conversation_id = %conversation_id,
            backend_error = outcome.is_backend_error(),
            "Initial report generated"
        );

        Ok(SessionReply {
            conversation_id,
            outcome,
        })
    }

    #[tracing::instrument(skip(self, message), fields(conversation_id = %id))]
    pub async fn refine(
        &self,
        id: ConversationId,
        message: &str,
    ) -> Result<SessionReply, SessionError> {
        self.follow_up(id, message, FollowUp::Refine).await
    }

    #[tracing::instrument(skip(self, question), fields(conversation_id = %id))]
    pub async fn ask(&self, id: ConversationId, question: &str) -> Result<SessionReply, SessionError> {
        self.follow_up(id, question, FollowUp::Ask).await
    }

    /// Copy of the conversation as it stands; never creates one.
    pub async fn snapshot(&self, id: ConversationId) -> Result<Option<Conversation>, SessionError> {
        match self.repository.find(id).await? {
            Some(handle) => Ok(Some(handle.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn follow_up(
        &self,
        id: ConversationId,
        text: &str,
        mode: FollowUp,
    ) -> Result<SessionReply, SessionError> {
        if text.trim().is_empty() {
            return Err(SessionError::EmptyInput(mode.field()));
        }

        let handle = self.resolve(id).await?;
        let mut conversation = handle.lock().await;

        let image = conversation
            .image()
            .cloned()
            .ok_or(SessionError::MissingImage(id))?;
        let decoded = image_codec::decode_encoded(&image)
            .map_err(|e| SessionError::CorruptStoredImage(id, e))?;

        let prompt = mode.prompt(conversation.current_report(), text);

        conversation.append(Turn::user(text));
        let outcome = self.inference.infer(&decoded, &prompt).await;
        conversation.append(Turn::assistant(outcome.text()));

        tracing::info!(
            mode = ?mode,
            history_len = conversation.history().len(),
            backend_error = outcome.is_backend_error(),
            "Follow-up turn completed"
        );

        Ok(SessionReply {
            conversation_id: id,
            outcome,
        })
    }

    async fn resolve(&self, id: ConversationId) -> Result<ConversationHandle, SessionError> {
        match self.lookup_policy {
            LookupPolicy::Strict => self
                .repository
                .find(id)
                .await?
                .ok_or(SessionError::ConversationNotFound(id)),
            LookupPolicy::CreateOnMiss => Ok(self.repository.ensure(id).await?),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid image: {0}")]
    InvalidImage(ImageCodecError),
    #[error("missing or empty field: {0}")]
    EmptyInput(&'static str),
    #[error("conversation not found: {0}")]
    ConversationNotFound(ConversationId),
    #[error("conversation {0} has no image; generate a report first")]
    MissingImage(ConversationId),
    #[error("stored image for conversation {0} is unreadable: {1}")]
    CorruptStoredImage(ConversationId, ImageCodecError),
    #[error("conversation: {0}")]
    Conversation(#[from] ConversationError),
    #[error("storage: {0}")]
    Storage(#[from] RepositoryError),
}
