mod in_memory_conversation_repository;

pub use in_memory_conversation_repository::InMemoryConversationRepository;
