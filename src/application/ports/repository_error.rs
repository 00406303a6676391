#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}
