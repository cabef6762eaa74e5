use thiserror::Error;

/// Errors from the attributes store (used by the trait definition in
/// taskkeeper-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors raised while dispatching a skill request.
///
/// Every variant is caught at the dispatch boundary and converted to a spoken
/// response; none of them escape to the platform.
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("missing required slot '{0}'")]
    MissingSlot(String),

    #[error("malformed request: {0}")]
    Malformed(String),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}
