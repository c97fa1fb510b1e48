//! Repository error type shared by all backends.

/// A failure inside a repository backend.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The requested row does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The underlying database reported an error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
