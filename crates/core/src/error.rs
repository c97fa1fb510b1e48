//! Domain error taxonomy.
//!
//! Service-layer failures collapse into three tagged variants so callers can
//! distinguish "bad input" from "missing entity" from "storage trouble"
//! while the original cause stays attached for logging.

/// A domain-level failure, produced by the service layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input failed a schema or format check.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The referenced entity does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// The repository failed while performing `op`. The original error is
    /// preserved as the source instead of being discarded.
    #[error("Persistence failure during {op}")]
    Persistence {
        op: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CoreError {
    /// Wrap a repository error, tagging it with the operation that failed.
    pub fn persistence<E>(op: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CoreError::Persistence {
            op,
            source: Box::new(source),
        }
    }
}
