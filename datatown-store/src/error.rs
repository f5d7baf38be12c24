/// A persistence write reported failure (constraint violation,
/// connectivity loss, etc.).
#[derive(Debug, thiserror::Error)]
#[error("write failed: {0}")]
pub struct WriteError(#[from] anyhow::Error);

impl WriteError {
    /// Create a write error from a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        Self(anyhow::anyhow!(message.into()))
    }
}

/// A persistence read reported failure.
#[derive(Debug, thiserror::Error)]
#[error("query failed: {0}")]
pub struct QueryError(#[from] anyhow::Error);

impl QueryError {
    /// Create a query error from a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        Self(anyhow::anyhow!(message.into()))
    }
}
