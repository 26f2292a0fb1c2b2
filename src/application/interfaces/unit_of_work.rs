use async_trait::async_trait;

use crate::domain::DomainError;

/// Commit boundary for one request scope.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Persists every staged change atomically. On failure nothing lands,
    /// the staged changes are discarded and the store error is returned.
    async fn complete(&self) -> Result<(), DomainError>;
}
