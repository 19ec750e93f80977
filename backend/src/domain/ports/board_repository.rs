//! Driven port for board documents.

use async_trait::async_trait;

use crate::domain::{Board, BoardFields, Correlation, ObjectId};

use super::RepositoryError;

/// Persistence collaborator for boards.
///
/// Writes carry the request's [`Correlation`] so stores can attribute them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Every stored board in insertion order.
    async fn find_all(&self) -> Result<Vec<Board>, RepositoryError>;

    /// The board with `id`, or `None` when absent.
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Board>, RepositoryError>;

    /// Store a new board and return it with its minted identifier.
    async fn create(
        &self,
        fields: BoardFields,
        correlation: &Correlation,
    ) -> Result<Board, RepositoryError>;

    /// Replace the fields of board `id`.
    ///
    /// Fails with [`RepositoryError::NotExist`] when the board is absent.
    async fn update(
        &self,
        id: &ObjectId,
        fields: BoardFields,
        correlation: &Correlation,
    ) -> Result<Board, RepositoryError>;

    /// Remove board `id` and its columns, returning the removed board.
    async fn delete_by_id(
        &self,
        id: &ObjectId,
        correlation: &Correlation,
    ) -> Result<Board, RepositoryError>;
}
