//! Driven port for column documents.

use async_trait::async_trait;

use crate::domain::{Column, ColumnFields, ColumnFilter, Correlation, ObjectId};

use super::RepositoryError;

/// Persistence collaborator for columns.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ColumnRepository: Send + Sync {
    /// Columns matching `filter`, in insertion order.
    async fn find_where(&self, filter: &ColumnFilter) -> Result<Vec<Column>, RepositoryError>;

    /// The column with `id`, or `None` when absent.
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Column>, RepositoryError>;

    /// Store a new column on `board_id`.
    ///
    /// Fails with [`RepositoryError::NotExist`] when the board is absent.
    async fn create(
        &self,
        board_id: &ObjectId,
        fields: ColumnFields,
        correlation: &Correlation,
    ) -> Result<Column, RepositoryError>;

    /// Replace the fields of column `id`.
    async fn update(
        &self,
        id: &ObjectId,
        fields: ColumnFields,
        correlation: &Correlation,
    ) -> Result<Column, RepositoryError>;

    /// Remove column `id`, returning the removed column.
    async fn delete_by_id(
        &self,
        id: &ObjectId,
        correlation: &Correlation,
    ) -> Result<Column, RepositoryError>;
}
