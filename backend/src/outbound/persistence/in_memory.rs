//! In-process document store implementing both repository ports.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::domain::ports::{BoardRepository, ColumnRepository, RepositoryError};
use crate::domain::{
    AuditAction, AuditEntry, Board, BoardFields, Column, ColumnFields, ColumnFilter, Correlation,
    ObjectId, ResourceContext,
};

/// Number of audit entries retained in memory; older ones are discarded.
pub const AUDIT_CAPACITY: usize = 256;

#[derive(Debug)]
struct StoreState {
    boards: Vec<Board>,
    columns: Vec<Column>,
    audit: VecDeque<AuditEntry>,
    audit_capacity: usize,
}

impl StoreState {
    fn with_audit_capacity(audit_capacity: usize) -> Self {
        Self {
            boards: Vec::new(),
            columns: Vec::new(),
            audit: VecDeque::with_capacity(audit_capacity),
            audit_capacity,
        }
    }
}

impl StoreState {
    fn board_exists(&self, id: &ObjectId) -> bool {
        self.boards.iter().any(|board| board.id == *id)
    }

    fn record(
        &mut self,
        action: AuditAction,
        resource: ResourceContext,
        id: ObjectId,
        correlation: &Correlation,
    ) {
        info!(
            %action,
            %resource,
            %id,
            guid = correlation.guid(),
            init_user = correlation.init_user(),
            "document write"
        );
        if self.audit_capacity == 0 {
            return;
        }
        if self.audit.len() == self.audit_capacity {
            self.audit.pop_front();
        }
        self.audit.push_back(AuditEntry {
            action,
            resource,
            id,
            correlation: correlation.clone(),
            at: Utc::now(),
        });
    }
}

/// Boards and columns held in memory for the lifetime of the process.
///
/// Every write emits an `info` event; only the most recent
/// [`AUDIT_CAPACITY`] audit entries are also kept in memory.
///
/// The lock is only held for synchronous critical sections, never across an
/// await point.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use taskboard::domain::ports::{BoardRepository, ColumnRepository};
/// use taskboard::outbound::persistence::InMemoryDocumentStore;
///
/// let store = Arc::new(InMemoryDocumentStore::new());
/// let boards: Arc<dyn BoardRepository> = store.clone();
/// let columns: Arc<dyn ColumnRepository> = store;
/// # drop((boards, columns));
/// ```
#[derive(Debug)]
pub struct InMemoryDocumentStore {
    state: Mutex<StoreState>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::with_audit_capacity(AUDIT_CAPACITY)
    }
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store retaining at most `capacity` audit entries.
    #[must_use]
    pub fn with_audit_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(StoreState::with_audit_capacity(capacity)),
        }
    }

    /// The retained audit entries, oldest first.
    ///
    /// # Errors
    /// Returns [`RepositoryError::Backend`] when the store lock is poisoned.
    pub fn audit_trail(&self) -> Result<Vec<AuditEntry>, RepositoryError> {
        Ok(self.lock()?.audit.iter().cloned().collect())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::backend("document store lock poisoned"))
    }
}

#[async_trait]
impl BoardRepository for InMemoryDocumentStore {
    async fn find_all(&self) -> Result<Vec<Board>, RepositoryError> {
        Ok(self.lock()?.boards.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Board>, RepositoryError> {
        let state = self.lock()?;
        Ok(state.boards.iter().find(|board| board.id == *id).cloned())
    }

    async fn create(
        &self,
        fields: BoardFields,
        correlation: &Correlation,
    ) -> Result<Board, RepositoryError> {
        let mut state = self.lock()?;
        let board = Board::new(ObjectId::generate(), fields);
        state.boards.push(board.clone());
        state.record(AuditAction::Create, ResourceContext::Board, board.id, correlation);
        Ok(board)
    }

    async fn update(
        &self,
        id: &ObjectId,
        fields: BoardFields,
        correlation: &Correlation,
    ) -> Result<Board, RepositoryError> {
        let mut state = self.lock()?;
        let board = state
            .boards
            .iter_mut()
            .find(|board| board.id == *id)
            .ok_or_else(RepositoryError::not_exist)?;
        board.apply(fields);
        let updated = board.clone();
        state.record(AuditAction::Update, ResourceContext::Board, *id, correlation);
        Ok(updated)
    }

    async fn delete_by_id(
        &self,
        id: &ObjectId,
        correlation: &Correlation,
    ) -> Result<Board, RepositoryError> {
        let mut state = self.lock()?;
        let index = state
            .boards
            .iter()
            .position(|board| board.id == *id)
            .ok_or_else(RepositoryError::not_exist)?;
        let removed = state.boards.remove(index);

        let (orphans, kept): (Vec<Column>, Vec<Column>) = std::mem::take(&mut state.columns)
            .into_iter()
            .partition(|column| column.board_id == *id);
        state.columns = kept;
        for column in orphans {
            state.record(AuditAction::Delete, ResourceContext::Column, column.id, correlation);
        }
        state.record(AuditAction::Delete, ResourceContext::Board, *id, correlation);
        Ok(removed)
    }
}

#[async_trait]
impl ColumnRepository for InMemoryDocumentStore {
    async fn find_where(&self, filter: &ColumnFilter) -> Result<Vec<Column>, RepositoryError> {
        let state = self.lock()?;
        Ok(state
            .columns
            .iter()
            .filter(|column| filter.matches(column))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Column>, RepositoryError> {
        let state = self.lock()?;
        Ok(state.columns.iter().find(|column| column.id == *id).cloned())
    }

    async fn create(
        &self,
        board_id: &ObjectId,
        fields: ColumnFields,
        correlation: &Correlation,
    ) -> Result<Column, RepositoryError> {
        let mut state = self.lock()?;
        if !state.board_exists(board_id) {
            return Err(RepositoryError::not_exist());
        }
        let column = Column::new(ObjectId::generate(), *board_id, fields);
        state.columns.push(column.clone());
        state.record(AuditAction::Create, ResourceContext::Column, column.id, correlation);
        Ok(column)
    }

    async fn update(
        &self,
        id: &ObjectId,
        fields: ColumnFields,
        correlation: &Correlation,
    ) -> Result<Column, RepositoryError> {
        let mut state = self.lock()?;
        let column = state
            .columns
            .iter_mut()
            .find(|column| column.id == *id)
            .ok_or_else(RepositoryError::not_exist)?;
        column.apply(fields);
        let updated = column.clone();
        state.record(AuditAction::Update, ResourceContext::Column, *id, correlation);
        Ok(updated)
    }

    async fn delete_by_id(
        &self,
        id: &ObjectId,
        correlation: &Correlation,
    ) -> Result<Column, RepositoryError> {
        let mut state = self.lock()?;
        let index = state
            .columns
            .iter()
            .position(|column| column.id == *id)
            .ok_or_else(RepositoryError::not_exist)?;
        let removed = state.columns.remove(index);
        state.record(AuditAction::Delete, ResourceContext::Column, *id, correlation);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests;
