//! Column documents. Every column belongs to exactly one board.

use serde::{Deserialize, Serialize};

use crate::domain::ObjectId;

/// Write payload for creating or replacing a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFields {
    pub title: String,
    pub order: i64,
}

/// A stored column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub order: i64,
    pub board_id: ObjectId,
}

impl Column {
    /// Materialise a column on `board_id`.
    #[must_use]
    pub fn new(id: ObjectId, board_id: ObjectId, fields: ColumnFields) -> Self {
        Self {
            id,
            title: fields.title,
            order: fields.order,
            board_id,
        }
    }

    /// Replace the writable fields; the owning board never changes.
    pub fn apply(&mut self, fields: ColumnFields) {
        self.title = fields.title;
        self.order = fields.order;
    }
}

/// Selection criteria for column queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnFilter {
    pub board_id: ObjectId,
}

impl ColumnFilter {
    /// Columns belonging to `board_id`.
    #[must_use]
    pub fn on_board(board_id: ObjectId) -> Self {
        Self { board_id }
    }

    /// Whether `column` satisfies the filter.
    #[must_use]
    pub fn matches(&self, column: &Column) -> bool {
        column.board_id == self.board_id
    }
}
