//! Board documents.

use serde::{Deserialize, Serialize};

use crate::domain::ObjectId;

/// Write payload for creating or replacing a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardFields {
    pub title: String,
    pub description: String,
    pub owner: String,
    pub users: Vec<String>,
}

/// A stored board.
///
/// Serialises with the document-store field names, so the identifier is
/// rendered as `_id`.
///
/// # Examples
/// ```
/// use taskboard::domain::{Board, BoardFields, ObjectId};
///
/// let id = ObjectId::parse("65a1f0c2e4b0a1b2c3d4e5f6").expect("well-formed");
/// let board = Board::new(
///     id,
///     BoardFields {
///         title: "Roadmap".into(),
///         description: "Q3".into(),
///         owner: "ada".into(),
///         users: vec!["ada".into()],
///     },
/// );
/// let json = serde_json::to_value(&board).expect("serialise");
/// assert_eq!(json["_id"], "65a1f0c2e4b0a1b2c3d4e5f6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub owner: String,
    pub users: Vec<String>,
}

impl Board {
    /// Materialise a board from its identifier and fields.
    #[must_use]
    pub fn new(id: ObjectId, fields: BoardFields) -> Self {
        let BoardFields {
            title,
            description,
            owner,
            users,
        } = fields;
        Self {
            id,
            title,
            description,
            owner,
            users,
        }
    }

    /// Replace every writable field, keeping the identifier.
    pub fn apply(&mut self, fields: BoardFields) {
        *self = Self::new(self.id, fields);
    }
}
