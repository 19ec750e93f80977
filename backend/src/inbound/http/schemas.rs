//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their wire shape and live in the inbound adapter
//! layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Board`].
#[derive(ToSchema)]
#[schema(as = Board, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BoardSchema {
    /// Document identifier.
    #[schema(rename = "_id", example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    id: String,
    #[schema(example = "Roadmap")]
    title: String,
    #[schema(example = "Quarterly planning")]
    description: String,
    #[schema(example = "ada")]
    owner: String,
    /// Members with access to the board.
    users: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::BoardFields`].
#[derive(ToSchema)]
#[schema(as = BoardFields)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BoardFieldsSchema {
    title: String,
    description: String,
    owner: String,
    users: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::Column`].
#[derive(ToSchema)]
#[schema(as = Column, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ColumnSchema {
    /// Document identifier.
    #[schema(rename = "_id", example = "65a1f0c2e4b0a1b2c3d4e5f7")]
    id: String,
    #[schema(example = "In progress")]
    title: String,
    /// Position of the column on its board.
    #[schema(example = 2)]
    order: i64,
    /// Owning board.
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    board_id: String,
}

/// OpenAPI schema for [`crate::domain::ColumnFields`].
#[derive(ToSchema)]
#[schema(as = ColumnFields)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ColumnFieldsSchema {
    title: String,
    order: i64,
}
