//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every board, column and health endpoint together
//! with the schema wrappers from [`crate::inbound::http::schemas`]. The
//! document backs Swagger UI in debug builds and the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{
    BoardFieldsSchema, BoardSchema, ColumnFieldsSchema, ColumnSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task board API",
        description = "Boards and their columns, with correlation headers on every write."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::boards::list_boards,
        crate::inbound::http::boards::get_board,
        crate::inbound::http::boards::create_board,
        crate::inbound::http::boards::update_board,
        crate::inbound::http::boards::delete_board,
        crate::inbound::http::columns::list_columns,
        crate::inbound::http::columns::get_column,
        crate::inbound::http::columns::create_column,
        crate::inbound::http::columns::update_column,
        crate::inbound::http::columns::delete_column,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BoardSchema,
        BoardFieldsSchema,
        ColumnSchema,
        ColumnFieldsSchema,
        ErrorEnvelope
    )),
    tags(
        (name = "boards", description = "Board documents"),
        (name = "columns", description = "Columns nested under a board"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
