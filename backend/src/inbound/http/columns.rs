//! Column API handlers, nested under their board.
//!
//! ```text
//! GET    /api/v1/boards/{boardId}/columns
//! GET    /api/v1/boards/{boardId}/columns/{columnId}
//! POST   /api/v1/boards/{boardId}/columns   {"title":"Todo","order":1}
//! PUT    /api/v1/boards/{boardId}/columns/{columnId}
//! DELETE /api/v1/boards/{boardId}/columns/{columnId}
//! ```
//!
//! Listing and creating require the board to exist. Single-column routes
//! only validate the board identifier's shape.

use actix_web::{delete, get, post, put, web};
use serde_json::{Map, Value};

use crate::domain::ports::RepositoryError;
use crate::domain::{Column, ColumnFields, ColumnFilter, ObjectId, ResourceContext};
use crate::inbound::http::ApiResult;
use crate::inbound::http::correlation::CorrelationHeaders;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{ColumnFieldsSchema, ColumnSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    COLUMN_KEYS, ensure_body_shape, integer_field, parse_object_id, string_field,
};

fn column_fields(payload: &Map<String, Value>) -> ApiResult<ColumnFields> {
    ensure_body_shape(payload, &COLUMN_KEYS)?;
    Ok(ColumnFields {
        title: string_field(payload, "title")?,
        order: integer_field(payload, "order")?,
    })
}

fn column_path(raw: &(String, String)) -> ApiResult<(ObjectId, ObjectId)> {
    let (board_id, column_id) = raw;
    Ok((
        parse_object_id(board_id, ResourceContext::Board)?,
        parse_object_id(column_id, ResourceContext::Column)?,
    ))
}

/// Fail with `BOARD_DOES_NOT_EXIST` unless `board_id` is stored.
async fn require_board(state: &HttpState, board_id: &ObjectId) -> ApiResult<()> {
    let classify = state.classify_as(ResourceContext::Board);
    state
        .boards
        .find_by_id(board_id)
        .await
        .map_err(&classify)?
        .map(|_| ())
        .ok_or_else(|| classify(RepositoryError::not_exist()))
}

/// List the columns of a board.
#[utoipa::path(
    get,
    path = "/api/v1/boards/{boardId}/columns",
    params(("boardId" = String, Path, description = "Board identifier")),
    responses(
        (status = 200, description = "Columns of the board", body = [ColumnSchema]),
        (status = 400, description = "Malformed board identifier", body = ErrorEnvelope),
        (status = 404, description = "Board not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["columns"],
    operation_id = "listColumns"
)]
#[get("/boards/{boardId}/columns")]
pub async fn list_columns(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Column>>> {
    let board_id = parse_object_id(&path, ResourceContext::Board)?;
    require_board(&state, &board_id).await?;
    let columns = state
        .columns
        .find_where(&ColumnFilter::on_board(board_id))
        .await
        .map_err(state.classify_as(ResourceContext::Column))?;
    Ok(web::Json(columns))
}

/// Fetch a single column.
#[utoipa::path(
    get,
    path = "/api/v1/boards/{boardId}/columns/{columnId}",
    params(
        ("boardId" = String, Path, description = "Board identifier"),
        ("columnId" = String, Path, description = "Column identifier")
    ),
    responses(
        (status = 200, description = "Column", body = ColumnSchema),
        (status = 400, description = "Malformed identifier", body = ErrorEnvelope),
        (status = 404, description = "Column not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["columns"],
    operation_id = "getColumn"
)]
#[get("/boards/{boardId}/columns/{columnId}")]
pub async fn get_column(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<Column>> {
    let (_, column_id) = column_path(&path)?;
    let classify = state.classify_as(ResourceContext::Column);
    let column = state
        .columns
        .find_by_id(&column_id)
        .await
        .map_err(&classify)?
        .ok_or_else(|| classify(RepositoryError::not_exist()))?;
    Ok(web::Json(column))
}

/// Create a column on an existing board.
///
/// Failures from the write are labelled with the board, since the only
/// expected one is the board vanishing in the meantime.
#[utoipa::path(
    post,
    path = "/api/v1/boards/{boardId}/columns",
    request_body = ColumnFieldsSchema,
    params(
        ("boardId" = String, Path, description = "Board identifier"),
        ("Guid" = Option<String>, Header, description = "Actor or session identifier"),
        ("initUser" = Option<String>, Header, description = "Initiating user")
    ),
    responses(
        (status = 200, description = "Created column", body = ColumnSchema),
        (status = 400, description = "Invalid payload or identifier", body = ErrorEnvelope),
        (status = 404, description = "Board not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["columns"],
    operation_id = "createColumn"
)]
#[post("/boards/{boardId}/columns")]
pub async fn create_column(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    correlation: CorrelationHeaders,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<web::Json<Column>> {
    let fields = column_fields(&payload)?;
    let board_id = parse_object_id(&path, ResourceContext::Board)?;
    require_board(&state, &board_id).await?;
    let column = state
        .columns
        .create(&board_id, fields, &correlation)
        .await
        .map_err(state.classify_as(ResourceContext::Board))?;
    Ok(web::Json(column))
}

/// Replace a column's fields.
#[utoipa::path(
    put,
    path = "/api/v1/boards/{boardId}/columns/{columnId}",
    request_body = ColumnFieldsSchema,
    params(
        ("boardId" = String, Path, description = "Board identifier"),
        ("columnId" = String, Path, description = "Column identifier"),
        ("Guid" = Option<String>, Header, description = "Actor or session identifier"),
        ("initUser" = Option<String>, Header, description = "Initiating user")
    ),
    responses(
        (status = 200, description = "Updated column", body = ColumnSchema),
        (status = 400, description = "Invalid payload or identifier", body = ErrorEnvelope),
        (status = 404, description = "Column not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["columns"],
    operation_id = "updateColumn"
)]
#[put("/boards/{boardId}/columns/{columnId}")]
pub async fn update_column(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    correlation: CorrelationHeaders,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<web::Json<Column>> {
    let fields = column_fields(&payload)?;
    let (_, column_id) = column_path(&path)?;
    let column = state
        .columns
        .update(&column_id, fields, &correlation)
        .await
        .map_err(state.classify_as(ResourceContext::Column))?;
    Ok(web::Json(column))
}

/// Delete a column.
#[utoipa::path(
    delete,
    path = "/api/v1/boards/{boardId}/columns/{columnId}",
    params(
        ("boardId" = String, Path, description = "Board identifier"),
        ("columnId" = String, Path, description = "Column identifier"),
        ("Guid" = Option<String>, Header, description = "Actor or session identifier"),
        ("initUser" = Option<String>, Header, description = "Initiating user")
    ),
    responses(
        (status = 200, description = "Deleted column", body = ColumnSchema),
        (status = 400, description = "Malformed identifier", body = ErrorEnvelope),
        (status = 404, description = "Column not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["columns"],
    operation_id = "deleteColumn"
)]
#[delete("/boards/{boardId}/columns/{columnId}")]
pub async fn delete_column(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    correlation: CorrelationHeaders,
) -> ApiResult<web::Json<Column>> {
    let (_, column_id) = column_path(&path)?;
    let column = state
        .columns
        .delete_by_id(&column_id, &correlation)
        .await
        .map_err(state.classify_as(ResourceContext::Column))?;
    Ok(web::Json(column))
}
