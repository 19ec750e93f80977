//! Board API handlers.
//!
//! ```text
//! GET    /api/v1/boards
//! GET    /api/v1/boards/{boardId}
//! POST   /api/v1/boards     {"title":"Roadmap","description":"Q3","owner":"ada","users":["ada"]}
//! PUT    /api/v1/boards/{boardId}
//! DELETE /api/v1/boards/{boardId}
//! ```

use actix_web::{delete, get, post, put, web};
use serde_json::{Map, Value};

use crate::domain::ports::RepositoryError;
use crate::domain::{Board, BoardFields, ResourceContext};
use crate::inbound::http::ApiResult;
use crate::inbound::http::correlation::CorrelationHeaders;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{BoardFieldsSchema, BoardSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    BOARD_KEYS, ensure_body_shape, parse_object_id, string_field, string_list_field,
};

const RESOURCE: ResourceContext = ResourceContext::Board;

/// Shape-check then type-check a board write payload.
fn board_fields(payload: &Map<String, Value>) -> ApiResult<BoardFields> {
    ensure_body_shape(payload, &BOARD_KEYS)?;
    Ok(BoardFields {
        title: string_field(payload, "title")?,
        description: string_field(payload, "description")?,
        owner: string_field(payload, "owner")?,
        users: string_list_field(payload, "users")?,
    })
}

/// List every board.
#[utoipa::path(
    get,
    path = "/api/v1/boards",
    responses(
        (status = 200, description = "Boards", body = [BoardSchema]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["boards"],
    operation_id = "listBoards"
)]
#[get("/boards")]
pub async fn list_boards(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Board>>> {
    let boards = state
        .boards
        .find_all()
        .await
        .map_err(state.classify_as(RESOURCE))?;
    Ok(web::Json(boards))
}

/// Fetch a single board.
#[utoipa::path(
    get,
    path = "/api/v1/boards/{boardId}",
    params(("boardId" = String, Path, description = "Board identifier")),
    responses(
        (status = 200, description = "Board", body = BoardSchema),
        (status = 400, description = "Malformed identifier", body = ErrorEnvelope),
        (status = 404, description = "Board not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["boards"],
    operation_id = "getBoard"
)]
#[get("/boards/{boardId}")]
pub async fn get_board(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Board>> {
    let id = parse_object_id(&path, RESOURCE)?;
    let classify = state.classify_as(RESOURCE);
    let board = state
        .boards
        .find_by_id(&id)
        .await
        .map_err(&classify)?
        .ok_or_else(|| classify(RepositoryError::not_exist()))?;
    Ok(web::Json(board))
}

/// Create a board.
///
/// The `Guid` and `initUser` headers are recorded with the write and default
/// to `"undefined"`.
#[utoipa::path(
    post,
    path = "/api/v1/boards",
    request_body = BoardFieldsSchema,
    params(
        ("Guid" = Option<String>, Header, description = "Actor or session identifier"),
        ("initUser" = Option<String>, Header, description = "Initiating user")
    ),
    responses(
        (status = 200, description = "Created board", body = BoardSchema),
        (status = 400, description = "Invalid payload", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["boards"],
    operation_id = "createBoard"
)]
#[post("/boards")]
pub async fn create_board(
    state: web::Data<HttpState>,
    correlation: CorrelationHeaders,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<web::Json<Board>> {
    let fields = board_fields(&payload)?;
    let board = state
        .boards
        .create(fields, &correlation)
        .await
        .map_err(state.classify_as(RESOURCE))?;
    Ok(web::Json(board))
}

/// Replace a board's fields.
#[utoipa::path(
    put,
    path = "/api/v1/boards/{boardId}",
    request_body = BoardFieldsSchema,
    params(
        ("boardId" = String, Path, description = "Board identifier"),
        ("Guid" = Option<String>, Header, description = "Actor or session identifier"),
        ("initUser" = Option<String>, Header, description = "Initiating user")
    ),
    responses(
        (status = 200, description = "Updated board", body = BoardSchema),
        (status = 400, description = "Invalid payload or identifier", body = ErrorEnvelope),
        (status = 404, description = "Board not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["boards"],
    operation_id = "updateBoard"
)]
#[put("/boards/{boardId}")]
pub async fn update_board(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    correlation: CorrelationHeaders,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<web::Json<Board>> {
    let fields = board_fields(&payload)?;
    let id = parse_object_id(&path, RESOURCE)?;
    let board = state
        .boards
        .update(&id, fields, &correlation)
        .await
        .map_err(state.classify_as(RESOURCE))?;
    Ok(web::Json(board))
}

/// Delete a board together with its columns.
#[utoipa::path(
    delete,
    path = "/api/v1/boards/{boardId}",
    params(
        ("boardId" = String, Path, description = "Board identifier"),
        ("Guid" = Option<String>, Header, description = "Actor or session identifier"),
        ("initUser" = Option<String>, Header, description = "Initiating user")
    ),
    responses(
        (status = 200, description = "Deleted board", body = BoardSchema),
        (status = 400, description = "Malformed identifier", body = ErrorEnvelope),
        (status = 404, description = "Board not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["boards"],
    operation_id = "deleteBoard"
)]
#[delete("/boards/{boardId}")]
pub async fn delete_board(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    correlation: CorrelationHeaders,
) -> ApiResult<web::Json<Board>> {
    let id = parse_object_id(&path, RESOURCE)?;
    let board = state
        .boards
        .delete_by_id(&id, &correlation)
        .await
        .map_err(state.classify_as(RESOURCE))?;
    Ok(web::Json(board))
}
