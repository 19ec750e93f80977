//! HTTP inbound adapter exposing the board and column REST endpoints.

pub mod boards;
pub mod columns;
pub mod correlation;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};

use crate::domain::Error;

pub use error::ApiResult;

use self::validation::{BodyViolation, bad_request};

/// Register every resource route on `cfg`. Mount under `/api/v1`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(boards::list_boards)
        .service(boards::get_board)
        .service(boards::create_board)
        .service(boards::update_board)
        .service(boards::delete_board)
        .service(columns::list_columns)
        .service(columns::get_column)
        .service(columns::create_column)
        .service(columns::update_column)
        .service(columns::delete_column);
}

/// JSON extractor configuration rendering payload failures as envelopes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| json_error(&err).into())
}

fn json_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::ContentType => bad_request(BodyViolation::Empty),
        // Input ran out before any complete value: empty or whitespace-only.
        JsonPayloadError::Deserialize(inner) if inner.is_eof() => bad_request(BodyViolation::Empty),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            bad_request("body is too large")
        }
        _ => bad_request("body must be a JSON object"),
    }
}

/// Fallback for requests that match no route.
pub async fn route_not_found() -> ApiResult<web::Json<()>> {
    Err(Error::not_found("ROUTE_DOES_NOT_EXIST"))
}
