//! HTTP adapter mapping for domain errors.
//!
//! Every failure leaves the service as the same JSON envelope,
//! `{"statusCode": <status>, "message": <text>}`, with the status mirrored on
//! the response line. Internal failures never expose their detail.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, SERVER_ERROR_MESSAGE, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire shape of every error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// HTTP status code, repeated from the response line.
    #[schema(example = 400)]
    pub status_code: u16,
    /// Human-readable failure description.
    #[schema(example = "BOARD_ID_IS_INVALID")]
    pub message: String,
}

impl ErrorEnvelope {
    fn for_error(error: &Error) -> Self {
        let message = if matches!(error.code(), ErrorCode::InternalError) {
            SERVER_ERROR_MESSAGE.to_owned()
        } else {
            error.message().to_owned()
        };
        Self {
            status_code: status_for(error.code()).as_u16(),
            message,
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(ErrorEnvelope::for_error(self))
    }
}

#[cfg(test)]
mod tests;
