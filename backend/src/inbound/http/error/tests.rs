//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn envelope_of(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> ErrorEnvelope {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("envelope deserialisation succeeds")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_their_message(expected_trace_id: String) {
    let error = Error::invalid_request("bad request: title is required")
        .with_trace_id(expected_trace_id.clone());

    let envelope = envelope_of(error, StatusCode::BAD_REQUEST, Some(&expected_trace_id)).await;

    assert_eq!(
        envelope,
        ErrorEnvelope {
            status_code: 400,
            message: "bad request: title is required".to_owned(),
        }
    );
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error =
        Error::internal("connection refused by 10.0.0.7").with_trace_id(expected_trace_id.clone());

    let envelope = envelope_of(
        error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(&expected_trace_id),
    )
    .await;

    assert_eq!(envelope.status_code, 500);
    assert_eq!(envelope.message, "SERVER_ERROR");
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let envelope = envelope_of(
        Error::not_found("COLUMN_DOES_NOT_EXIST"),
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    assert_eq!(envelope.status_code, 404);
    assert_eq!(envelope.message, "COLUMN_DOES_NOT_EXIST");
}

#[test]
fn envelope_serialises_in_camel_case() {
    let value = serde_json::to_value(ErrorEnvelope {
        status_code: 404,
        message: "BOARD_DOES_NOT_EXIST".to_owned(),
    })
    .expect("serialise envelope");

    assert_eq!(
        value,
        serde_json::json!({ "statusCode": 404, "message": "BOARD_DOES_NOT_EXIST" })
    );
}
