//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};

use crate::domain::ErrorClassifier;
use crate::domain::ports::{MockBoardRepository, MockColumnRepository, MockFailureLog};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{configure_api, json_config};

/// Well-formed board identifier used across handler tests.
pub const BOARD_ID: &str = "65a1f0c2e4b0a1b2c3d4e5f6";
/// Well-formed column identifier used across handler tests.
pub const COLUMN_ID: &str = "65a1f0c2e4b0a1b2c3d4e5f7";

/// Mocked ports for one test. The failure log rejects every call unless a
/// test replaces it.
pub struct MockPorts {
    pub boards: MockBoardRepository,
    pub columns: MockColumnRepository,
    pub failures: MockFailureLog,
}

impl Default for MockPorts {
    fn default() -> Self {
        let mut failures = MockFailureLog::new();
        failures.expect_record_unclassified().never();
        Self {
            boards: MockBoardRepository::new(),
            columns: MockColumnRepository::new(),
            failures,
        }
    }
}

impl MockPorts {
    /// Expect exactly one unclassified failure to be logged.
    pub fn expect_one_logged_failure(&mut self) {
        let mut failures = MockFailureLog::new();
        failures
            .expect_record_unclassified()
            .times(1)
            .return_const(());
        self.failures = failures;
    }

    /// Bundle the mocks into handler state.
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(self.boards),
            Arc::new(self.columns),
            ErrorClassifier::new(Arc::new(self.failures)),
        ))
    }
}

/// Application exposing the resource routes under `/api/v1`.
pub fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(json_config())
        .service(web::scope("/api/v1").configure(configure_api))
}

/// Decode an error envelope, checking the status line matches its body.
pub async fn read_envelope(response: ServiceResponse) -> ErrorEnvelope {
    let status = response.status().as_u16();
    let envelope: ErrorEnvelope = actix_test::read_body_json(response).await;
    assert_eq!(envelope.status_code, status, "envelope mirrors the status line");
    envelope
}
