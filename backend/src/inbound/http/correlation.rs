//! Extractor for the correlation headers attached to write requests.

use std::ops::Deref;

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::Correlation;

/// Actor/session identifier header.
pub const GUID_HEADER: &str = "Guid";

/// Initiating-user header.
pub const INIT_USER_HEADER: &str = "initUser";

/// [`Correlation`] read from the `Guid` and `initUser` headers.
///
/// Extraction never fails: absent, empty or non-UTF-8 values all become the
/// literal `"undefined"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationHeaders(Correlation);

impl CorrelationHeaders {
    fn read(req: &HttpRequest) -> Self {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
        };
        Self(Correlation::from_headers(
            header(GUID_HEADER),
            header(INIT_USER_HEADER),
        ))
    }
}

impl Deref for CorrelationHeaders {
    type Target = Correlation;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for CorrelationHeaders {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::read(req)))
    }
}
