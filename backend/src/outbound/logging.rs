//! Structured operator log for unclassified repository failures.

use tracing::error;

use crate::domain::ports::FailureLog;
use crate::domain::{ResourceContext, TraceId};

/// [`FailureLog`] that emits one `error` event per failure.
///
/// The event carries the request's trace id when one is in scope so the
/// entry can be matched with the `trace-id` response header.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFailureLog;

impl FailureLog for TracingFailureLog {
    fn record_unclassified(&self, resource: ResourceContext, kind: &str, failure: &str) {
        let trace_id = TraceId::current().map(|id| id.to_string());
        error!(
            resource = %resource,
            kind,
            error = failure,
            trace_id = trace_id.as_deref().unwrap_or_default(),
            "unclassified repository failure"
        );
    }
}
