//! Driven port receiving failures the classifier could not recognise.

use crate::domain::ResourceContext;

/// Operator-facing sink for unclassified repository failures.
///
/// Implementations must not fail; the classifier calls this exactly once per
/// unrecognised failure and never inspects the outcome.
#[cfg_attr(test, mockall::automock)]
pub trait FailureLog: Send + Sync {
    /// Record `failure`, which occurred while handling `resource`.
    fn record_unclassified(&self, resource: ResourceContext, kind: &str, failure: &str);
}
