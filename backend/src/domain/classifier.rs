//! Classification of repository failures into client-facing errors.
//!
//! The mapping is closed: a malformed identifier is a 400, a missing
//! document is a 404 and everything else is a 500 whose detail stays in the
//! operator log.

use std::fmt;
use std::sync::Arc;

use crate::domain::ports::{FailureLog, RepositoryError};
use crate::domain::{Error, ResourceContext};

/// Message returned for every failure the classifier does not recognise.
pub const SERVER_ERROR_MESSAGE: &str = "SERVER_ERROR";

/// Semantic condition carried by a repository failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionTag {
    InvalidId,
    NotExist,
    Unrecognized,
}

impl ConditionTag {
    /// Canonical code string, or `None` for [`ConditionTag::Unrecognized`].
    #[must_use]
    pub const fn code(self) -> Option<&'static str> {
        match self {
            Self::InvalidId => Some("INVALID_ID"),
            Self::NotExist => Some("NOT_EXIST"),
            Self::Unrecognized => None,
        }
    }

    /// Map a code string onto a tag. Matching is exact.
    ///
    /// # Examples
    /// ```
    /// use taskboard::domain::ConditionTag;
    ///
    /// assert_eq!(ConditionTag::from_code("INVALID_ID"), ConditionTag::InvalidId);
    /// assert_eq!(ConditionTag::from_code("invalid_id"), ConditionTag::Unrecognized);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "INVALID_ID" => Self::InvalidId,
            "NOT_EXIST" => Self::NotExist,
            _ => Self::Unrecognized,
        }
    }
}

/// Turns repository failures into [`Error`] values for a resource.
#[derive(Clone)]
pub struct ErrorClassifier {
    failures: Arc<dyn FailureLog>,
}

impl ErrorClassifier {
    /// Build a classifier that reports unrecognised failures to `failures`.
    pub fn new(failures: Arc<dyn FailureLog>) -> Self {
        Self { failures }
    }

    /// Classify a repository failure raised while handling `resource`.
    pub fn classify(&self, error: &RepositoryError, resource: ResourceContext) -> Error {
        match error.tag() {
            ConditionTag::Unrecognized => {
                self.failures
                    .record_unclassified(resource, error.kind(), &error.to_string());
                Error::internal(SERVER_ERROR_MESSAGE)
            }
            tag => Self::known(tag, resource),
        }
    }

    /// Classify a bare condition tag; `failure` describes it for the log.
    pub fn classify_tag(
        &self,
        tag: ConditionTag,
        resource: ResourceContext,
        failure: &dyn fmt::Display,
    ) -> Error {
        match tag {
            ConditionTag::Unrecognized => {
                self.failures
                    .record_unclassified(resource, "unrecognized", &failure.to_string());
                Error::internal(SERVER_ERROR_MESSAGE)
            }
            tag => Self::known(tag, resource),
        }
    }

    fn known(tag: ConditionTag, resource: ResourceContext) -> Error {
        match tag {
            ConditionTag::InvalidId => Error::invalid_request(resource.invalid_id_message()),
            ConditionTag::NotExist => Error::not_found(resource.does_not_exist_message()),
            ConditionTag::Unrecognized => Error::internal(SERVER_ERROR_MESSAGE),
        }
    }
}

impl fmt::Debug for ErrorClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorClassifier").finish_non_exhaustive()
    }
}
