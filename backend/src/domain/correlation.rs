//! Correlation identifiers threaded through every write, and the audit
//! entries stores record from them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{ObjectId, ResourceContext};

/// Value recorded when a correlation header is not supplied.
///
/// Downstream audit tooling matches on this literal, so an absent header is
/// deliberately not represented as `None`.
pub const UNDEFINED_CORRELATION: &str = "undefined";

/// The actor/session identifier (`Guid`) and initiating user (`initUser`)
/// attached to a write request.
///
/// # Examples
/// ```
/// use taskboard::domain::Correlation;
///
/// let correlation = Correlation::from_headers(Some("abc"), None);
/// assert_eq!(correlation.guid(), "abc");
/// assert_eq!(correlation.init_user(), "undefined");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Correlation {
    guid: String,
    init_user: String,
}

impl Correlation {
    /// Build from raw header values.
    ///
    /// Missing and empty values both fall back to
    /// [`UNDEFINED_CORRELATION`].
    #[must_use]
    pub fn from_headers(guid: Option<&str>, init_user: Option<&str>) -> Self {
        Self {
            guid: or_undefined(guid),
            init_user: or_undefined(init_user),
        }
    }

    /// Actor/session identifier.
    #[must_use]
    pub fn guid(&self) -> &str {
        &self.guid
    }

    /// Initiating user identifier.
    #[must_use]
    pub fn init_user(&self) -> &str {
        &self.init_user
    }
}

impl Default for Correlation {
    fn default() -> Self {
        Self::from_headers(None, None)
    }
}

fn or_undefined(value: Option<&str>) -> String {
    value
        .filter(|raw| !raw.is_empty())
        .unwrap_or(UNDEFINED_CORRELATION)
        .to_owned()
}

/// Kind of write captured in an [`AuditEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// Record of a successful write, keyed by its correlation pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub action: AuditAction,
    pub resource: ResourceContext,
    pub id: ObjectId,
    pub correlation: Correlation,
    pub at: DateTime<Utc>,
}
