//! Request payload validation shared by the resource handlers.
//!
//! Payload shape is checked against a static [`ExpectedKeys`] table per
//! operation before any field is read. At most one violation is reported:
//! an empty body first, then the first missing key in table order, then any
//! keys the table does not list (in payload order).

use std::fmt;

use serde_json::{Map, Value};

use crate::domain::{Error, ObjectId, ResourceContext};

/// Prefix applied to every payload violation surfaced to clients.
pub(crate) const BAD_REQUEST_PREFIX: &str = "bad request: ";

/// Ordered set of keys an operation requires in its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedKeys(&'static [&'static str]);

impl ExpectedKeys {
    /// Wrap a static key list. The list must not be empty.
    #[must_use]
    pub const fn new(keys: &'static [&'static str]) -> Self {
        Self(keys)
    }

    /// Keys in the order missing-key checks visit them.
    #[must_use]
    pub fn keys(&self) -> &'static [&'static str] {
        self.0
    }

    /// Whether `key` belongs to the set.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(&key)
    }
}

/// Keys accepted by board create and update.
pub const BOARD_KEYS: ExpectedKeys = ExpectedKeys::new(&["title", "description", "owner", "users"]);

/// Keys accepted by column create and update.
pub const COLUMN_KEYS: ExpectedKeys = ExpectedKeys::new(&["title", "order"]);

/// The first problem found in a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyViolation {
    /// The payload has no keys at all.
    Empty,
    /// An expected key is absent.
    MissingKey(&'static str),
    /// The payload carries keys outside the expected set.
    UnexpectedKeys(Vec<String>),
}

impl fmt::Display for BodyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("body is required"),
            Self::MissingKey(key) => write!(f, "{key} is required"),
            Self::UnexpectedKeys(keys) => {
                write!(f, "properties [ {} ] shouldn't exist", keys.join(","))
            }
        }
    }
}

/// Check `payload` against `expected`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use taskboard::inbound::http::validation::{COLUMN_KEYS, validate_body};
///
/// let payload = json!({ "title": "Todo" });
/// let violation = validate_body(payload.as_object().expect("object"), &COLUMN_KEYS);
/// assert_eq!(violation.map(|v| v.to_string()).as_deref(), Some("order is required"));
/// ```
#[must_use]
pub fn validate_body(
    payload: &Map<String, Value>,
    expected: &ExpectedKeys,
) -> Option<BodyViolation> {
    if payload.is_empty() {
        return Some(BodyViolation::Empty);
    }
    if let Some(missing) = expected
        .keys()
        .iter()
        .copied()
        .find(|key| !payload.contains_key(*key))
    {
        return Some(BodyViolation::MissingKey(missing));
    }
    if payload.len() > expected.keys().len() {
        let extra: Vec<String> = payload
            .keys()
            .filter(|key| !expected.contains(key))
            .cloned()
            .collect();
        if !extra.is_empty() {
            return Some(BodyViolation::UnexpectedKeys(extra));
        }
    }
    None
}

/// Reject `payload` with a 400 when it violates `expected`.
pub(crate) fn ensure_body_shape(
    payload: &Map<String, Value>,
    expected: &ExpectedKeys,
) -> Result<(), Error> {
    match validate_body(payload, expected) {
        Some(violation) => Err(bad_request(violation)),
        None => Ok(()),
    }
}

pub(crate) fn bad_request(detail: impl fmt::Display) -> Error {
    Error::invalid_request(format!("{BAD_REQUEST_PREFIX}{detail}"))
}

fn require<'a>(payload: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value, Error> {
    payload
        .get(key)
        .ok_or_else(|| bad_request(BodyViolation::MissingKey(key)))
}

/// Read `key` as a string.
pub(crate) fn string_field(
    payload: &Map<String, Value>,
    key: &'static str,
) -> Result<String, Error> {
    require(payload, key)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| bad_request(format!("{key} must be a string")))
}

/// Read `key` as an array whose items are all strings.
pub(crate) fn string_list_field(
    payload: &Map<String, Value>,
    key: &'static str,
) -> Result<Vec<String>, Error> {
    let invalid = || bad_request(format!("{key} must be an array of strings"));
    require(payload, key)?
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|item| item.as_str().map(str::to_owned).ok_or_else(invalid))
        .collect()
}

/// Read `key` as a signed 64-bit integer.
pub(crate) fn integer_field(payload: &Map<String, Value>, key: &'static str) -> Result<i64, Error> {
    require(payload, key)?
        .as_i64()
        .ok_or_else(|| bad_request(format!("{key} must be an integer")))
}

/// Parse a path segment as an identifier of `resource`.
///
/// Malformed input yields a 400 carrying `<RESOURCE>_ID_IS_INVALID`.
pub(crate) fn parse_object_id(raw: &str, resource: ResourceContext) -> Result<ObjectId, Error> {
    // Only the 24-hex form is accepted. The 12-byte raw string form cannot be
    // told apart from an arbitrary path segment, so it is rejected as malformed.
    ObjectId::parse(raw).map_err(|_| Error::invalid_request(resource.invalid_id_message()))
}
