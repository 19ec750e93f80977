//! Domain primitives, documents, and ports.
//!
//! Purpose: define the transport-agnostic types shared by the HTTP adapters
//! and the persistence adapters. Nothing in here knows about Actix or any
//! particular store.
//!
//! Public surface:
//! - Error / ErrorCode — classified failure returned to inbound adapters.
//! - ErrorClassifier — maps persistence conditions onto resource messages.
//! - Board, Column — the two managed documents and their write payloads.
//! - ObjectId — 12-byte document identifier.
//! - Correlation — the `Guid` / `initUser` pair threaded through writes.
//! - ResourceContext — which resource an error message refers to.

pub mod board;
pub mod classifier;
pub mod column;
pub mod correlation;
pub mod error;
pub mod object_id;
pub mod ports;
pub mod resource;
pub mod trace_id;

pub use self::board::{Board, BoardFields};
pub use self::classifier::{ConditionTag, ErrorClassifier, SERVER_ERROR_MESSAGE};
pub use self::column::{Column, ColumnFields, ColumnFilter};
pub use self::correlation::{AuditAction, AuditEntry, Correlation, UNDEFINED_CORRELATION};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::object_id::{OBJECT_ID_HEX_LEN, ObjectId, ObjectIdError};
pub use self::resource::ResourceContext;
pub use self::trace_id::TraceId;

/// Convenient result alias for domain operations surfaced to adapters.
///
/// # Examples
/// ```
/// use taskboard::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<u8> {
///     Err(Error::not_found("BOARD_DOES_NOT_EXIST"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
