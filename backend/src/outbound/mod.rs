//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: the in-memory document store backing both repositories
//! - **logging**: the `tracing`-backed [`crate::domain::ports::FailureLog`]
//!
//! Adapters translate between domain types and their backing representation;
//! they hold no request-handling logic.

pub mod logging;
pub mod persistence;
