//! Document persistence adapters.
//!
//! Only an in-process store ships today. It keeps documents in insertion
//! order and records an audit entry for every successful write.

mod in_memory;

pub use in_memory::{AUDIT_CAPACITY, InMemoryDocumentStore};
