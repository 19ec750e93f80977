//! Driven ports for the hexagonal boundary.
//!
//! Repositories return [`RepositoryError`] so adapters report conditions as
//! typed variants rather than message strings.

mod macros;
pub(crate) use macros::define_port_error;

mod board_repository;
mod column_repository;
mod failure_log;
mod repository_error;

#[cfg(test)]
pub use board_repository::MockBoardRepository;
pub use board_repository::BoardRepository;
#[cfg(test)]
pub use column_repository::MockColumnRepository;
pub use column_repository::ColumnRepository;
#[cfg(test)]
pub use failure_log::MockFailureLog;
pub use failure_log::FailureLog;
pub use repository_error::RepositoryError;
