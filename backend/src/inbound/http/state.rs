//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BoardRepository, ColumnRepository, RepositoryError};
use crate::domain::{Error, ErrorClassifier, ResourceContext};

/// Dependency bundle for the resource handlers.
#[derive(Clone)]
pub struct HttpState {
    pub boards: Arc<dyn BoardRepository>,
    pub columns: Arc<dyn ColumnRepository>,
    pub classifier: ErrorClassifier,
}

impl HttpState {
    /// Bundle the repositories with the classifier used to shape failures.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use taskboard::domain::ErrorClassifier;
    /// use taskboard::inbound::http::state::HttpState;
    /// use taskboard::outbound::logging::TracingFailureLog;
    /// use taskboard::outbound::persistence::InMemoryDocumentStore;
    ///
    /// let store = Arc::new(InMemoryDocumentStore::new());
    /// let classifier = ErrorClassifier::new(Arc::new(TracingFailureLog));
    /// let state = HttpState::new(store.clone(), store, classifier);
    /// let _boards = state.boards.clone();
    /// ```
    pub fn new(
        boards: Arc<dyn BoardRepository>,
        columns: Arc<dyn ColumnRepository>,
        classifier: ErrorClassifier,
    ) -> Self {
        Self {
            boards,
            columns,
            classifier,
        }
    }

    /// Mapping from repository failures to `resource`-labelled errors, for
    /// use with `map_err`.
    pub fn classify_as(&self, resource: ResourceContext) -> impl Fn(RepositoryError) -> Error + '_ {
        move |error| self.classifier.classify(&error, resource)
    }
}
