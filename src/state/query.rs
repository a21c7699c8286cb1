//! Remote query state as seen by a page

use crate::utils::errors::AdtoError;
use crate::utils::logging;

/// Loading, failed, or ready data for one remote resource
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> QueryState<T> {
    /// Fold a fetch result into page state, logging the failure
    pub fn from_result(resource: &str, result: Result<T, AdtoError>) -> Self {
        match result {
            Ok(data) => QueryState::Ready(data),
            Err(e) => {
                logging::log_api_error(resource, &e.to_string(), None);
                QueryState::Failed(e.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }
}
