//! State management module
//!
//! Client-side state driving the pages: filters, pagination, debounced
//! search, and remote query status.

pub mod context;
pub mod debounce;
pub mod filters;
pub mod pagination;
pub mod query;

// Re-export commonly used state components
pub use context::AppContext;
pub use debounce::SearchDebouncer;
pub use filters::{FilterState, PriceFilter, Selection};
pub use pagination::Pagination;
pub use query::QueryState;
