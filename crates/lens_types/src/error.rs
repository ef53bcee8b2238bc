//! Error taxonomy for catalog queries.
//!
//! All failures are local and synchronous with no partial side effects.
//! Absent results (`Option`) are reserved for expected no-match outcomes
//! such as generic realization; `QueryError` marks precondition violations
//! and lookups the caller must not ignore.

use thiserror::Error;

/// Failure of a structural query over the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Malformed or precondition-violating input (non-array passed to an
    /// array-only query, bound type passed where a definition is required).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Structural lookup failure (missing backing field, missing declaring
    /// property, missing method).
    #[error("not found: {0}")]
    NotFound(String),
}
