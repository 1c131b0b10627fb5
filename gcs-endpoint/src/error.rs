//! Error types for endpoint resolution.
//!
//! Resolution itself is infallible by design (tier failures fall through the
//! cascade); errors here cover only the explicit store operations.

use thiserror::Error;

/// Errors that can occur while persisting an endpoint value
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The local-cache tier is disabled in the resolver configuration
    #[error("no local store configured")]
    StoreDisabled,

    /// Reading or writing the persisted value failed
    #[error("endpoint store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for endpoint store operations.
pub type Result<T> = std::result::Result<T, EndpointError>;
