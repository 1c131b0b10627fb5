//! Error type for the facade surface.

use thiserror::Error;

/// Errors surfaced by the SDK facade.
///
/// Deliberately small: fetch outcomes are not errors (they arrive as
/// `PollResult` variants) and endpoint resolution never fails. What remains
/// is the explicit endpoint-store surface.
#[derive(Debug, Error)]
pub enum GcsError {
    /// Persisting the endpoint to the local store failed
    #[error(transparent)]
    Endpoint(#[from] gcs_endpoint::EndpointError),
}
