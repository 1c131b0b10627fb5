//! Tagged outcome of a single fetch attempt.

use thiserror::Error;

/// Outcome of one telemetry fetch. Exactly one variant per attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum PollResult<T> {
    /// HTTP success with a decoded payload
    Success(T),
    /// HTTP success with no usable body, e.g. no game in progress
    Empty,
    /// The fetch failed; the reason is what the UI shows as the disconnect
    /// cause
    Failure(FailureReason),
}

impl<T> PollResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, PollResult::Success(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PollResult::Empty)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PollResult::Failure(_))
    }

    /// Borrow the payload, if this is a success.
    pub fn payload(&self) -> Option<&T> {
        match self {
            PollResult::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// Consume the result, yielding the payload if present.
    pub fn into_payload(self) -> Option<T> {
        match self {
            PollResult::Success(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Why a fetch attempt failed.
///
/// Transport failures have already been retried by the client; status and
/// decode failures are terminal for the attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// Connection failure or timeout
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status from the server
    #[error("HTTP {0}")]
    Status(u16),

    /// 2xx response whose body did not match the expected shape
    #[error("malformed payload: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_predicates() {
        let success: PollResult<u32> = PollResult::Success(7);
        assert!(success.is_success());
        assert_eq!(success.payload(), Some(&7));

        let empty: PollResult<u32> = PollResult::Empty;
        assert!(empty.is_empty());
        assert_eq!(empty.payload(), None);

        let failure: PollResult<u32> = PollResult::Failure(FailureReason::Status(404));
        assert!(failure.is_failure());
        assert_eq!(failure.into_payload(), None);
    }

    #[test]
    fn test_failure_reason_display() {
        assert_eq!(FailureReason::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            FailureReason::Transport("connection refused".to_string()).to_string(),
            "transport error: connection refused"
        );
        assert!(FailureReason::Decode("expected value".to_string())
            .to_string()
            .starts_with("malformed payload"));
    }
}
