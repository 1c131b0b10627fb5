//! Connection state derived from poll outcomes.

use gcs_telemetry::PollResult;

/// UI-facing connection status, computed solely from the most recent poll
/// outcome. Nothing here accumulates history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Last fetch succeeded with a payload
    Connected,
    /// Server reachable but nothing to show, e.g. no game in progress
    ConnectedNoData,
    /// Last fetch failed; the reason string is what the status line shows
    Disconnected(String),
}

impl ConnectionState {
    /// Derive the state from a single poll outcome.
    pub fn from_result<T>(result: &PollResult<T>) -> Self {
        match result {
            PollResult::Success(_) => ConnectionState::Connected,
            PollResult::Empty => ConnectionState::ConnectedNoData,
            PollResult::Failure(reason) => ConnectionState::Disconnected(reason.to_string()),
        }
    }

    /// True for both `Connected` and `ConnectedNoData`.
    pub fn is_connected(&self) -> bool {
        !matches!(self, ConnectionState::Disconnected(_))
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Connected => f.write_str("Connected"),
            ConnectionState::ConnectedNoData => f.write_str("Connected (No Game)"),
            ConnectionState::Disconnected(reason) => write!(f, "Disconnected: {}", reason),
        }
    }
}

/// What one poll tick delivers to the subscriber: the derived state plus the
/// decoded payload when there is one.
#[derive(Debug, Clone, PartialEq)]
pub struct PollUpdate<T> {
    pub state: ConnectionState,
    pub payload: Option<T>,
}

impl<T> From<PollResult<T>> for PollUpdate<T> {
    fn from(result: PollResult<T>) -> Self {
        let state = ConnectionState::from_result(&result);
        Self {
            state,
            payload: result.into_payload(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcs_telemetry::FailureReason;

    #[test]
    fn test_state_derivation() {
        assert_eq!(
            ConnectionState::from_result(&PollResult::Success(1u32)),
            ConnectionState::Connected
        );
        assert_eq!(
            ConnectionState::from_result::<u32>(&PollResult::Empty),
            ConnectionState::ConnectedNoData
        );
        assert_eq!(
            ConnectionState::from_result::<u32>(&PollResult::Failure(FailureReason::Status(404))),
            ConnectionState::Disconnected("HTTP 404".to_string())
        );
    }

    #[test]
    fn test_is_connected() {
        assert!(ConnectionState::Connected.is_connected());
        assert!(ConnectionState::ConnectedNoData.is_connected());
        assert!(!ConnectionState::Disconnected("HTTP 500".to_string()).is_connected());
    }

    #[test]
    fn test_update_carries_payload_only_on_success() {
        let update = PollUpdate::from(PollResult::Success(42u32));
        assert_eq!(update.state, ConnectionState::Connected);
        assert_eq!(update.payload, Some(42));

        let update: PollUpdate<u32> = PollUpdate::from(PollResult::Empty);
        assert_eq!(update.state, ConnectionState::ConnectedNoData);
        assert_eq!(update.payload, None);
    }

    #[test]
    fn test_display_matches_status_line() {
        assert_eq!(ConnectionState::Connected.to_string(), "Connected");
        assert_eq!(
            ConnectionState::ConnectedNoData.to_string(),
            "Connected (No Game)"
        );
        assert_eq!(
            ConnectionState::Disconnected("HTTP 404".to_string()).to_string(),
            "Disconnected: HTTP 404"
        );
    }
}
