//! Integration tests for the telemetry client against a mock server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mockito::Matcher;
use rstest::rstest;

use gcs_endpoint::{EndpointResolver, ResolverConfig};
use gcs_telemetry::{
    Credentials, FailureReason, GameState, PollResult, Query, StatsMap, TelemetryClient,
    TelemetryConfig,
};

fn client_for(base_url: &str, config: TelemetryConfig) -> TelemetryClient {
    let resolver = Arc::new(EndpointResolver::new(
        ResolverConfig::new()
            .without_store()
            .with_default_url(base_url),
    ));
    TelemetryClient::new(resolver, config)
}

#[tokio::test]
async fn success_decodes_typed_payload() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/game-state")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"is_running": true, "minerals": 100, "vespene": 50,
                "supplyUsed": 30, "supplyCap": 44,
                "units": {"Zergling": 12}, "winRate": 0.5}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server.url(), TelemetryConfig::default());
    match client.game_state().await {
        PollResult::Success(state) => {
            assert_eq!(state.minerals, 100);
            assert_eq!(state.vespene, 50);
            assert!(state.is_running);
        }
        other => panic!("expected Success, got {:?}", other),
    }
}

#[tokio::test]
async fn non_2xx_status_is_a_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/game-state")
        .with_status(404)
        .create_async()
        .await;

    let client = client_for(&server.url(), TelemetryConfig::default());
    let result: PollResult<GameState> = client.fetch(Query::GameState).await;
    assert_eq!(result, PollResult::Failure(FailureReason::Status(404)));
}

#[tokio::test]
async fn empty_body_is_empty_not_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/game-state")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = client_for(&server.url(), TelemetryConfig::default());
    let result: PollResult<GameState> = client.fetch(Query::GameState).await;
    assert_eq!(result, PollResult::Empty);
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/game-state")
        .with_status(200)
        .with_body("{not json")
        .create_async()
        .await;

    let client = client_for(&server.url(), TelemetryConfig::default());
    let result: PollResult<GameState> = client.fetch(Query::GameState).await;
    assert!(matches!(
        result,
        PollResult::Failure(FailureReason::Decode(_))
    ));
}

#[tokio::test]
async fn credentials_inject_basic_auth_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/combat-stats")
        .match_header("authorization", Matcher::Regex("^Basic .+".to_string()))
        .with_status(200)
        .with_body(r#"{"kills": 3}"#)
        .create_async()
        .await;

    let config = TelemetryConfig::new().with_credentials(Credentials::new("gcs", "hunter2"));
    let client = client_for(&server.url(), config);

    let result = client.combat_stats().await;
    assert!(result.is_success());
    mock.assert_async().await;
}

#[tokio::test]
async fn no_credentials_means_no_auth_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/combat-stats")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"kills": 3}"#)
        .create_async()
        .await;

    let client = client_for(&server.url(), TelemetryConfig::default());
    let result = client.combat_stats().await;
    assert!(result.is_success());
    mock.assert_async().await;
}

#[tokio::test]
async fn http_errors_are_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/game-state")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let config = TelemetryConfig::new().with_retry_attempts(3);
    let client = client_for(&server.url(), config);

    let result: PollResult<GameState> = client.fetch(Query::GameState).await;
    assert_eq!(result, PollResult::Failure(FailureReason::Status(500)));
    mock.assert_async().await;
}

#[tokio::test]
async fn connection_failures_are_retried_up_to_the_configured_attempts() {
    // A listener that accepts and immediately drops the socket: every
    // request dies at the transport level, and each death is one observed
    // connection attempt.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    tokio::spawn(async move {
        loop {
            if let Ok((socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                drop(socket);
            }
        }
    });

    let config = TelemetryConfig::new()
        .with_timeouts(Duration::from_millis(500), Duration::from_millis(800))
        .with_retry_attempts(2);
    let client = client_for(&format!("http://{}", addr), config);

    let result: PollResult<GameState> = client.fetch(Query::GameState).await;
    assert!(matches!(
        result,
        PollResult::Failure(FailureReason::Transport(_))
    ));

    // Initial attempt plus the two configured retries.
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    // Nothing listens on this port; the connect fails fast and is retried
    // before surfacing as a transport failure.
    let config = TelemetryConfig::new()
        .with_timeouts(Duration::from_millis(500), Duration::from_millis(800))
        .with_retry_attempts(1);
    let client = client_for("http://127.0.0.1:9", config);

    let result: PollResult<GameState> = client.fetch(Query::GameState).await;
    assert!(matches!(
        result,
        PollResult::Failure(FailureReason::Transport(_))
    ));
}

#[rstest]
#[case(Query::CombatStats, "/api/combat-stats")]
#[case(Query::LearningProgress, "/api/learning-progress")]
#[tokio::test]
async fn free_form_stats_decode_as_maps(#[case] query: Query, #[case] path: &str) {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", path)
        .with_status(200)
        .with_body(r#"{"episodes": 12, "avg_reward": 1.5}"#)
        .create_async()
        .await;

    let client = client_for(&server.url(), TelemetryConfig::default());
    let result: PollResult<StatsMap> = client.fetch(query).await;
    let stats = result.into_payload().expect("expected a payload");
    assert_eq!(stats["episodes"], serde_json::json!(12));
}
