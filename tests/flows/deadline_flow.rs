//! Deadline and cancellation flow.

#[path = "../common/mod.rs"]
mod common;

use common::{blob, TestDomains, TestServer, TestServerBuilder};
use dnsprobe_application::CheckContext;
use dnsprobe_domain::{CheckError, ErrorKind, ResolutionError};
use dnsprobe_infrastructure::run_check;
use std::time::Duration;

#[tokio::test]
async fn test_no_deadline_fails_before_any_query() {
    let server = TestServer::start().await.expect("Failed to start server");
    let config = blob(
        server.addr(),
        "A",
        TestDomains::example(),
        TestDomains::example_ipv4(),
    );

    let err = run_check(&CheckContext::background(), &config)
        .await
        .unwrap_err();

    assert_eq!(err, CheckError::DeadlineNotSet);
    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(err.to_string(), "deadline not set");

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(server.queries(), 0);
}

#[tokio::test]
async fn test_slow_server_within_deadline_passes() {
    let server = TestServerBuilder::new()
        .with_response_delay(Duration::from_millis(100))
        .build()
        .await
        .expect("Failed to start server");

    let ctx = CheckContext::with_timeout(Duration::from_secs(5));
    let config = blob(
        server.addr(),
        "A",
        TestDomains::example(),
        TestDomains::example_ipv4(),
    );

    assert_eq!(run_check(&ctx, &config).await, Ok(()));
}

#[tokio::test]
async fn test_slow_server_past_deadline_times_out() {
    let server = TestServerBuilder::new()
        .with_response_delay(Duration::from_secs(2))
        .build()
        .await
        .expect("Failed to start server");

    let ctx = CheckContext::with_timeout(Duration::from_millis(200));
    let config = blob(
        server.addr(),
        "A",
        TestDomains::example(),
        TestDomains::example_ipv4(),
    );

    let started = std::time::Instant::now();
    let err = run_check(&ctx, &config).await.unwrap_err();

    assert!(err.is_timeout(), "{:?}", err);
    assert_eq!(err.kind(), ErrorKind::Resolution);
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_check() {
    let server = TestServerBuilder::new()
        .with_response_delay(Duration::from_secs(2))
        .build()
        .await
        .expect("Failed to start server");

    let ctx = CheckContext::with_timeout(Duration::from_secs(30));
    let token = ctx.cancellation_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let config = blob(
        server.addr(),
        "A",
        TestDomains::example(),
        TestDomains::example_ipv4(),
    );

    let err = run_check(&ctx, &config).await.unwrap_err();
    assert_eq!(err, CheckError::Resolution(ResolutionError::Cancelled));
}
