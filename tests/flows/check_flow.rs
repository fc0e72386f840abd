//! Check flow: JSON blob → validated config → targeted lookup → match.

#[path = "../common/mod.rs"]
mod common;

use common::{blob, TestDomains, TestServer};
use dnsprobe_application::CheckContext;
use dnsprobe_domain::{CheckConfig, CheckError, ErrorKind, RecordType, ResolutionError};
use dnsprobe_infrastructure::{check_executor, run_check};
use std::time::Duration;
use tokio::task::JoinSet;

fn ctx() -> CheckContext {
    CheckContext::with_timeout(Duration::from_secs(5))
}

// ============================================================================
// Passing Checks
// ============================================================================

#[tokio::test]
async fn test_every_record_type_passes_with_its_value() {
    let server = TestServer::start().await.expect("Failed to start server");

    let cases = [
        ("A", TestDomains::example(), TestDomains::example_ipv4()),
        ("AAAA", TestDomains::example(), TestDomains::example_ipv6()),
        ("CNAME", TestDomains::alias(), "example.com."),
        ("MX", TestDomains::example(), TestDomains::mail_exchange()),
        ("NS", TestDomains::example(), "b.iana-servers.net."),
        ("PTR", TestDomains::example_ipv4(), "example.com."),
        ("TXT", TestDomains::example(), TestDomains::spf()),
    ];

    for (record, domain, expected) in cases {
        let result = run_check(&ctx(), &blob(server.addr(), record, domain, expected)).await;
        assert_eq!(result, Ok(()), "{} {} → {}", record, domain, expected);
    }

    assert_eq!(server.queries(), cases.len());
    server.shutdown();
}

#[tokio::test]
async fn test_cname_of_unaliased_name_is_itself() {
    let server = TestServer::start().await.expect("Failed to start server");

    let result = run_check(
        &ctx(),
        &blob(server.addr(), "CNAME", TestDomains::example(), "example.com."),
    )
    .await;

    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn test_validated_config_through_executor() {
    let server = TestServer::start().await.expect("Failed to start server");
    let config = CheckConfig::new(
        server.addr().ip().to_string(),
        server.port(),
        RecordType::A,
        TestDomains::example(),
        TestDomains::example_ipv4(),
    )
    .unwrap();

    assert_eq!(check_executor().execute(&config, &ctx()).await, Ok(()));
}

// ============================================================================
// Failing Checks
// ============================================================================

#[tokio::test]
async fn test_wrong_address_lists_observed_values() {
    let server = TestServer::start().await.expect("Failed to start server");

    let err = run_check(
        &ctx(),
        &blob(server.addr(), "A", TestDomains::example(), "10.0.0.1"),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MatchFailure);
    assert_eq!(
        err.to_string(),
        "expected output \"10.0.0.1\" not found in [93.184.216.34]"
    );
}

#[tokio::test]
async fn test_mx_without_trailing_dot_does_not_match() {
    let server = TestServer::start().await.expect("Failed to start server");

    let err = run_check(
        &ctx(),
        &blob(server.addr(), "MX", TestDomains::example(), "mail.example.com"),
    )
    .await
    .unwrap_err();

    assert_eq!(
        err,
        CheckError::MatchFailure {
            expected: "mail.example.com".to_string(),
            actual: vec![
                "mail.example.com.".to_string(),
                "backup.example.com.".to_string()
            ],
        }
    );
}

#[tokio::test]
async fn test_ipv6_expanded_form_does_not_match() {
    let server = TestServer::start().await.expect("Failed to start server");

    let err = run_check(
        &ctx(),
        &blob(
            server.addr(),
            "AAAA",
            TestDomains::example(),
            "2606:2800:0220:0001:0248:1893:25c8:1946",
        ),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MatchFailure);
}

#[tokio::test]
async fn test_nonexistent_domain_is_resolution_failure() {
    let server = TestServer::start().await.expect("Failed to start server");

    let err = run_check(
        &ctx(),
        &blob(server.addr(), "A", TestDomains::nonexistent(), "1.2.3.4"),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        CheckError::Resolution(ResolutionError::NxDomain { .. })
    ));
}

#[tokio::test]
async fn test_missing_type_is_resolution_failure() {
    let server = TestServer::start().await.expect("Failed to start server");

    let err = run_check(
        &ctx(),
        &blob(server.addr(), "TXT", "mail.example.com", "anything"),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        CheckError::Resolution(ResolutionError::NoRecords { .. })
    ));
}

#[tokio::test]
async fn test_cname_of_name_without_records_fails() {
    let server = TestServer::start().await.expect("Failed to start server");

    let err = run_check(
        &ctx(),
        &blob(server.addr(), "CNAME", "mail.example.com", "mail.example.com."),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        CheckError::Resolution(ResolutionError::NoRecords { .. })
    ));
}

#[tokio::test]
async fn test_cname_of_nonexistent_domain_fails() {
    let server = TestServer::start().await.expect("Failed to start server");

    let err = run_check(
        &ctx(),
        &blob(
            server.addr(),
            "CNAME",
            TestDomains::nonexistent(),
            "nonexistent.invalid.",
        ),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        CheckError::Resolution(ResolutionError::NxDomain { .. })
    ));
}

#[tokio::test]
async fn test_alias_is_followed_for_other_types() {
    let server = TestServer::start().await.expect("Failed to start server");

    let result = run_check(
        &ctx(),
        &blob(server.addr(), "A", TestDomains::alias(), TestDomains::example_ipv4()),
    )
    .await;

    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn test_invalid_config_never_queries() {
    let server = TestServer::start().await.expect("Failed to start server");

    for config in [
        blob(server.addr(), "SRV", TestDomains::example(), "x"),
        blob(server.addr(), "A", "", "x"),
        blob(server.addr(), "A", TestDomains::example(), ""),
        r#"{"server":"127.0.0.1","port":0,"domain":"example.com","expected_output":"x"}"#
            .to_string(),
        r#"{"server":"127.0.0.1","port":65536,"domain":"example.com","expected_output":"x"}"#
            .to_string(),
    ] {
        let err = run_check(&ctx(), &config).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config, "{}", config);
    }

    assert_eq!(server.queries(), 0);
}

// ============================================================================
// Repetition and Concurrency
// ============================================================================

#[tokio::test]
async fn test_repeated_checks_agree() {
    let server = TestServer::start().await.expect("Failed to start server");
    let config = blob(server.addr(), "A", TestDomains::example(), "10.0.0.1");

    let first = run_check(&ctx(), &config).await;
    let second = run_check(&ctx(), &config).await;

    assert!(first.is_err());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_checks_are_independent() {
    let server = TestServer::start().await.expect("Failed to start server");
    let addr = server.addr();

    let mut set = JoinSet::new();
    for i in 0..16 {
        let expected = if i % 2 == 0 {
            TestDomains::example_ipv4()
        } else {
            "10.0.0.1"
        };
        let config = blob(addr, "A", TestDomains::example(), expected);
        set.spawn(async move { (i, run_check(&ctx(), &config).await) });
    }

    while let Some(joined) = set.join_next().await {
        let (i, result) = joined.unwrap();
        if i % 2 == 0 {
            assert_eq!(result, Ok(()));
        } else {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::MatchFailure);
        }
    }

    assert_eq!(server.queries(), 16);
}
