//! What the CLI commands hand back to `main` on failure.

mod common;

use barback::cache::{ManualClock, MemoryStore};
use barback::cli::{cmd_random, cmd_search, cmd_show};
use barback::services::LookupService;
use common::{FakeApi, gin_api};
use std::sync::Arc;
use std::time::Duration;

fn service(api: FakeApi) -> LookupService {
    LookupService::new(
        Arc::new(api),
        Arc::new(MemoryStore::new()),
        Arc::new(ManualClock::new(0)),
        Duration::from_secs(600),
    )
}

fn assert_generic_failure(err: &anyhow::Error) {
    assert_eq!(err.to_string(), "Something went wrong, try again.");
    assert_eq!(err.chain().count(), 1);

    let printed = format!("Error: {err:?}");
    assert!(!printed.contains("Caused by"), "{printed}");
    assert!(!printed.contains("upstream exploded"), "{printed}");
}

#[tokio::test]
async fn test_search_failure_hides_upstream_cause() {
    let mut api = gin_api();
    api.failing.insert("name");

    let err = cmd_search(&service(api), "gin", false).await.unwrap_err();

    assert_generic_failure(&err);
}

#[tokio::test]
async fn test_show_failure_hides_upstream_cause() {
    let mut api = FakeApi::default();
    api.failing.insert("lookup");

    let err = cmd_show(&service(api), "11003").await.unwrap_err();

    assert_generic_failure(&err);
}

#[tokio::test]
async fn test_random_failure_hides_upstream_cause() {
    let mut api = FakeApi::default();
    api.failing.insert("random");

    let err = cmd_random(&service(api)).await.unwrap_err();

    assert_generic_failure(&err);
}

#[tokio::test]
async fn test_user_errors_are_not_failures() {
    let svc = service(FakeApi::default());

    assert!(cmd_search(&svc, "   ", false).await.is_ok());
    assert!(cmd_show(&svc, "42").await.is_ok());
    assert!(cmd_random(&svc).await.is_ok());
}
