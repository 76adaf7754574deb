//! HTTP behavior of the fetcher against a mock server

use chrono::Duration as ChronoDuration;
use javadoc_harvest::config::FetcherConfig;
use javadoc_harvest::crawler::{FetchError, Fetcher, PageCache};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn quick_config() -> FetcherConfig {
    FetcherConfig {
        rate_limit_ms: 0,
        max_retries: 2,
        retry_delay_ms: 1,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_server_error_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky.html"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(quick_config(), None).unwrap();
    let body = fetcher
        .fetch_page(&format!("{}/flaky.html", server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "recovered");
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.html"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(quick_config(), None).unwrap();
    let result = fetcher
        .fetch_page(&format!("{}/missing.html", server.uri()))
        .await;

    match result {
        Err(FetchError::Client { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected client error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_retries_are_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/down.html"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(quick_config(), None).unwrap();
    let result = fetcher
        .fetch_page(&format!("{}/down.html", server.uri()))
        .await;

    match result {
        Err(FetchError::Server { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("too late")
                .set_delay(Duration::from_millis(1500)),
        )
        .mount(&server)
        .await;

    let config = FetcherConfig {
        read_timeout_ms: 200,
        max_retries: 0,
        ..quick_config()
    };
    let fetcher = Fetcher::new(config, None).unwrap();
    let result = fetcher
        .fetch_page(&format!("{}/slow.html", server.uri()))
        .await;

    assert!(matches!(result, Err(FetchError::Timeout { .. })));
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua.html"))
        .and(header("user-agent", "HarvestTest/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let config = FetcherConfig {
        user_agent: "HarvestTest/0.1".to_string(),
        ..quick_config()
    };
    let fetcher = Fetcher::new(config, None).unwrap();
    let body = fetcher
        .fetch_page(&format!("{}/ua.html", server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_cache_serves_repeat_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cached.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("page"))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(PageCache::new(16, ChronoDuration::hours(1)));
    let fetcher = Fetcher::new(quick_config(), Some(cache.clone())).unwrap();
    let url = format!("{}/cached.html", server.uri());

    assert_eq!(fetcher.fetch_page(&url).await.unwrap(), "page");
    assert_eq!(fetcher.fetch_page(&url).await.unwrap(), "page");

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.size, 1);
}

#[tokio::test]
async fn test_optional_fetch_swallows_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(quick_config(), None).unwrap();
    assert!(fetcher
        .fetch_page_optional(&format!("{}/gone.html", server.uri()))
        .await
        .is_none());
}

#[tokio::test]
async fn test_exists_uses_head() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/present.html"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/absent.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(quick_config(), None).unwrap();
    assert!(fetcher.exists(&format!("{}/present.html", server.uri())).await);
    assert!(!fetcher.exists(&format!("{}/absent.html", server.uri())).await);
}

#[tokio::test]
async fn test_exists_is_false_when_unreachable() {
    let config = FetcherConfig {
        connect_timeout_ms: 200,
        read_timeout_ms: 200,
        ..quick_config()
    };
    let fetcher = Fetcher::new(config, None).unwrap();
    assert!(!fetcher.exists("http://127.0.0.1:9/index.html").await);
}

#[tokio::test]
async fn test_package_list_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/element-list"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/package-list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("com.legacy\n"))
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(quick_config(), None).unwrap();
    let body = fetcher
        .fetch_package_list(&format!("{}/api/", server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "com.legacy\n");
}

#[tokio::test]
async fn test_element_list_preferred() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/element-list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("module:java.base\njava.lang\n"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/package-list"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(quick_config(), None).unwrap();
    let body = fetcher
        .fetch_package_list(&format!("{}/api/", server.uri()))
        .await
        .unwrap();

    assert!(body.contains("java.lang"));
}
