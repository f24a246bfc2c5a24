//! `/metrics` behaviour over real HTTP.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use base64::{engine::general_purpose::STANDARD, Engine};
use common::{TestApp, PASSWORD, USER};
use scrapetarget_server::services::metrics::UNAUTHORIZED_BODY;

const CHALLENGE: &str = "Basic realm=\"Login Required\"";

#[tokio::test]
async fn missing_credentials_get_challenge() {
    let app = TestApp::metrics().await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        response.headers().get("www-authenticate").unwrap(),
        CHALLENGE
    );
    assert_eq!(response.text().await.unwrap(), UNAUTHORIZED_BODY);
}

#[tokio::test]
async fn wrong_username_or_password_is_rejected() {
    let app = TestApp::metrics().await;

    for (user, password) in [
        ("admin", PASSWORD),
        (USER, "wrong"),
        (USER, ""),
        ("", ""),
        ("USER", PASSWORD),
        (USER, "t0p$ecret"),
    ] {
        let response = app.get_as("/metrics", user, password).await;
        assert_eq!(response.status().as_u16(), 401, "{user}:{password}");
        assert_eq!(
            response.headers().get("www-authenticate").unwrap(),
            CHALLENGE
        );
    }
}

#[tokio::test]
async fn malformed_authorization_is_rejected() {
    let app = TestApp::metrics().await;

    for header in [
        "Bearer abc".to_string(),
        "Basic not-base64!".to_string(),
        format!("Basic {}", STANDARD.encode("usert0p$ecreT")),
    ] {
        let response = app.get_with_header("/metrics", &header).await;
        assert_eq!(response.status().as_u16(), 401, "{header}");
    }
}

#[tokio::test]
async fn valid_credentials_return_only_the_gauge() {
    let app = TestApp::metrics().await;

    let response = app.get_as("/metrics", USER, PASSWORD).await;

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/plain"), "{content_type}");

    let body = response.text().await.unwrap();
    assert!(body.contains("\nauthenticated 1\n"), "{body}");
    assert!(body.contains("# TYPE authenticated gauge"));
    assert!(body.contains("# HELP authenticated "));
    assert!(!body.contains("process_"));
    assert!(!body.contains("rust_info"));
    assert!(!body.contains("tokio_runtime_"));
    assert!(!body.contains("_created"));

    let samples: Vec<&str> = body.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(samples, vec!["authenticated 1"]);
}

#[tokio::test]
async fn lowercase_scheme_is_accepted() {
    let app = TestApp::metrics().await;
    let header = format!("basic {}", STANDARD.encode(format!("{USER}:{PASSWORD}")));

    let response = app.get_with_header("/metrics", &header).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn repeated_scrapes_are_identical() {
    let app = TestApp::metrics().await;

    let first = app.get_as("/metrics", USER, PASSWORD).await.text().await.unwrap();
    for _ in 0..5 {
        let next = app.get_as("/metrics", USER, PASSWORD).await.text().await.unwrap();
        assert_eq!(first, next);
    }
}

#[tokio::test]
async fn rejected_scrape_does_not_affect_later_ones() {
    let app = TestApp::metrics().await;

    assert_eq!(app.get_as("/metrics", USER, "nope").await.status().as_u16(), 401);
    assert_eq!(app.get_as("/metrics", USER, PASSWORD).await.status().as_u16(), 200);
    assert_eq!(app.get("/metrics").await.status().as_u16(), 401);
}

#[tokio::test]
async fn other_paths_and_methods_use_framework_defaults() {
    let app = TestApp::metrics().await;

    assert_eq!(app.get("/").await.status().as_u16(), 404);

    let response = app
        .client
        .post(app.url("/metrics"))
        .basic_auth(USER, Some(PASSWORD))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 405);
}

#[tokio::test]
async fn configured_credentials_path_and_realm() {
    let app = TestApp::metrics_with(
        r#"
version: 1
metrics:
  path: "/scrape"
  realm: "fixtures"
  username: "prom"
  password: "a:b"
"#,
    )
    .await;

    let response = app.get("/scrape").await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        response.headers().get("www-authenticate").unwrap(),
        "Basic realm=\"fixtures\""
    );

    assert_eq!(app.get_as("/scrape", "prom", "a:b").await.status().as_u16(), 200);
    assert_eq!(app.get_as("/scrape", USER, PASSWORD).await.status().as_u16(), 401);
    assert_eq!(app.get_as("/metrics", "prom", "a:b").await.status().as_u16(), 404);
}
