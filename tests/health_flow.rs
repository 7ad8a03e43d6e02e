mod common;

use actix_web::{http::{header, StatusCode}, test};
use common::{client::TestClient, TestContext};

#[tokio::test]
async fn test_health_check_flow_success() {
    println!("\n\n[+] Running test: test_health_check_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    println!("[>] Sending GET request to /health");
    let req = test::TestRequest::get()
        .uri("/health")
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    println!("[/] Test passed: Health check successful.");
}

#[tokio::test]
async fn test_health_check_flow_wrong_http_method() {
    println!("\n\n[+] Running test: test_health_check_flow_wrong_http_method");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Sending POST request to /health (expecting failure)");
    let req = test::TestRequest::post()
        .uri("/health")
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: Correctly returned NOT_FOUND for wrong HTTP method.");
}

#[tokio::test]
async fn test_landing_page_flow() {
    println!("\n\n[+] Running test: test_landing_page_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "content type was {content_type}");

    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("Exercise Tracker"));
    println!("[/] Test passed: Landing page served.");
}

#[tokio::test]
async fn test_static_asset_flow() {
    println!("\n\n[+] Running test: test_static_asset_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/style.css").to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/css"), "content type was {content_type}");

    let req = test::TestRequest::get().uri("/missing.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: Static assets served from the public directory.");
}

#[tokio::test]
async fn test_cors_flow_allows_any_origin() {
    println!("\n\n[+] Running test: test_cors_flow_allows_any_origin");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Sending cross-origin GET to /api/users");
    let req = test::TestRequest::get()
        .uri("/api/users")
        .insert_header((header::ORIGIN, "https://tracker.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    let allowed = resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert!(
        matches!(allowed.as_deref(), Some("https://tracker.example.com") | Some("*")),
        "allow-origin was {allowed:?}"
    );
    println!("[/] Test passed: Cross-origin request allowed.");
}

#[tokio::test]
async fn test_health_check_flow_after_store_closed() {
    println!("\n\n[+] Running test: test_health_check_flow_after_store_closed");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Closing a separate handle on the store.");
    let handle = (*ctx.db).clone();
    handle.close().await.expect("Failed to close store");
    assert!(ctx.db.ping().await.is_err());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "DB_ERROR");
    println!("[/] Test passed: Closing any handle closes the shared pool.");
}
