use serde_json::{json, Value};

use crate::helper::{get_client, spawn_app, spawn_app_with};

#[tokio::test]
async fn root_reports_the_service_is_running() {
    let app = spawn_app().await;
    let client = get_client();

    let response = client
        .get(format!("{}/", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"status": "ok", "message": "SoFly API is running", "version": "0.1.0"})
    );
}

#[tokio::test]
async fn health_works() {
    let app = spawn_app().await;
    let client = get_client();

    let response = client
        .get(format!("{}/health", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn health_does_not_touch_the_store() {
    let app = spawn_app_with(false, &["http://localhost:3000"]).await;
    let client = get_client();

    let response = client
        .get(format!("{}/health", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert!(response.status().is_success());
    assert!(app.store_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn preflight_from_an_allowed_origin_is_accepted() {
    let app = spawn_app_with(true, &["http://localhost:3000", "https://sofly.app"]).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/api/waitlist", app.addr))
        .header("Origin", "https://sofly.app")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Request should succeed");

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "https://sofly.app"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
    assert_eq!(headers.get("access-control-allow-methods").unwrap(), "POST");
}

#[tokio::test]
async fn unknown_origin_is_not_allowed() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .get(format!("{}/health", app.addr))
        .header("Origin", "https://evil.example")
        .send()
        .await
        .expect("Request should succeed");

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn wildcard_origin_echoes_the_caller() {
    let app = spawn_app_with(true, &["*"]).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/api/waitlist", app.addr))
        .header("Origin", "https://anywhere.example")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "https://anywhere.example"
    );
}
