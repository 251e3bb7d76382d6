mod common;

use axum::http::StatusCode;
use shop_catalog_api::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert!(response.0.ok);
    assert_eq!(response.0.msg, "Backend is running");
    assert!(
        chrono::DateTime::parse_from_rfc3339(&response.0.time).is_ok(),
        "time should be an RFC 3339 timestamp"
    );
}

#[tokio::test]
async fn root_serves_health_check() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let (status, body) = app.get("/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert!(body["time"].is_string());

    Ok(())
}

#[tokio::test]
async fn unknown_path_is_not_found() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let (status, body) = app.get("/nope").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/nope");

    Ok(())
}
