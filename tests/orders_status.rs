mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::spawn_app;

#[tokio::test]
async fn orders_are_listed_oldest_first() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let mut ids = Vec::new();
    for label in ["A", "B", "C"] {
        let (status, body) = app
            .post_json(
                "/orders",
                json!({
                    "items": [{ "name": label, "qty": 1 }],
                    "details": { "customer": label }
                }),
            )
            .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        ids.push(body["orderId"].as_i64().expect("orderId"));
    }

    let (status, list) = app.get("/orders").await?;
    assert_eq!(status, StatusCode::OK);
    let rows = list.as_array().expect("order array");
    let listed: Vec<i64> = rows.iter().filter_map(|o| o["id"].as_i64()).collect();
    assert_eq!(listed, ids);

    let details: Vec<&str> = rows
        .iter()
        .map(|o| o["details"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(
        details,
        [
            r#"{"customer":"A"}"#,
            r#"{"customer":"B"}"#,
            r#"{"customer":"C"}"#
        ]
    );
    assert!(rows[0]["created_at"].is_string());

    Ok(())
}

// Order ids may have gaps (AUTOINCREMENT never reuses them); listing follows creation time.
#[tokio::test]
async fn order_listing_ignores_id_gaps() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    sqlx::query(
        "INSERT INTO orders (id, items, details, created_at) VALUES (50, '[]', '\"A\"', '2024-01-01T00:00:00+00:00')",
    )
    .execute(&app.pool)
    .await?;
    sqlx::query(
        "INSERT INTO orders (id, items, details, created_at) VALUES (7, '[]', '\"B\"', '2024-01-02T00:00:00+00:00')",
    )
    .execute(&app.pool)
    .await?;
    let (_, created) = app
        .post_json("/orders", json!({ "items": [], "details": "C" }))
        .await?;

    let (_, list) = app.get("/orders").await?;
    let listed: Vec<i64> = list
        .as_array()
        .expect("order array")
        .iter()
        .filter_map(|o| o["id"].as_i64())
        .collect();
    assert_eq!(listed, vec![50, 7, created["orderId"].as_i64().expect("orderId")]);

    Ok(())
}

#[tokio::test]
async fn order_without_details_stores_null() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let (_, body) = app.post_json("/orders", json!({ "items": [1, 2] })).await?;
    assert_eq!(body["success"], true);

    let (_, list) = app.get("/orders").await?;
    assert_eq!(list[0]["items"], "[1,2]");
    assert!(list[0]["details"].is_null());

    Ok(())
}

#[tokio::test]
async fn leave_status_defaults_to_none() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let (status, body) = app.get("/status/leave").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "none" }));

    Ok(())
}

#[tokio::test]
async fn leave_status_upsert_overwrites_single_row() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let (status, body) = app
        .post_json("/status/leave", json!({ "status": "on leave" }))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = app.get("/status/leave").await?;
    assert_eq!(body, json!({ "status": "on leave" }));

    app.post_json("/status/leave", json!({ "status": "open" })).await?;
    let (_, body) = app.get("/status/leave").await?;
    assert_eq!(body, json!({ "status": "open" }));

    let (rows,): (i64,) = sqlx::query_as("SELECT count(*) FROM status WHERE key = 'leave'")
        .fetch_one(&app.pool)
        .await?;
    assert_eq!(rows, 1);

    Ok(())
}
