#![allow(dead_code)]

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
};
use tower::ServiceExt;

use shop_catalog_api::{
    db::{DbPool, create_orm_conn, create_pool, run_migrations},
    routes::{App, build_app},
    state::AppState,
    storage::UploadStore,
};

pub const BACKEND_URL: &str = "http://backend.test";
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

const BOUNDARY: &str = "shop-test-boundary";

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

pub struct TestApp {
    pub app: App,
    pub pool: DbPool,
    pub upload_dir: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}

// Fresh in-memory store and upload directory per test.
pub async fn spawn_app() -> anyhow::Result<TestApp> {
    let pool = create_pool("sqlite::memory:").await?;
    run_migrations(&pool).await?;

    let upload_dir = std::env::temp_dir().join(format!(
        "shop-catalog-test-{}-{}",
        std::process::id(),
        NEXT_DIR.fetch_add(1, Ordering::SeqCst)
    ));
    let uploads = UploadStore::init(&upload_dir, BACKEND_URL).await?;

    let state = AppState {
        pool: pool.clone(),
        orm: create_orm_conn(&pool),
        uploads,
    };
    let app = build_app(state, ALLOWED_ORIGIN)?;

    Ok(TestApp {
        app,
        pool,
        upload_dir,
    })
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let response = self.app.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, body))
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.send(Request::get(uri).body(Body::empty())?).await
    }

    pub async fn delete(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.send(Request::delete(uri).body(Body::empty())?).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?;
        self.send(request).await
    }

    pub async fn post_form(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
        image: Option<(&str, &[u8])>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        self.send(multipart_request(uri, fields, image)?).await
    }
}

pub fn multipart_request(
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> anyhow::Result<Request<Body>> {
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::post(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))?;
    Ok(request)
}
