use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, StatusCode, Uri, header},
    routing::get,
};
use tower::{Layer, limit::ConcurrencyLimitLayer};
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;

use crate::{
    state::AppState,
    storage::UPLOADS_PREFIX,
    telemetry::{REQUEST_ID_HEADER, http_trace_layer},
};

/// The assembled service. Trailing slashes are trimmed before routing, so
/// `/categories/` reaches the same handler as `/categories`.
pub type App = NormalizePath<Router>;

pub mod categories;
pub mod doc;
pub mod form;
pub mod health;
pub mod orders;
pub mod products;
pub mod status;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/orders", orders::route())
        .nest("/status", status::router())
}

/// Assemble the full application: API routes, static uploads, docs and the
/// middleware stack.
pub fn build_app(state: AppState, allowed_origin: &str) -> anyhow::Result<App> {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let uploads = ServeDir::new(state.uploads.dir());

    let app = Router::new()
        .route("/", get(health::health_check))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .nest_service(UPLOADS_PREFIX, uploads)
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(http_trace_layer())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(state);

    Ok(NormalizePathLayer::trim_trailing_slash().layer(app))
}

async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    let body = serde_json::json!({ "error": "Not Found", "path": uri.path() });
    (StatusCode::NOT_FOUND, Json(body))
}
