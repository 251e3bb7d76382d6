use axum::{
    body::Body,
    http::{Request, Response},
};
use std::time::Duration;
use tower_http::trace::{HttpMakeClassifier, TraceLayer};
use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

type MakeSpanFn = fn(&Request<Body>) -> Span;
type OnRequestFn = fn(&Request<Body>, &Span);
type OnResponseFn = fn(&Response<Body>, Duration, &Span);

pub type HttpTraceLayer = TraceLayer<HttpMakeClassifier, MakeSpanFn, OnRequestFn, OnResponseFn>;

/// Install the fmt subscriber; `RUST_LOG` overrides the default filter.
pub fn init_subscriber() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shop_catalog_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// One `http_request` span per request, tagged with the request id set by
/// `SetRequestIdLayer`.
pub fn http_trace_layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(request_span as MakeSpanFn)
        .on_request(request_started as OnRequestFn)
        .on_response(request_finished as OnResponseFn)
}

fn request_id(request: &Request<Body>) -> &str {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}

fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id(request)
    )
}

fn request_started(request: &Request<Body>, _span: &Span) {
    let content_type = request
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");
    tracing::debug!(content_type, "request started");
}

fn request_finished(response: &Response<Body>, latency: Duration, _span: &Span) {
    tracing::info!(
        status = %response.status(),
        ms = %latency.as_millis(),
        "request finished"
    );
}
