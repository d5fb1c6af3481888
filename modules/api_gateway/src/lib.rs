//! HTTP shell for the contactform service: router assembly, middleware
//! stack, health endpoint, docs, 404 fallback and the serve loop.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue};
use axum::{middleware, routing::get, Extension, Router};
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
};

pub mod config;
pub mod openapi;
pub mod rate_limit;
pub mod request_id;
pub mod web;

pub use config::GatewayConfig;
use rate_limit::RateLimiter;

/// Assemble the application router: versioned API routes, health, optional
/// docs, catch-all 404 and the middleware stack.
pub fn build_router(service: Arc<contacts::Service>, config: &GatewayConfig) -> Router {
    let limiter = Arc::new(RateLimiter::new(
        config.rate_limit.max_requests,
        Duration::from_secs(config.rate_limit.window_secs),
    ));

    // Rate limiting covers the /api subtree only; health and docs stay open.
    let api = Router::new()
        .nest("/api/v1", contacts::api::rest::routes::router(service))
        .layer(middleware::from_fn_with_state(limiter, rate_limit::enforce));

    let mut router = Router::new()
        .merge(api)
        .route("/health", get(web::health))
        .layer(Extension(web::HealthContext {
            environment: config.environment.clone(),
        }));

    if config.enable_docs {
        router = router
            .route("/openapi.json", get(openapi::serve_openapi))
            .route("/docs", get(openapi::serve_docs));
    }

    router = router.fallback(web::not_found);

    // Middleware order:
    // PropagateRequestId -> SetRequestId -> push_req_id_to_extensions -> Trace -> Timeout -> CORS -> BodyLimit -> response headers
    let x_request_id = request_id::header();

    // 1. Propagate request ID from incoming to outgoing
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));

    // 2. Set request ID if not present
    router = router.layer(SetRequestIdLayer::new(
        x_request_id,
        request_id::MakeReqId,
    ));

    // 3. Make the request ID visible to handlers and the current span
    router = router.layer(middleware::from_fn(request_id::push_req_id_to_extensions));

    // 4. Trace layer with request-id aware spans
    router = router.layer(request_id::create_trace_layer());

    // 5. Timeout layer - 30 second timeout for handlers
    router = router.layer(TimeoutLayer::new(Duration::from_secs(30)));

    // 6. CORS layer (if enabled): any origin, no credentials
    if config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    // 7. Body limit layer
    router = router.layer(RequestBodyLimitLayer::new(config.body_limit_bytes));

    // 8. Security response headers
    router = router.layer(SetResponseHeaderLayer::overriding(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    ));
    router = router.layer(SetResponseHeaderLayer::overriding(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("SAMEORIGIN"),
    ));

    router
}

/// Bind the socket and serve until the token is cancelled.
pub async fn serve(addr: &str, router: Router, cancel: CancellationToken) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server bound on {}", addr);

    // Graceful shutdown on cancel
    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
    .map_err(|e| anyhow::anyhow!(e))
}
