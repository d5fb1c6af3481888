//! Per-client request rate limiting.
//!
//! Fixed-window counting keyed by peer IP, held in an in-process concurrent
//! map. Over-limit requests get `429 Too Many Requests` with a `retry-after`
//! header and the standard error envelope. Requests without a resolvable
//! peer address share one global bucket so the limit stays enforceable.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use serde_json::json;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum RateKey {
    Ip(IpAddr),
    Global,
}

#[derive(Clone, Copy, Debug)]
struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window request limiter.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: DashMap<RateKey, Window>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: DashMap::new(),
        }
    }

    /// Count one request for `ip`. Returns how long the client has to wait
    /// when the window is exhausted.
    pub fn check(&self, ip: Option<IpAddr>) -> Result<(), Duration> {
        let key = ip.map(RateKey::Ip).unwrap_or(RateKey::Global);
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: RateKey, now: Instant) -> Result<(), Duration> {
        let mut entry = self.windows.entry(key).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        if entry.count >= self.max_requests {
            let elapsed = now.duration_since(entry.started);
            return Err(self.window.saturating_sub(elapsed));
        }

        entry.count += 1;
        Ok(())
    }
}

/// Axum middleware enforcing the limiter on every request passing through.
pub async fn enforce(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip());

    match limiter.check(ip) {
        Ok(()) => next.run(req).await,
        Err(retry_after) => {
            tracing::warn!(ip = ?ip, "rate limit exceeded");

            let body = json!({
                "status": "error",
                "message": "Too many requests from this IP, please try again later."
            });
            let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();

            let secs = retry_after.as_secs().max(1);
            if let Ok(value) = HeaderValue::from_str(&secs.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
            response
        }
    }
}
