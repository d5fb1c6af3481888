use axum::{
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use serde_json::{json, Value};

/// Environment information surfaced by the health endpoint.
#[derive(Clone, Debug)]
pub struct HealthContext {
    pub environment: String,
}

pub async fn health(Extension(ctx): Extension<HealthContext>) -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Server is running successfully",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": ctx.environment,
    }))
}

/// Catch-all for unmatched routes.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": "error",
            "message": format!("Route {} not found", uri.path()),
        })),
    )
}
