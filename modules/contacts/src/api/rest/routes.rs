use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Contacts REST surface. The gateway mounts this under the versioned base
/// path (`/api/v1`).
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/contacts",
            post(handlers::create_contact).get(handlers::list_contacts),
        )
        .route("/contacts/stats", get(handlers::contact_stats))
        .layer(Extension(service))
}
