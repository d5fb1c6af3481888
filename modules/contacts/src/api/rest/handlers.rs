use axum::{extract::Query, http::StatusCode, response::Json, Extension};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::rest::dto::{
    ContactCreatedDto, ContactListDto, ContactStatsDto, CreateContactReq, ListContactsQuery,
};
use crate::api::rest::error::{ApiError, ErrorBody};
use crate::domain::service::Service;

/// Create a new contact submission
#[utoipa::path(
    post,
    path = "/contacts",
    tag = "contacts",
    request_body = CreateContactReq,
    responses(
        (status = 201, description = "Contact created", body = ContactCreatedDto),
        (status = 400, description = "Validation failure or duplicate email", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn create_contact(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<CreateContactReq>,
) -> Result<(StatusCode, Json<ContactCreatedDto>), ApiError> {
    info!("Creating contact");

    match svc.create_contact(req.into()).await {
        Ok(contact) => Ok((StatusCode::CREATED, Json(contact.into()))),
        Err(e) => {
            error!("Failed to create contact: {}", e);
            Err(ApiError::from_domain(
                e,
                "Internal server error while creating contact",
            ))
        }
    }
}

/// List contacts with filtering, sorting and pagination
#[utoipa::path(
    get,
    path = "/contacts",
    tag = "contacts",
    params(ListContactsQuery),
    responses(
        (status = 200, description = "Page of contacts", body = ContactListDto),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_contacts(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ListContactsQuery>,
) -> Result<Json<ContactListDto>, ApiError> {
    info!("Listing contacts with query: {:?}", query);

    match svc.list_contacts(query.into()).await {
        Ok(page) => Ok(Json(page.into())),
        Err(e) => {
            error!("Failed to list contacts: {}", e);
            Err(ApiError::from_domain(
                e,
                "Internal server error while fetching contacts",
            ))
        }
    }
}

/// Contact statistics: totals, recent submissions, top services
#[utoipa::path(
    get,
    path = "/contacts/stats",
    tag = "contacts",
    responses(
        (status = 200, description = "Contact statistics", body = ContactStatsDto),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn contact_stats(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<ContactStatsDto>, ApiError> {
    info!("Computing contact statistics");

    match svc.stats().await {
        Ok(stats) => Ok(Json(stats.into())),
        Err(e) => {
            error!("Failed to compute stats: {}", e);
            Err(ApiError::from_domain(
                e,
                "Internal server error while fetching statistics",
            ))
        }
    }
}
