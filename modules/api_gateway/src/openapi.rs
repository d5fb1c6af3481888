use axum::response::{Html, Json};
use utoipa::OpenApi;

use contacts::api::rest::{dto, error};

/// Aggregated OpenAPI document for the HTTP surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contactform API",
        description = "Contact form backend service",
        version = "0.1.0"
    ),
    servers((url = "/api/v1")),
    paths(
        contacts::api::rest::handlers::create_contact,
        contacts::api::rest::handlers::list_contacts,
        contacts::api::rest::handlers::contact_stats,
    ),
    components(schemas(
        dto::CreateContactReq,
        dto::ContactDto,
        dto::ContactChannelsDto,
        dto::ContactServicesDto,
        dto::ContactCreatedDto,
        dto::ContactCreatedData,
        dto::ContactListDto,
        dto::ContactListData,
        dto::PaginationDto,
        dto::ContactStatsDto,
        dto::ContactStatsData,
        dto::ServiceCountDto,
        error::ErrorBody,
    )),
    tags((name = "contacts", description = "Contact form submissions"))
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Static docs page rendering the OpenAPI document with Stoplight Elements.
pub async fn serve_docs() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>Contactform API Docs</title>
  <script src="https://unpkg.com/@stoplight/elements@latest/web-components.min.js"></script>
  <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements@latest/styles.min.css">
</head>
<body>
  <elements-api apiDescriptionUrl="/openapi.json" router="hash" layout="sidebar"></elements-api>
</body>
</html>"#,
    )
}
