use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::model::{Contact, ContactPage, ContactStats, NewContact, ServiceCount};
use crate::domain::service::ListContactsRequest;

/// REST DTO for a contact submission.
///
/// Every field is optional on the wire so the validator — not the
/// deserializer — reports missing fields by name.
#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactReq {
    pub name: Option<String>,
    pub mobile_number: Option<String>,
    pub email_id: Option<String>,
    pub nature_of_services: Option<String>,
    pub work_related: Option<String>,
    pub note: Option<String>,
}

/// REST DTO for listing query parameters
#[derive(Debug, Clone, Deserialize, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListContactsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub search: Option<String>,
    pub nature_of_services: Option<String>,
    pub work_related: Option<String>,
}

/// Public formatted view of a contact, distinct from the storage shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: Uuid,
    pub name: String,
    pub contact: ContactChannelsDto,
    pub services: ContactServicesDto,
    pub note: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactChannelsDto {
    pub mobile: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactServicesDto {
    pub nature: String,
    pub work_related: String,
}

/// Response envelope for a successful creation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactCreatedDto {
    pub status: String,
    pub message: String,
    pub data: ContactCreatedData,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactCreatedData {
    pub contact: ContactDto,
}

/// Response envelope for the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactListDto {
    pub status: String,
    pub message: String,
    pub data: ContactListData,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactListData {
    pub contacts: Vec<ContactDto>,
    pub pagination: PaginationDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_contacts: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Response envelope for the statistics endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactStatsDto {
    pub status: String,
    pub data: ContactStatsData,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactStatsData {
    pub total_contacts: u64,
    pub recent_contacts: u64,
    pub top_services: Vec<ServiceCountDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceCountDto {
    pub service: String,
    pub count: u64,
}

// Conversion implementations between REST DTOs and domain models

impl From<CreateContactReq> for NewContact {
    fn from(req: CreateContactReq) -> Self {
        Self {
            name: req.name,
            mobile_number: req.mobile_number,
            email_id: req.email_id,
            nature_of_services: req.nature_of_services,
            work_related: req.work_related,
            note: req.note,
        }
    }
}

impl From<ListContactsQuery> for ListContactsRequest {
    fn from(query: ListContactsQuery) -> Self {
        Self {
            page: query.page,
            limit: query.limit,
            sort_by: query.sort_by,
            sort_order: query.sort_order,
            search: query.search,
            nature_of_services: query.nature_of_services,
            work_related: query.work_related,
        }
    }
}

impl From<Contact> for ContactDto {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            contact: ContactChannelsDto {
                mobile: contact.mobile_number,
                email: contact.email_id,
            },
            services: ContactServicesDto {
                nature: contact.nature_of_services,
                work_related: contact.work_related,
            },
            note: contact.note,
            submitted_at: contact.created_at,
        }
    }
}

impl From<Contact> for ContactCreatedDto {
    fn from(contact: Contact) -> Self {
        Self {
            status: "success".to_string(),
            message: "Contact created successfully".to_string(),
            data: ContactCreatedData {
                contact: contact.into(),
            },
        }
    }
}

impl From<ContactPage> for ContactListDto {
    fn from(page: ContactPage) -> Self {
        Self {
            status: "success".to_string(),
            message: "Contacts retrieved successfully".to_string(),
            data: ContactListData {
                contacts: page.contacts.into_iter().map(ContactDto::from).collect(),
                pagination: PaginationDto {
                    current_page: page.current_page,
                    total_pages: page.total_pages,
                    total_contacts: page.total_contacts,
                    has_next_page: page.has_next_page,
                    has_prev_page: page.has_prev_page,
                },
            },
        }
    }
}

impl From<ServiceCount> for ServiceCountDto {
    fn from(sc: ServiceCount) -> Self {
        Self {
            service: sc.service,
            count: sc.count,
        }
    }
}

impl From<ContactStats> for ContactStatsDto {
    fn from(stats: ContactStats) -> Self {
        Self {
            status: "success".to_string(),
            data: ContactStatsData {
                total_contacts: stats.total_contacts,
                recent_contacts: stats.recent_contacts,
                top_services: stats
                    .top_services
                    .into_iter()
                    .map(ServiceCountDto::from)
                    .collect(),
            },
        }
    }
}
