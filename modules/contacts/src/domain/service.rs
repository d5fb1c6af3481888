use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{
    Contact, ContactFilter, ContactPage, ContactQuery, ContactStats, NewContact, SortField,
    SortOrder,
};
use crate::domain::repo::{ContactsRepository, InsertError};
use crate::domain::validation::validate_new_contact;

/// Domain service with the business rules for contact submissions.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn ContactsRepository>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
    pub recent_window_days: i64,
    pub top_services_limit: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            recent_window_days: 7,
            top_services_limit: 5,
        }
    }
}

/// Listing parameters as they arrive from the wire, before defaulting.
#[derive(Debug, Clone, Default)]
pub struct ListContactsRequest {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub search: Option<String>,
    pub nature_of_services: Option<String>,
    pub work_related: Option<String>,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repo: Arc<dyn ContactsRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    #[instrument(name = "contacts.service.create_contact", skip(self, input))]
    pub async fn create_contact(&self, input: NewContact) -> Result<Contact, DomainError> {
        info!("Creating new contact");

        let valid = validate_new_contact(&input).map_err(DomainError::validation)?;

        let now = Utc::now();
        let contact = Contact {
            id: Uuid::new_v4(),
            name: valid.name,
            mobile_number: valid.mobile_number,
            email_id: valid.email_id,
            nature_of_services: valid.nature_of_services,
            work_related: valid.work_related,
            note: valid.note,
            created_at: now,
            updated_at: now,
        };

        self.repo
            .insert(contact.clone())
            .await
            .map_err(|e| match e {
                InsertError::DuplicateEmail => DomainError::duplicate_email(),
                InsertError::Other(err) => DomainError::storage(err.to_string()),
            })?;

        info!("Successfully created contact with id={}", contact.id);
        Ok(contact)
    }

    #[instrument(name = "contacts.service.list_contacts", skip(self, req))]
    pub async fn list_contacts(&self, req: ListContactsRequest) -> Result<ContactPage, DomainError> {
        debug!("Listing contacts");

        let page = req.page.unwrap_or(1).max(1);
        let limit = req
            .limit
            .unwrap_or(self.config.default_page_size)
            .clamp(1, self.config.max_page_size);

        let query = ContactQuery {
            filter: ContactFilter {
                search: normalize_filter(req.search),
                nature_of_services: normalize_filter(req.nature_of_services),
                work_related: normalize_filter(req.work_related),
            },
            sort_by: req
                .sort_by
                .as_deref()
                .map(SortField::parse)
                .unwrap_or_default(),
            sort_order: req
                .sort_order
                .as_deref()
                .map(SortOrder::parse)
                .unwrap_or_default(),
            page,
            limit,
        };

        let contacts = self
            .repo
            .find_page(&query)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        let total_contacts = self
            .repo
            .count(&query.filter)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        let total_pages = total_contacts.div_ceil(limit);

        debug!("Listed {} contacts of {}", contacts.len(), total_contacts);
        Ok(ContactPage {
            contacts,
            current_page: page,
            total_pages,
            total_contacts,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        })
    }

    #[instrument(name = "contacts.service.stats", skip(self))]
    pub async fn stats(&self) -> Result<ContactStats, DomainError> {
        debug!("Computing contact statistics");

        let total_contacts = self
            .repo
            .count(&ContactFilter::default())
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        let since = Utc::now() - Duration::days(self.config.recent_window_days);
        let recent_contacts = self
            .repo
            .count_created_since(since)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        let top_services = self
            .repo
            .top_services(self.config.top_services_limit)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        Ok(ContactStats {
            total_contacts,
            recent_contacts,
            top_services,
        })
    }
}

/// Drop empty or whitespace-only filter values so they do not constrain the
/// query.
fn normalize_filter(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
