use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::model::{Contact, ContactFilter, ContactQuery, ServiceCount};

/// Error surface of [`ContactsRepository::insert`]. The unique index on the
/// email column is the one store-enforced invariant the domain has to
/// distinguish from infrastructure failures.
#[derive(Debug, Error)]
pub enum InsertError {
    #[error("email already taken")]
    DuplicateEmail,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait ContactsRepository: Send + Sync {
    /// Insert a fully-formed contact.
    ///
    /// Service computes id/timestamps/validation; repo persists. A violation
    /// of the unique email index is the sole source of duplicate detection.
    async fn insert(&self, contact: Contact) -> Result<(), InsertError>;

    /// One page of contacts matching the query's filter, sorted and offset.
    async fn find_page(&self, query: &ContactQuery) -> anyhow::Result<Vec<Contact>>;

    /// Number of contacts matching the filter, ignoring pagination.
    async fn count(&self, filter: &ContactFilter) -> anyhow::Result<u64>;

    /// Number of contacts created at or after `since`.
    async fn count_created_since(&self, since: DateTime<Utc>) -> anyhow::Result<u64>;

    /// Distinct `nature_of_services` values ranked by descending frequency.
    async fn top_services(&self, limit: u64) -> anyhow::Result<Vec<ServiceCount>>;
}
