//! Shared helpers for the contacts module tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use contacts::api::rest::dto::CreateContactReq;
use contacts::domain::model::{
    Contact, ContactFilter, ContactQuery, ServiceCount, SortField, SortOrder,
};
use contacts::domain::repo::{ContactsRepository, InsertError};
use contacts::domain::service::{Service, ServiceConfig};
use contacts::infra::storage::{Migrator, SeaOrmContactsRepository};

/// Create a fresh test database for each test
pub async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    Migrator::up(&db, None).await.expect("Failed to run migrations");

    db
}

/// Create a domain service backed by a fresh in-memory SQLite database
pub async fn create_sqlite_service() -> Arc<Service> {
    let db = create_test_db().await;
    let repo = Arc::new(SeaOrmContactsRepository::new(db));
    Arc::new(Service::new(repo, ServiceConfig::default()))
}

/// Create a domain service backed by the in-memory fake repository
pub fn create_inmem_service() -> Arc<Service> {
    let repo = Arc::new(InMemoryContactsRepository::default());
    Arc::new(Service::new(repo, ServiceConfig::default()))
}

/// A well-formed creation request; tests override individual fields.
pub fn sample_req(email: &str) -> CreateContactReq {
    CreateContactReq {
        name: Some("Jo".to_string()),
        mobile_number: Some("+14155552671".to_string()),
        email_id: Some(email.to_string()),
        nature_of_services: Some("Consulting".to_string()),
        work_related: Some("Yes".to_string()),
        note: None,
    }
}

/// In-memory implementation of the repository port. Lets the domain service
/// be exercised without any database engine, mirroring the production
/// adapter's filter/sort/pagination semantics.
#[derive(Default)]
pub struct InMemoryContactsRepository {
    contacts: Mutex<Vec<Contact>>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches(filter: &ContactFilter, c: &Contact) -> bool {
    if let Some(search) = &filter.search {
        let hit = contains_ci(&c.name, search)
            || contains_ci(&c.email_id, search)
            || contains_ci(&c.mobile_number, search);
        if !hit {
            return false;
        }
    }
    if let Some(text) = &filter.nature_of_services {
        if !contains_ci(&c.nature_of_services, text) {
            return false;
        }
    }
    if let Some(text) = &filter.work_related {
        if !contains_ci(&c.work_related, text) {
            return false;
        }
    }
    true
}

fn sort_contacts(contacts: &mut [Contact], field: SortField, order: SortOrder) {
    contacts.sort_by(|a, b| {
        let ord = match field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Name => a.name.cmp(&b.name),
            SortField::EmailId => a.email_id.cmp(&b.email_id),
            SortField::MobileNumber => a.mobile_number.cmp(&b.mobile_number),
            SortField::NatureOfServices => a.nature_of_services.cmp(&b.nature_of_services),
            SortField::WorkRelated => a.work_related.cmp(&b.work_related),
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

#[async_trait]
impl ContactsRepository for InMemoryContactsRepository {
    async fn insert(&self, contact: Contact) -> Result<(), InsertError> {
        let mut guard = self.contacts.lock().unwrap();
        if guard.iter().any(|c| c.email_id == contact.email_id) {
            return Err(InsertError::DuplicateEmail);
        }
        guard.push(contact);
        Ok(())
    }

    async fn find_page(&self, query: &ContactQuery) -> anyhow::Result<Vec<Contact>> {
        let guard = self.contacts.lock().unwrap();
        let mut hits: Vec<Contact> = guard
            .iter()
            .filter(|c| matches(&query.filter, c))
            .cloned()
            .collect();
        sort_contacts(&mut hits, query.sort_by, query.sort_order);

        let skip = (query.page.saturating_sub(1) * query.limit) as usize;
        Ok(hits
            .into_iter()
            .skip(skip)
            .take(query.limit as usize)
            .collect())
    }

    async fn count(&self, filter: &ContactFilter) -> anyhow::Result<u64> {
        let guard = self.contacts.lock().unwrap();
        Ok(guard.iter().filter(|c| matches(filter, c)).count() as u64)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> anyhow::Result<u64> {
        let guard = self.contacts.lock().unwrap();
        Ok(guard.iter().filter(|c| c.created_at >= since).count() as u64)
    }

    async fn top_services(&self, limit: u64) -> anyhow::Result<Vec<ServiceCount>> {
        let guard = self.contacts.lock().unwrap();
        let mut counts: HashMap<String, u64> = HashMap::new();
        for c in guard.iter() {
            *counts.entry(c.nature_of_services.clone()).or_default() += 1;
        }

        let mut ranked: Vec<ServiceCount> = counts
            .into_iter()
            .map(|(service, count)| ServiceCount { service, count })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit as usize);
        Ok(ranked)
    }
}
