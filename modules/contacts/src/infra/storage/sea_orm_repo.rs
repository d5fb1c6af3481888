//! SeaORM-backed repository implementation for the domain port.
//!
//! This struct is generic over `C: ConnectionTrait`, so you can construct it
//! with a `DatabaseConnection` **or** a transactional connection.

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Alias, Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, FromQueryResult,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};

use crate::domain::model::{
    Contact, ContactFilter, ContactQuery, ServiceCount, SortField, SortOrder,
};
use crate::domain::repo::{ContactsRepository, InsertError};
use crate::infra::storage::entity::{ActiveModel as ContactAM, Column, Entity as ContactEntity};

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmContactsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmContactsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

/// `lower(col) LIKE '%<lowered text>%'` — identical semantics on SQLite and
/// Postgres. `%`/`_` in user input stay active as LIKE wildcards, matching
/// the permissive substring matching of the listing contract.
fn contains_ci(col: Column, text: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(format!("%{}%", text.to_lowercase()))
}

fn filter_condition(filter: &ContactFilter) -> Condition {
    let mut cond = Condition::all();

    if let Some(search) = &filter.search {
        cond = cond.add(
            Condition::any()
                .add(contains_ci(Column::Name, search))
                .add(contains_ci(Column::EmailId, search))
                .add(contains_ci(Column::MobileNumber, search)),
        );
    }
    if let Some(text) = &filter.nature_of_services {
        cond = cond.add(contains_ci(Column::NatureOfServices, text));
    }
    if let Some(text) = &filter.work_related {
        cond = cond.add(contains_ci(Column::WorkRelated, text));
    }

    cond
}

fn sort_column(field: SortField) -> Column {
    match field {
        SortField::CreatedAt => Column::CreatedAt,
        SortField::UpdatedAt => Column::UpdatedAt,
        SortField::Name => Column::Name,
        SortField::EmailId => Column::EmailId,
        SortField::MobileNumber => Column::MobileNumber,
        SortField::NatureOfServices => Column::NatureOfServices,
        SortField::WorkRelated => Column::WorkRelated,
    }
}

#[async_trait]
impl<C> ContactsRepository for SeaOrmContactsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert(&self, contact: Contact) -> Result<(), InsertError> {
        let m = ContactAM {
            id: Set(contact.id),
            name: Set(contact.name),
            mobile_number: Set(contact.mobile_number),
            email_id: Set(contact.email_id),
            nature_of_services: Set(contact.nature_of_services),
            work_related: Set(contact.work_related),
            note: Set(contact.note),
            created_at: Set(contact.created_at),
            updated_at: Set(contact.updated_at),
        };

        match m.insert(&self.conn).await {
            Ok(_) => Ok(()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(InsertError::DuplicateEmail),
                _ => Err(InsertError::Other(
                    anyhow::Error::new(err).context("insert failed"),
                )),
            },
        }
    }

    async fn find_page(&self, query: &ContactQuery) -> anyhow::Result<Vec<Contact>> {
        let order = match query.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let rows = ContactEntity::find()
            .filter(filter_condition(&query.filter))
            .order_by(sort_column(query.sort_by), order)
            .limit(query.limit)
            .offset(query.page.saturating_sub(1) * query.limit)
            .all(&self.conn)
            .await
            .context("find_page failed")?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: &ContactFilter) -> anyhow::Result<u64> {
        ContactEntity::find()
            .filter(filter_condition(filter))
            .count(&self.conn)
            .await
            .context("count failed")
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> anyhow::Result<u64> {
        ContactEntity::find()
            .filter(Column::CreatedAt.gte(since))
            .count(&self.conn)
            .await
            .context("count_created_since failed")
    }

    async fn top_services(&self, limit: u64) -> anyhow::Result<Vec<ServiceCount>> {
        #[derive(Debug, FromQueryResult)]
        struct ServiceCountRow {
            service: String,
            count: i64,
        }

        let rows = ContactEntity::find()
            .select_only()
            .column_as(Column::NatureOfServices, "service")
            .column_as(Column::Id.count(), "count")
            .group_by(Column::NatureOfServices)
            .order_by_desc(Expr::col(Alias::new("count")))
            .limit(limit)
            .into_model::<ServiceCountRow>()
            .all(&self.conn)
            .await
            .context("top_services failed")?;

        Ok(rows
            .into_iter()
            .map(|row| ServiceCount {
                service: row.service,
                count: row.count.max(0) as u64,
            })
            .collect())
    }
}
