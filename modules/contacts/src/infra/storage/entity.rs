use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::domain::model::Contact;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub mobile_number: String,
    #[sea_orm(unique)]
    pub email_id: String,
    pub nature_of_services: String,
    pub work_related: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a database row into the domain model
impl From<Model> for Contact {
    fn from(entity: Model) -> Self {
        Contact {
            id: entity.id,
            name: entity.name,
            mobile_number: entity.mobile_number,
            email_id: entity.email_id,
            nature_of_services: entity.nature_of_services,
            work_related: entity.work_related,
            note: entity.note,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
