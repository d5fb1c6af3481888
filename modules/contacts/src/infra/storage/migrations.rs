use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250801_000001_create_contacts::Migration)]
    }
}

mod m20250801_000001_create_contacts {
    use sea_orm_migration::prelude::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Contacts::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Contacts::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Contacts::Name).string_len(100).not_null())
                        .col(
                            ColumnDef::new(Contacts::MobileNumber)
                                .string_len(17)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Contacts::EmailId).string().not_null())
                        .col(
                            ColumnDef::new(Contacts::NatureOfServices)
                                .string_len(200)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Contacts::WorkRelated)
                                .string_len(200)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Contacts::Note)
                                .string_len(500)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Contacts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Contacts::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            // The unique index is the sole duplicate-email authority.
            manager
                .create_index(
                    Index::create()
                        .name("idx_contacts_email_id")
                        .table(Contacts::Table)
                        .col(Contacts::EmailId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_contacts_created_at")
                        .table(Contacts::Table)
                        .col(Contacts::CreatedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Contacts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Contacts {
        Table,
        Id,
        Name,
        MobileNumber,
        EmailId,
        NatureOfServices,
        WorkRelated,
        Note,
        CreatedAt,
        UpdatedAt,
    }
}
