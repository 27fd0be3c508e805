use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActiveLabs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ActiveLabs::Id).string_len(128).not_null())
                    .col(
                        ColumnDef::new(ActiveLabs::Username)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ActiveLabs::Author).string_len(128).null())
                    .col(ColumnDef::new(ActiveLabs::Name).string_len(128).null())
                    .col(ColumnDef::new(ActiveLabs::Version).integer().null())
                    .col(ColumnDef::new(ActiveLabs::Json).text().null())
                    .col(
                        ColumnDef::new(ActiveLabs::Repository)
                            .string_len(128)
                            .null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ActiveLabs::Id)
                            .col(ActiveLabs::Username),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_active_labs_username")
                            .from(ActiveLabs::Table, ActiveLabs::Username)
                            .to(Users::Table, Users::Username),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_active_labs_repository")
                            .from(ActiveLabs::Table, ActiveLabs::Repository)
                            .to(Repositories::Table, Repositories::Repository),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActiveLabs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ActiveLabs {
    Table,
    Id,
    Username,
    Author,
    Name,
    Version,
    Json,
    Repository,
}

#[derive(Iden)]
enum Users {
    Table,
    Username,
}

#[derive(Iden)]
enum Repositories {
    Table,
    Repository,
}
