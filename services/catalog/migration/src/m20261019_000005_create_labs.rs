use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Labs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Labs::Id)
                            .string_len(128)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Labs::Author).string_len(128).null())
                    .col(ColumnDef::new(Labs::Name).string_len(128).null())
                    .col(ColumnDef::new(Labs::Version).integer().null())
                    .col(ColumnDef::new(Labs::Json).text().null())
                    .col(ColumnDef::new(Labs::Repository).string_len(128).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_labs_repository")
                            .from(Labs::Table, Labs::Repository)
                            .to(Repositories::Table, Repositories::Repository),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Labs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Labs {
    Table,
    Id,
    Author,
    Name,
    Version,
    Json,
    Repository,
}

#[derive(Iden)]
enum Repositories {
    Table,
    Repository,
}
