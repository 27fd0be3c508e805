use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::Id)
                            .string_len(128)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tasks::Status).string_len(128).null())
                    .col(ColumnDef::new(Tasks::Message).text().null())
                    .col(ColumnDef::new(Tasks::Progress).integer().null())
                    .col(ColumnDef::new(Tasks::Username).string_len(128).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_username")
                            .from(Tasks::Table, Tasks::Username)
                            .to(Users::Table, Users::Username),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Tasks {
    Table,
    Id,
    Status,
    Message,
    Progress,
    Username,
}

#[derive(Iden)]
enum Users {
    Table,
    Username,
}
