use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Controllers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Controllers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Controllers::InsideIp).string_len(128).null())
                    .col(
                        ColumnDef::new(Controllers::OutsideIp)
                            .string_len(128)
                            .null(),
                    )
                    .col(ColumnDef::new(Controllers::Master).boolean().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Controllers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Controllers {
    Table,
    Id,
    InsideIp,
    OutsideIp,
    Master,
}
