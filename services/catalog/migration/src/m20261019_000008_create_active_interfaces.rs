use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActiveInterfaces::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ActiveInterfaces::Id).integer().not_null())
                    .col(ColumnDef::new(ActiveInterfaces::Label).integer().not_null())
                    .col(ColumnDef::new(ActiveInterfaces::DstLabel).integer().null())
                    .col(ColumnDef::new(ActiveInterfaces::DstIf).integer().null())
                    .primary_key(
                        Index::create()
                            .col(ActiveInterfaces::Id)
                            .col(ActiveInterfaces::Label),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_active_interfaces_label")
                            .from(ActiveInterfaces::Table, ActiveInterfaces::Label)
                            .to(ActiveNodes::Table, ActiveNodes::Label)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActiveInterfaces::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ActiveInterfaces {
    Table,
    Id,
    Label,
    DstLabel,
    DstIf,
}

#[derive(Iden)]
enum ActiveNodes {
    Table,
    Label,
}
