use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActiveNodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActiveNodes::Label)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ActiveNodes::Username)
                            .string_len(128)
                            .null(),
                    )
                    .col(ColumnDef::new(ActiveNodes::LabId).string_len(128).null())
                    .col(ColumnDef::new(ActiveNodes::NodeId).integer().null())
                    .col(ColumnDef::new(ActiveNodes::State).string_len(128).null())
                    // A node belongs to exactly one (lab, owner) instance; either
                    // column alone points at a non-unique key.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_active_nodes_active_lab")
                            .from(
                                ActiveNodes::Table,
                                (ActiveNodes::LabId, ActiveNodes::Username),
                            )
                            .to(ActiveLabs::Table, (ActiveLabs::Id, ActiveLabs::Username))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActiveNodes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ActiveNodes {
    Table,
    Label,
    Username,
    LabId,
    NodeId,
    State,
}

#[derive(Iden)]
enum ActiveLabs {
    Table,
    Id,
    Username,
}
