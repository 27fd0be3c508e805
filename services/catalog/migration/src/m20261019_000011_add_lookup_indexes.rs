use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(ActiveNodes::Table)
                    .col(ActiveNodes::LabId)
                    .col(ActiveNodes::Username)
                    .name("idx_active_nodes_lab_id_username")
                    .to_owned(),
            )
            .await?;
        // (id, label) primary key does not cover lookups by label alone.
        manager
            .create_index(
                Index::create()
                    .table(ActiveInterfaces::Table)
                    .col(ActiveInterfaces::Label)
                    .name("idx_active_interfaces_label")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(RolesToUsers::Table)
                    .col(RolesToUsers::Username)
                    .name("idx_roles_to_users_username")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Labs::Table)
                    .col(Labs::Repository)
                    .name("idx_labs_repository")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Tasks::Table)
                    .col(Tasks::Username)
                    .name("idx_tasks_username")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_tasks_username")
                    .table(Tasks::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_labs_repository")
                    .table(Labs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_roles_to_users_username")
                    .table(RolesToUsers::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_active_interfaces_label")
                    .table(ActiveInterfaces::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_active_nodes_lab_id_username")
                    .table(ActiveNodes::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum ActiveNodes {
    Table,
    LabId,
    Username,
}

#[derive(Iden)]
enum ActiveInterfaces {
    Table,
    Label,
}

#[derive(Iden)]
enum RolesToUsers {
    Table,
    Username,
}

#[derive(Iden)]
enum Labs {
    Table,
    Repository,
}

#[derive(Iden)]
enum Tasks {
    Table,
    Username,
}
