use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RolesToUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RolesToUsers::Role)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RolesToUsers::Username)
                            .string_len(128)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(RolesToUsers::Role)
                            .col(RolesToUsers::Username),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_roles_to_users_role")
                            .from(RolesToUsers::Table, RolesToUsers::Role)
                            .to(Roles::Table, Roles::Role)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_roles_to_users_username")
                            .from(RolesToUsers::Table, RolesToUsers::Username)
                            .to(Users::Table, Users::Username)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RolesToUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RolesToUsers {
    Table,
    Role,
    Username,
}

#[derive(Iden)]
enum Roles {
    Table,
    Role,
}

#[derive(Iden)]
enum Users {
    Table,
    Username,
}
