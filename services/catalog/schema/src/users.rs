use sea_orm::entity::prelude::*;

/// Account identity plus the number of node labels the user may hold.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub password: Option<String>,
    pub name: Option<String>,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub labels: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::roles_to_users::Entity")]
    RolesToUsers,
    #[sea_orm(has_many = "super::active_labs::Entity")]
    ActiveLabs,
    #[sea_orm(has_many = "super::tasks::Entity")]
    Tasks,
}

impl Related<super::roles_to_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolesToUsers.def()
    }
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        super::roles_to_users::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::roles_to_users::Relation::User.def().rev())
    }
}

impl Related<super::active_labs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActiveLabs.def()
    }
}

impl Related<super::tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
