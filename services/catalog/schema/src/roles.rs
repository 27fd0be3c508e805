use sea_orm::entity::prelude::*;

/// Coarse capability: a resource scope and whether it may be written.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub role: String,
    pub access_to: Option<String>,
    pub can_write: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::roles_to_users::Entity")]
    RolesToUsers,
}

impl Related<super::roles_to_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolesToUsers.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::roles_to_users::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::roles_to_users::Relation::Role.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
