use sea_orm::entity::prelude::*;

/// External source that lab definitions are imported from.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "repositories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub repository: String,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::labs::Entity")]
    Labs,
    #[sea_orm(has_many = "super::active_labs::Entity")]
    ActiveLabs,
}

impl Related<super::labs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Labs.def()
    }
}

impl Related<super::active_labs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActiveLabs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
