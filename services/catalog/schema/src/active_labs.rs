use sea_orm::entity::prelude::*;

/// Running instance of a lab, keyed by `(id, username)` so the same lab can be
/// active for several users at once.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "active_labs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub author: Option<String>,
    pub name: Option<String>,
    pub version: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub json: Option<String>,
    pub repository: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::Username",
        to = "super::users::Column::Username"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::repositories::Entity",
        from = "Column::Repository",
        to = "super::repositories::Column::Repository"
    )]
    Repository,
    #[sea_orm(has_many = "super::active_nodes::Entity")]
    ActiveNodes,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::repositories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Repository.def()
    }
}

impl Related<super::active_nodes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActiveNodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
