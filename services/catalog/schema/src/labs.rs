use sea_orm::entity::prelude::*;

/// Topology template. `json` holds the serialized topology document.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "labs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
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
        belongs_to = "super::repositories::Entity",
        from = "Column::Repository",
        to = "super::repositories::Column::Repository"
    )]
    Repository,
}

impl Related<super::repositories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Repository.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
