use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "controllers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inside_ip: Option<String>,
    pub outside_ip: Option<String>,
    pub master: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
