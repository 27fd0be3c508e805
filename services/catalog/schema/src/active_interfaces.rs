use sea_orm::entity::prelude::*;

/// Interface `id` of node `label`. `dst_label`/`dst_if` name the far end of the
/// link and are not foreign keys.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "active_interfaces")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub label: i32,
    pub dst_label: Option<i32>,
    pub dst_if: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::active_nodes::Entity",
        from = "Column::Label",
        to = "super::active_nodes::Column::Label",
        on_delete = "Cascade"
    )]
    ActiveNode,
}

impl Related<super::active_nodes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActiveNode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
