use sea_orm::entity::prelude::*;

/// Node running inside an active lab. `label` is issued by the provisioner,
/// never generated by the database.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "active_nodes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub label: i32,
    pub username: Option<String>,
    pub lab_id: Option<String>,
    pub node_id: Option<i32>,
    pub state: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::active_labs::Entity",
        from = "(Column::LabId, Column::Username)",
        to = "(super::active_labs::Column::Id, super::active_labs::Column::Username)",
        on_delete = "Cascade"
    )]
    ActiveLab,
    #[sea_orm(has_many = "super::active_interfaces::Entity")]
    ActiveInterfaces,
}

impl Related<super::active_labs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActiveLab.def()
    }
}

impl Related<super::active_interfaces::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActiveInterfaces.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
