use sea_orm_migration::prelude::*;

mod m20261019_000001_create_users;
mod m20261019_000002_create_roles;
mod m20261019_000003_create_roles_to_users;
mod m20261019_000004_create_repositories;
mod m20261019_000005_create_labs;
mod m20261019_000006_create_active_labs;
mod m20261019_000007_create_active_nodes;
mod m20261019_000008_create_active_interfaces;
mod m20261019_000009_create_controllers;
mod m20261019_000010_create_tasks;
mod m20261019_000011_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_users::Migration),
            Box::new(m20261019_000002_create_roles::Migration),
            Box::new(m20261019_000003_create_roles_to_users::Migration),
            Box::new(m20261019_000004_create_repositories::Migration),
            Box::new(m20261019_000005_create_labs::Migration),
            Box::new(m20261019_000006_create_active_labs::Migration),
            Box::new(m20261019_000007_create_active_nodes::Migration),
            Box::new(m20261019_000008_create_active_interfaces::Migration),
            Box::new(m20261019_000009_create_controllers::Migration),
            Box::new(m20261019_000010_create_tasks::Migration),
            Box::new(m20261019_000011_add_lookup_indexes::Migration),
        ]
    }
}
