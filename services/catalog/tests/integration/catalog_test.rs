use sea_orm_migration::MigratorTrait;

use netlab_catalog::domain::repository::{ActiveLabRepository, RoleRepository};
use netlab_catalog::domain::types::Role;
use netlab_catalog::state::Catalog;
use netlab_catalog_migration::Migrator;

use crate::helpers::{catalog, memory_config, running, seed_user};

#[tokio::test]
async fn should_report_empty_tables_after_migration() {
    let catalog = catalog().await;

    let counts = catalog.row_counts().await.unwrap();
    let tables: Vec<&str> = counts.iter().map(|(table, _)| *table).collect();
    assert_eq!(
        tables,
        [
            "users",
            "roles",
            "roles_to_users",
            "repositories",
            "labs",
            "active_labs",
            "active_nodes",
            "active_interfaces",
            "controllers",
            "tasks",
        ]
    );
    assert!(counts.iter().all(|(_, rows)| *rows == 0));
}

#[tokio::test]
async fn should_count_rows_per_table() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;
    catalog
        .roles()
        .create(&Role {
            role: "viewer".to_owned(),
            access_to: None,
            can_write: Some(false),
        })
        .await
        .unwrap();
    catalog.roles().grant("viewer", "alice").await.unwrap();
    let (lab, nodes, interfaces) = running("ospf", "alice", &[1, 2]);
    catalog
        .active_labs()
        .create(&lab, &nodes, &interfaces)
        .await
        .unwrap();

    let counts = catalog.row_counts().await.unwrap();
    let rows = |name: &str| {
        counts
            .iter()
            .find(|(table, _)| *table == name)
            .map(|(_, rows)| *rows)
            .unwrap()
    };
    assert_eq!(rows("users"), 1);
    assert_eq!(rows("roles_to_users"), 1);
    assert_eq!(rows("active_labs"), 1);
    assert_eq!(rows("active_nodes"), 2);
    assert_eq!(rows("active_interfaces"), 4);
    assert_eq!(rows("labs"), 0);
}

#[tokio::test]
async fn should_leave_schema_alone_when_migrations_disabled() {
    let catalog = Catalog::connect(&memory_config(false)).await.unwrap();

    let err = catalog.row_counts().await.unwrap_err();
    assert_eq!(err.kind(), "INTERNAL");
}

#[tokio::test]
async fn should_roll_back_and_reapply_migrations() {
    let catalog = catalog().await;

    Migrator::down(&catalog.db, None).await.unwrap();
    let err = catalog.row_counts().await.unwrap_err();
    assert_eq!(err.kind(), "INTERNAL");

    Migrator::up(&catalog.db, None).await.unwrap();
    let counts = catalog.row_counts().await.unwrap();
    assert_eq!(counts.len(), 10);
    assert!(counts.iter().all(|(_, rows)| *rows == 0));

    Migrator::refresh(&catalog.db).await.unwrap();
    assert!(catalog.row_counts().await.is_ok());
}
