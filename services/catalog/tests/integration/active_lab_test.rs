use sea_orm::{EntityTrait, ModelTrait};

use netlab_catalog::domain::repository::{
    ActiveInterfaceRepository, ActiveLabRepository, ActiveNodeRepository,
};
use netlab_catalog::domain::types::ActiveNode;
use netlab_catalog::error::CatalogError;
use netlab_catalog_schema::{active_interfaces, active_labs, active_nodes};

use crate::helpers::{catalog, running, seed_user};

#[tokio::test]
async fn should_store_lab_with_nodes_and_interfaces() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;
    let (lab, nodes, interfaces) = running("ospf", "alice", &[10, 11]);

    catalog
        .active_labs()
        .create(&lab, &nodes, &interfaces)
        .await
        .unwrap();

    assert_eq!(
        catalog.active_labs().find("ospf", "alice").await.unwrap(),
        Some(lab)
    );
    assert_eq!(
        catalog.active_nodes().list_by_lab("ospf", "alice").await.unwrap(),
        nodes
    );
    let ifaces = catalog.active_interfaces().list_by_node(10).await.unwrap();
    assert_eq!(ifaces.len(), 2);
    assert_eq!(ifaces[0].dst_label, Some(11));
    assert_eq!(ifaces[0].dst_if, Some(2));
}

#[tokio::test]
async fn should_reach_nodes_and_interfaces_through_entity_relations() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;
    seed_user(&catalog, "bob").await;
    let (lab, nodes, interfaces) = running("ospf", "alice", &[10, 11]);
    catalog
        .active_labs()
        .create(&lab, &nodes, &interfaces)
        .await
        .unwrap();
    let (other, other_nodes, other_ifaces) = running("ospf", "bob", &[12]);
    catalog
        .active_labs()
        .create(&other, &other_nodes, &other_ifaces)
        .await
        .unwrap();

    let stored = active_labs::Entity::find_by_id(("ospf".to_owned(), "alice".to_owned()))
        .one(&catalog.db)
        .await
        .unwrap()
        .unwrap();
    let mut labels: Vec<i32> = stored
        .find_related(active_nodes::Entity)
        .all(&catalog.db)
        .await
        .unwrap()
        .into_iter()
        .map(|node| node.label)
        .collect();
    labels.sort();
    assert_eq!(labels, [10, 11]);

    let node = active_nodes::Entity::find_by_id(10)
        .one(&catalog.db)
        .await
        .unwrap()
        .unwrap();
    let ifaces: Vec<active_interfaces::Model> = node
        .find_related(active_interfaces::Entity)
        .all(&catalog.db)
        .await
        .unwrap();
    assert_eq!(ifaces.len(), 2);
    assert!(ifaces.iter().all(|iface| iface.label == 10));
}

#[tokio::test]
async fn should_allow_same_lab_for_different_users() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;
    seed_user(&catalog, "bob").await;

    let (a, a_nodes, a_ifaces) = running("ospf", "alice", &[1]);
    let (b, b_nodes, b_ifaces) = running("ospf", "bob", &[2]);
    catalog.active_labs().create(&a, &a_nodes, &a_ifaces).await.unwrap();
    catalog.active_labs().create(&b, &b_nodes, &b_ifaces).await.unwrap();

    assert_eq!(catalog.active_labs().list_by_user("alice").await.unwrap(), vec![a]);
    assert_eq!(catalog.active_labs().list_by_user("bob").await.unwrap(), vec![b]);
}

#[tokio::test]
async fn should_reject_duplicate_active_lab() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;
    let (lab, nodes, interfaces) = running("ospf", "alice", &[1]);
    catalog
        .active_labs()
        .create(&lab, &nodes, &interfaces)
        .await
        .unwrap();

    let err = catalog
        .active_labs()
        .create(&lab, &[], &[])
        .await
        .unwrap_err();
    assert!(
        matches!(err, CatalogError::UniqueViolation(_)),
        "expected UniqueViolation, got {err:?}"
    );
}

#[tokio::test]
async fn should_reject_active_lab_for_unknown_user() {
    let catalog = catalog().await;
    let (lab, _, _) = running("ospf", "ghost", &[]);

    let err = catalog.active_labs().create(&lab, &[], &[]).await.unwrap_err();
    assert_eq!(err.kind(), "FOREIGN_KEY_VIOLATION");
}

#[tokio::test]
async fn should_roll_back_when_a_node_points_elsewhere() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;
    let (lab, mut nodes, _) = running("ospf", "alice", &[1]);
    nodes.push(ActiveNode {
        label: 2,
        lab_id: Some("bgp".to_owned()),
        ..nodes[0].clone()
    });

    let err = catalog.active_labs().create(&lab, &nodes, &[]).await.unwrap_err();
    assert_eq!(err.kind(), "FOREIGN_KEY_VIOLATION");

    assert!(catalog.active_labs().find("ospf", "alice").await.unwrap().is_none());
    assert!(catalog.active_nodes().find(1).await.unwrap().is_none());
}

#[tokio::test]
async fn should_delete_nodes_and_interfaces_with_active_lab() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;
    seed_user(&catalog, "bob").await;
    let (lab, nodes, interfaces) = running("ospf", "alice", &[1, 2, 3]);
    catalog
        .active_labs()
        .create(&lab, &nodes, &interfaces)
        .await
        .unwrap();
    let (other, other_nodes, other_ifaces) = running("ospf", "bob", &[4]);
    catalog
        .active_labs()
        .create(&other, &other_nodes, &other_ifaces)
        .await
        .unwrap();

    assert!(catalog.active_labs().delete("ospf", "alice").await.unwrap());
    assert!(!catalog.active_labs().delete("ospf", "alice").await.unwrap());

    assert!(
        catalog
            .active_nodes()
            .list_by_lab("ospf", "alice")
            .await
            .unwrap()
            .is_empty()
    );
    for label in [1, 2, 3] {
        assert!(
            catalog
                .active_interfaces()
                .list_by_node(label)
                .await
                .unwrap()
                .is_empty()
        );
    }
    assert_eq!(
        catalog.active_nodes().list_by_lab("ospf", "bob").await.unwrap(),
        other_nodes
    );
    assert_eq!(
        catalog.active_interfaces().list_by_node(4).await.unwrap().len(),
        2
    );
}

#[tokio::test]
async fn should_cascade_when_active_lab_row_is_deleted_directly() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;
    let (lab, nodes, interfaces) = running("ospf", "alice", &[7, 8]);
    catalog
        .active_labs()
        .create(&lab, &nodes, &interfaces)
        .await
        .unwrap();

    let result = active_labs::Entity::delete_by_id(("ospf".to_owned(), "alice".to_owned()))
        .exec(&catalog.db)
        .await
        .unwrap();
    assert_eq!(result.rows_affected, 1);

    assert!(catalog.active_nodes().find(7).await.unwrap().is_none());
    assert!(catalog.active_nodes().find(8).await.unwrap().is_none());
    assert!(
        catalog
            .active_interfaces()
            .list_by_node(7)
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(catalog.active_nodes().count_by_user("alice").await.unwrap(), 0);
}
