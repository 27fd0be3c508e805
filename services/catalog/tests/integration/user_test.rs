use netlab_catalog::domain::repository::{RoleRepository, UserRepository};
use netlab_catalog::domain::types::{Role, User};
use netlab_catalog::error::CatalogError;

use crate::helpers::{catalog, seed_user, user};

#[tokio::test]
async fn should_find_user_by_username_and_email() {
    let catalog = catalog().await;
    let alice = seed_user(&catalog, "alice").await;

    let by_name = catalog.users().find_by_username("alice").await.unwrap();
    assert_eq!(by_name, Some(alice.clone()));

    let by_email = catalog
        .users()
        .find_by_email("alice@lab.example")
        .await
        .unwrap();
    assert_eq!(by_email, Some(alice));

    assert!(
        catalog
            .users()
            .find_by_username("nobody")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;

    let clash = User {
        email: Some("alice@lab.example".to_owned()),
        ..user("bob")
    };
    let err = catalog.users().create(&clash).await.unwrap_err();
    assert!(
        matches!(err, CatalogError::UniqueViolation(_)),
        "expected UniqueViolation, got {err:?}"
    );
}

#[tokio::test]
async fn should_reject_duplicate_username() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;

    let again = User {
        email: Some("other@lab.example".to_owned()),
        ..user("alice")
    };
    let err = catalog.users().create(&again).await.unwrap_err();
    assert_eq!(err.kind(), "UNIQUE_VIOLATION");
}

#[tokio::test]
async fn should_allow_many_users_without_email() {
    let catalog = catalog().await;
    for name in ["carol", "dave"] {
        let user = User {
            email: None,
            ..user(name)
        };
        catalog.users().create(&user).await.unwrap();
    }
    assert_eq!(catalog.users().list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn should_update_user_columns() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;

    let changed = User {
        name: Some("Alice Liddell".to_owned()),
        email: None,
        labels: Some(5),
        ..user("alice")
    };
    assert!(catalog.users().update(&changed).await.unwrap());

    let stored = catalog.users().find_by_username("alice").await.unwrap();
    assert_eq!(stored, Some(changed));
}

#[tokio::test]
async fn should_report_missing_user_on_update_and_delete() {
    let catalog = catalog().await;
    assert!(!catalog.users().update(&user("ghost")).await.unwrap());
    assert!(!catalog.users().delete("ghost").await.unwrap());
}

#[tokio::test]
async fn should_remove_grants_when_user_deleted() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;
    catalog
        .roles()
        .create(&Role {
            role: "admin".to_owned(),
            access_to: Some("*".to_owned()),
            can_write: Some(true),
        })
        .await
        .unwrap();
    catalog.roles().grant("admin", "alice").await.unwrap();

    assert!(catalog.users().delete("alice").await.unwrap());

    assert!(catalog.roles().list_users("admin").await.unwrap().is_empty());
    assert!(catalog.roles().find("admin").await.unwrap().is_some());
}

#[tokio::test]
async fn should_list_users_in_username_order() {
    let catalog = catalog().await;
    for name in ["mallory", "alice", "bob"] {
        seed_user(&catalog, name).await;
    }
    let names: Vec<String> = catalog
        .users()
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(names, ["alice", "bob", "mallory"]);
}
