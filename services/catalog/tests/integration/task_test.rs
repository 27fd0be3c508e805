use netlab_catalog::domain::repository::TaskRepository;
use netlab_catalog::domain::types::Task;
use netlab_catalog::error::CatalogError;

use crate::helpers::{catalog, seed_user};

#[tokio::test]
async fn should_reject_task_for_unknown_user() {
    let catalog = catalog().await;

    let err = catalog
        .tasks()
        .create(&Task::new(Some("ghost".to_owned())))
        .await
        .unwrap_err();
    assert!(
        matches!(err, CatalogError::ForeignKeyViolation(_)),
        "expected ForeignKeyViolation, got {err:?}"
    );
}

#[tokio::test]
async fn should_accept_task_without_owner() {
    let catalog = catalog().await;
    let task = Task::new(None);

    catalog.tasks().create(&task).await.unwrap();

    assert_eq!(catalog.tasks().find(&task.id).await.unwrap(), Some(task));
}

#[tokio::test]
async fn should_update_task_progress() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;
    let task = Task::new(Some("alice".to_owned()));
    catalog.tasks().create(&task).await.unwrap();

    assert!(
        catalog
            .tasks()
            .update_progress(&task.id, "running", Some("starting nodes"), 40)
            .await
            .unwrap()
    );
    assert!(
        !catalog
            .tasks()
            .update_progress("missing", "running", None, 10)
            .await
            .unwrap()
    );

    let stored = catalog.tasks().find(&task.id).await.unwrap().unwrap();
    assert_eq!(stored.status.as_deref(), Some("running"));
    assert_eq!(stored.message.as_deref(), Some("starting nodes"));
    assert_eq!(stored.progress, Some(40));
    assert_eq!(stored.username.as_deref(), Some("alice"));
}

#[tokio::test]
async fn should_list_tasks_by_user() {
    let catalog = catalog().await;
    seed_user(&catalog, "alice").await;
    seed_user(&catalog, "bob").await;
    for owner in ["alice", "alice", "bob"] {
        catalog
            .tasks()
            .create(&Task::new(Some(owner.to_owned())))
            .await
            .unwrap();
    }

    assert_eq!(catalog.tasks().list_by_user("alice").await.unwrap().len(), 2);
    assert_eq!(catalog.tasks().list_by_user("bob").await.unwrap().len(), 1);
}
