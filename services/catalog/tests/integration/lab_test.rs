use netlab_catalog::domain::repository::{LabRepository, SourceRepository};
use netlab_catalog::domain::types::{Lab, Repository};
use netlab_catalog::error::CatalogError;

use crate::helpers::{catalog, lab};

fn source(name: &str) -> Repository {
    Repository {
        repository: name.to_owned(),
        url: Some(format!("https://git.example/{name}.git")),
        username: Some("deploy".to_owned()),
        password: Some("token-1".to_owned()),
    }
}

#[tokio::test]
async fn should_replace_repository_credentials_on_upsert() {
    let catalog = catalog().await;
    catalog.repositories().upsert(&source("local")).await.unwrap();

    let rotated = Repository {
        password: Some("token-2".to_owned()),
        ..source("local")
    };
    catalog.repositories().upsert(&rotated).await.unwrap();

    assert_eq!(catalog.repositories().list().await.unwrap(), vec![rotated]);
}

#[tokio::test]
async fn should_replace_lab_on_upsert() {
    let catalog = catalog().await;
    catalog.labs().upsert(&lab("ospf")).await.unwrap();

    let next = Lab {
        version: Some(2),
        json: Some(r#"{"nodes":{"1":{}}}"#.to_owned()),
        ..lab("ospf")
    };
    catalog.labs().upsert(&next).await.unwrap();

    assert_eq!(catalog.labs().find("ospf").await.unwrap(), Some(next));
    assert_eq!(catalog.labs().list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_list_labs_by_repository() {
    let catalog = catalog().await;
    catalog.repositories().upsert(&source("community")).await.unwrap();
    for id in ["bgp", "ospf"] {
        let lab = Lab {
            repository: Some("community".to_owned()),
            ..lab(id)
        };
        catalog.labs().upsert(&lab).await.unwrap();
    }
    catalog.labs().upsert(&lab("scratch")).await.unwrap();

    let ids: Vec<String> = catalog
        .labs()
        .list_by_repository("community")
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, ["bgp", "ospf"]);
}

#[tokio::test]
async fn should_reject_lab_for_unknown_repository() {
    let catalog = catalog().await;
    let orphan = Lab {
        repository: Some("missing".to_owned()),
        ..lab("ospf")
    };

    let err = catalog.labs().upsert(&orphan).await.unwrap_err();
    assert!(
        matches!(err, CatalogError::ForeignKeyViolation(_)),
        "expected ForeignKeyViolation, got {err:?}"
    );
}

#[tokio::test]
async fn should_refuse_deleting_referenced_repository() {
    let catalog = catalog().await;
    catalog.repositories().upsert(&source("community")).await.unwrap();
    let lab = Lab {
        repository: Some("community".to_owned()),
        ..lab("ospf")
    };
    catalog.labs().upsert(&lab).await.unwrap();

    let err = catalog.repositories().delete("community").await.unwrap_err();
    assert_eq!(err.kind(), "FOREIGN_KEY_VIOLATION");

    assert!(catalog.labs().delete("ospf").await.unwrap());
    assert!(catalog.repositories().delete("community").await.unwrap());
    assert!(catalog.repositories().find("community").await.unwrap().is_none());
}

#[tokio::test]
async fn should_parse_stored_topology() {
    let catalog = catalog().await;
    catalog.labs().upsert(&lab("ospf")).await.unwrap();

    let stored = catalog.labs().find("ospf").await.unwrap().unwrap();
    let topology = stored.topology().unwrap().unwrap();
    assert!(topology["nodes"].is_object());
}
