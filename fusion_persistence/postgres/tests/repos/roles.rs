use std::time::Duration;

use fusion_models::content::Role;
use fusion_persistence_contracts::{roles::RoleRepository, Database, Transaction};
use fusion_persistence_postgres::roles::PostgresRoleRepository;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::common::{designer, roles, setup, ts, UNKNOWN_ID};

const REPO: PostgresRoleRepository = PostgresRoleRepository;

#[tokio::test]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list(&mut txn).await.unwrap();

    assert_eq!(result, roles());
}

#[tokio::test]
async fn get() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for role in roles() {
        let result = REPO.get(&mut txn, role.id).await.unwrap();
        assert_eq!(result, Some(role));
    }

    let result = REPO.get(&mut txn, UNKNOWN_ID.into()).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn create() {
    let db = setup().await;

    let role = Role {
        id: Uuid::from_u128(0x99).into(),
        title: "Gerente de Projetos".to_owned().try_into().unwrap(),
        active: true,
        created: ts(16),
        updated: ts(16),
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &role).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    assert_eq!(REPO.get(&mut txn, role.id).await.unwrap(), Some(role));
}

#[tokio::test]
async fn set_active() {
    let db = setup().await;

    let role = designer();
    let updated = role.updated + Duration::from_secs(3600);

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .set_active(&mut txn, role.id, false, updated)
        .await
        .unwrap();
    assert!(result);
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.get(&mut txn, role.id).await.unwrap().unwrap();
    assert!(!result.active);
    assert_eq!(result.updated, updated);

    let result = REPO
        .set_active(&mut txn, UNKNOWN_ID.into(), true, updated)
        .await
        .unwrap();
    assert!(!result);
}
