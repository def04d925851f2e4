use std::time::Duration;

use fusion_models::content::{Service, ServiceIcon};
use fusion_persistence_contracts::{services::ServiceRepository, Database, Transaction};
use fusion_persistence_postgres::services::PostgresServiceRepository;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::common::{consultoria, desenvolvimento, services, setup, ts, UNKNOWN_ID};

const REPO: PostgresServiceRepository = PostgresServiceRepository;

#[tokio::test]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list(&mut txn).await.unwrap();

    assert_eq!(result, services());
}

#[tokio::test]
async fn list_active() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list_active(&mut txn).await.unwrap();

    assert_eq!(result, [consultoria(), desenvolvimento()]);
}

#[tokio::test]
async fn create() {
    let db = setup().await;

    let service = Service {
        id: Uuid::from_u128(0x98).into(),
        name: "Aplicativos".to_owned().try_into().unwrap(),
        description: "Aplicativos para Android e iOS"
            .to_owned()
            .try_into()
            .unwrap(),
        icon: ServiceIcon::Mobile,
        active: true,
        created: ts(17),
        updated: ts(17),
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &service).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list(&mut txn).await.unwrap();
    assert_eq!(result.last(), Some(&service));
}

#[tokio::test]
async fn set_active() {
    let db = setup().await;

    let service = consultoria();
    let updated = service.updated + Duration::from_secs(3600);

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .set_active(&mut txn, service.id, false, updated)
        .await
        .unwrap();
    assert!(result);
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list_active(&mut txn).await.unwrap();
    assert_eq!(result, [desenvolvimento()]);

    let result = REPO
        .set_active(&mut txn, UNKNOWN_ID.into(), true, updated)
        .await
        .unwrap();
    assert!(!result);
}
