use std::time::Duration;

use fusion_models::content::{TeamMember, TeamMemberProfile};
use fusion_persistence_contracts::{
    team_members::{TeamMemberRepoError, TeamMemberRepository},
    Database, Transaction,
};
use fusion_persistence_postgres::team_members::PostgresTeamMemberRepository;
use fusion_utils::assert_matches;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::common::{ana, bruno, designer, developer, setup, team_members, ts, UNKNOWN_ID};

const REPO: PostgresTeamMemberRepository = PostgresTeamMemberRepository;

#[tokio::test]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list(&mut txn).await.unwrap();

    assert_eq!(result, team_members());
}

#[tokio::test]
async fn list_active_profiles() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list_active_profiles(&mut txn).await.unwrap();

    assert_eq!(
        result,
        [
            TeamMemberProfile {
                member: ana(),
                role_title: designer().title,
            },
            TeamMemberProfile {
                member: bruno(),
                role_title: developer().title,
            },
        ]
    );
}

#[tokio::test]
async fn create() {
    let db = setup().await;

    let member = TeamMember {
        id: Uuid::from_u128(0x97).into(),
        name: "Diego Castro".to_owned().try_into().unwrap(),
        role_id: developer().id,
        bio: "Novo reforço do time.".to_owned().try_into().unwrap(),
        image_url: None,
        facebook: Default::default(),
        twitter: Default::default(),
        instagram: Default::default(),
        active: true,
        created: ts(18),
        updated: ts(18),
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &member).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list(&mut txn).await.unwrap();
    assert_eq!(result.last(), Some(&member));
}

#[tokio::test]
async fn create_with_unknown_role() {
    let db = setup().await;

    let member = TeamMember {
        id: Uuid::from_u128(0x96).into(),
        role_id: UNKNOWN_ID.into(),
        ..ana()
    };

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.create(&mut txn, &member).await;

    assert_matches!(result, Err(TeamMemberRepoError::RoleNotFound));
}

#[tokio::test]
async fn set_active() {
    let db = setup().await;

    let member = ana();
    let updated = member.updated + Duration::from_secs(3600);

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .set_active(&mut txn, member.id, false, updated)
        .await
        .unwrap();
    assert!(result);
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list_active_profiles(&mut txn).await.unwrap();
    assert_eq!(
        result,
        [TeamMemberProfile {
            member: bruno(),
            role_title: developer().title,
        }]
    );

    let result = REPO
        .set_active(&mut txn, UNKNOWN_ID.into(), true, updated)
        .await
        .unwrap();
    assert!(!result);
}
