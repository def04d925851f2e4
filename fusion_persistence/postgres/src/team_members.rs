use bb8_postgres::tokio_postgres::{error::SqlState, Row};
use chrono::{DateTime, Utc};
use fusion_models::content::{TeamMember, TeamMemberId, TeamMemberProfile};
use fusion_persistence_contracts::team_members::{TeamMemberRepoError, TeamMemberRepository};
use url::Url;
use uuid::Uuid;

use crate::{arg_indices, columns, decode_url, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresTeamMemberRepository;

columns!(team_members as "tm": "id", "name", "role_id", "bio", "image_url", "facebook", "twitter", "instagram", "active", "created", "updated");

impl TeamMemberRepository<PostgresTransaction> for PostgresTeamMemberRepository {
    async fn list(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<TeamMember>> {
        txn.txn()
            .query(
                &format!(
                    "select {TEAM_MEMBERS_COLS} from team_members tm order by tm.created"
                ),
                &[],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_team_member(&row, &mut Default::default()))
                    .collect()
            })
    }

    async fn list_active_profiles(
        &self,
        txn: &mut PostgresTransaction,
    ) -> anyhow::Result<Vec<TeamMemberProfile>> {
        txn.txn()
            .query(
                &format!(
                    "select {TEAM_MEMBERS_COLS}, r.title from team_members tm \
                     join roles r on r.id = tm.role_id \
                     where tm.active order by tm.created"
                ),
                &[],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| {
                        let mut cnt = ColumnCounter::default();
                        Ok(TeamMemberProfile {
                            member: decode_team_member(&row, &mut cnt)?,
                            role_title: row.get::<_, String>(cnt.idx()).try_into()?,
                        })
                    })
                    .collect()
            })
    }

    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        member: &TeamMember,
    ) -> Result<(), TeamMemberRepoError> {
        txn.txn()
            .execute(
                &format!(
                    "insert into team_members ({TEAM_MEMBERS_COL_NAMES}) values ({})",
                    arg_indices(1..=TEAM_MEMBERS_CNT)
                ),
                &[
                    &*member.id,
                    &member.name.as_str(),
                    &*member.role_id,
                    &member.bio.as_str(),
                    &member.image_url.as_ref().map(Url::as_str),
                    &member.facebook.as_str(),
                    &member.twitter.as_str(),
                    &member.instagram.as_str(),
                    &member.active,
                    &member.created,
                    &member.updated,
                ],
            )
            .await
            .map_err(|err| {
                if err
                    .as_db_error()
                    .is_some_and(|db| *db.code() == SqlState::FOREIGN_KEY_VIOLATION)
                {
                    TeamMemberRepoError::RoleNotFound
                } else {
                    TeamMemberRepoError::Other(err.into())
                }
            })?;

        Ok(())
    }

    async fn set_active(
        &self,
        txn: &mut PostgresTransaction,
        id: TeamMemberId,
        active: bool,
        updated: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        let updated_rows = txn
            .txn()
            .execute(
                "update team_members set active = $2, updated = $3 where id = $1",
                &[&*id, &active, &updated],
            )
            .await?;

        Ok(updated_rows == 1)
    }
}

fn decode_team_member(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<TeamMember> {
    Ok(TeamMember {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        name: row.get::<_, String>(cnt.idx()).try_into()?,
        role_id: row.get::<_, Uuid>(cnt.idx()).into(),
        bio: row.get::<_, String>(cnt.idx()).try_into()?,
        image_url: decode_url(row.get(cnt.idx()))?,
        facebook: row.get::<_, String>(cnt.idx()).try_into()?,
        twitter: row.get::<_, String>(cnt.idx()).try_into()?,
        instagram: row.get::<_, String>(cnt.idx()).try_into()?,
        active: row.get(cnt.idx()),
        created: row.get(cnt.idx()),
        updated: row.get(cnt.idx()),
    })
}
