use bb8_postgres::tokio_postgres::Row;
use chrono::{DateTime, Utc};
use fusion_models::content::{Role, RoleId};
use fusion_persistence_contracts::roles::RoleRepository;
use uuid::Uuid;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresRoleRepository;

columns!(roles as "r": "id", "title", "active", "created", "updated");

impl RoleRepository<PostgresTransaction> for PostgresRoleRepository {
    async fn list(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<Role>> {
        txn.txn()
            .query(
                &format!("select {ROLES_COLS} from roles r order by r.created"),
                &[],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_role(&row, &mut Default::default()))
                    .collect()
            })
    }

    async fn get(&self, txn: &mut PostgresTransaction, id: RoleId) -> anyhow::Result<Option<Role>> {
        txn.txn()
            .query_opt(
                &format!("select {ROLES_COLS} from roles r where r.id = $1"),
                &[&*id],
            )
            .await?
            .map(|row| decode_role(&row, &mut Default::default()))
            .transpose()
    }

    async fn create(&self, txn: &mut PostgresTransaction, role: &Role) -> anyhow::Result<()> {
        txn.txn()
            .execute(
                &format!(
                    "insert into roles ({ROLES_COL_NAMES}) values ({})",
                    arg_indices(1..=ROLES_CNT)
                ),
                &[
                    &*role.id,
                    &role.title.as_str(),
                    &role.active,
                    &role.created,
                    &role.updated,
                ],
            )
            .await?;

        Ok(())
    }

    async fn set_active(
        &self,
        txn: &mut PostgresTransaction,
        id: RoleId,
        active: bool,
        updated: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        let updated_rows = txn
            .txn()
            .execute(
                "update roles set active = $2, updated = $3 where id = $1",
                &[&*id, &active, &updated],
            )
            .await?;

        Ok(updated_rows == 1)
    }
}

fn decode_role(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<Role> {
    Ok(Role {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        title: row.get::<_, String>(cnt.idx()).try_into()?,
        active: row.get(cnt.idx()),
        created: row.get(cnt.idx()),
        updated: row.get(cnt.idx()),
    })
}
