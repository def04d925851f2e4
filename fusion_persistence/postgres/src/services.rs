use bb8_postgres::tokio_postgres::Row;
use chrono::{DateTime, Utc};
use fusion_models::content::{Service, ServiceId};
use fusion_persistence_contracts::services::ServiceRepository;
use uuid::Uuid;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresServiceRepository;

columns!(services as "s": "id", "name", "description", "icon", "active", "created", "updated");

impl ServiceRepository<PostgresTransaction> for PostgresServiceRepository {
    async fn list(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<Service>> {
        list_where(txn, "true").await
    }

    async fn list_active(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<Service>> {
        list_where(txn, "s.active").await
    }

    async fn create(&self, txn: &mut PostgresTransaction, service: &Service) -> anyhow::Result<()> {
        txn.txn()
            .execute(
                &format!(
                    "insert into services ({SERVICES_COL_NAMES}) values ({})",
                    arg_indices(1..=SERVICES_CNT)
                ),
                &[
                    &*service.id,
                    &service.name.as_str(),
                    &service.description.as_str(),
                    &service.icon.as_str(),
                    &service.active,
                    &service.created,
                    &service.updated,
                ],
            )
            .await?;

        Ok(())
    }

    async fn set_active(
        &self,
        txn: &mut PostgresTransaction,
        id: ServiceId,
        active: bool,
        updated: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        let updated_rows = txn
            .txn()
            .execute(
                "update services set active = $2, updated = $3 where id = $1",
                &[&*id, &active, &updated],
            )
            .await?;

        Ok(updated_rows == 1)
    }
}

async fn list_where(txn: &mut PostgresTransaction, cond: &str) -> anyhow::Result<Vec<Service>> {
    txn.txn()
        .query(
            &format!("select {SERVICES_COLS} from services s where {cond} order by s.created"),
            &[],
        )
        .await
        .map_err(Into::into)
        .and_then(|rows| {
            rows.into_iter()
                .map(|row| decode_service(&row, &mut Default::default()))
                .collect()
        })
}

fn decode_service(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<Service> {
    Ok(Service {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        name: row.get::<_, String>(cnt.idx()).try_into()?,
        description: row.get::<_, String>(cnt.idx()).try_into()?,
        icon: row.get::<_, String>(cnt.idx()).parse()?,
        active: row.get(cnt.idx()),
        created: row.get(cnt.idx()),
        updated: row.get(cnt.idx()),
    })
}
