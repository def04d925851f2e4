use std::future::Future;

use chrono::{DateTime, Utc};
use fusion_models::content::{Role, RoleId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RoleRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns all roles, active and inactive.
    fn list(&self, txn: &mut Txn) -> impl Future<Output = anyhow::Result<Vec<Role>>> + Send;

    fn get(
        &self,
        txn: &mut Txn,
        id: RoleId,
    ) -> impl Future<Output = anyhow::Result<Option<Role>>> + Send;

    fn create(&self, txn: &mut Txn, role: &Role)
        -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Soft-(de)activates a role. Returns `false` if the role does not exist.
    fn set_active(
        &self,
        txn: &mut Txn,
        id: RoleId,
        active: bool,
        updated: DateTime<Utc>,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}
