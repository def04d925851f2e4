use std::future::Future;

use chrono::{DateTime, Utc};
use fusion_models::content::{Service, ServiceId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ServiceRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns all services, active and inactive.
    fn list(&self, txn: &mut Txn) -> impl Future<Output = anyhow::Result<Vec<Service>>> + Send;

    /// Returns only active services.
    fn list_active(
        &self,
        txn: &mut Txn,
    ) -> impl Future<Output = anyhow::Result<Vec<Service>>> + Send;

    fn create(
        &self,
        txn: &mut Txn,
        service: &Service,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Soft-(de)activates a service. Returns `false` if the service does not
    /// exist.
    fn set_active(
        &self,
        txn: &mut Txn,
        id: ServiceId,
        active: bool,
        updated: DateTime<Utc>,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}
