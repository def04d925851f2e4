use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HealthFeatureService: Send + Sync + 'static {
    /// Returns the current health status of the application and the external
    /// systems it depends on.
    fn get_status(&self) -> impl Future<Output = HealthStatus> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub database: bool,
    pub email: bool,
}

#[cfg(feature = "mock")]
impl MockHealthFeatureService {
    pub fn with_get_status(mut self, status: HealthStatus) -> Self {
        self.expect_get_status()
            .once()
            .return_once(move || Box::pin(std::future::ready(status)));
        self
    }
}
