use std::future::Future;

use fusion_models::content::{Service, TeamMemberProfile};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PagesFeatureService: Send + Sync + 'static {
    /// Returns the content displayed on the landing page: all active
    /// services and team members, in randomized order.
    fn get_index(&self) -> impl Future<Output = anyhow::Result<IndexPage>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexPage {
    pub services: Vec<Service>,
    pub team: Vec<TeamMemberProfile>,
}

#[cfg(feature = "mock")]
impl MockPagesFeatureService {
    pub fn with_get_index(mut self, page: IndexPage) -> Self {
        self.expect_get_index()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(page))));
        self
    }
}
