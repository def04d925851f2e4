use std::future::Future;

use chrono::{DateTime, Utc};
use fusion_models::content::{TeamMember, TeamMemberId, TeamMemberProfile};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TeamMemberRepoError {
    #[error("The referenced role does not exist.")]
    RoleNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TeamMemberRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns all team members, active and inactive.
    fn list(&self, txn: &mut Txn) -> impl Future<Output = anyhow::Result<Vec<TeamMember>>> + Send;

    /// Returns active team members joined with the title of their role.
    fn list_active_profiles(
        &self,
        txn: &mut Txn,
    ) -> impl Future<Output = anyhow::Result<Vec<TeamMemberProfile>>> + Send;

    fn create(
        &self,
        txn: &mut Txn,
        member: &TeamMember,
    ) -> impl Future<Output = Result<(), TeamMemberRepoError>> + Send;

    /// Soft-(de)activates a team member. Returns `false` if the member does
    /// not exist.
    fn set_active(
        &self,
        txn: &mut Txn,
        id: TeamMemberId,
        active: bool,
        updated: DateTime<Utc>,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}
