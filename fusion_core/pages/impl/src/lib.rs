use anyhow::Context;
use fusion_core_pages_contracts::{IndexPage, PagesFeatureService};
use fusion_persistence_contracts::{
    services::ServiceRepository, team_members::TeamMemberRepository, Database,
};
use rand::seq::SliceRandom;

#[derive(Debug, Clone)]
pub struct PagesFeatureServiceImpl<Db, ServiceRepo, TeamMemberRepo> {
    db: Db,
    service_repo: ServiceRepo,
    team_member_repo: TeamMemberRepo,
}

impl<Db, ServiceRepo, TeamMemberRepo> PagesFeatureServiceImpl<Db, ServiceRepo, TeamMemberRepo> {
    pub fn new(db: Db, service_repo: ServiceRepo, team_member_repo: TeamMemberRepo) -> Self {
        Self {
            db,
            service_repo,
            team_member_repo,
        }
    }
}

impl<Db, ServiceRepo, TeamMemberRepo> PagesFeatureService
    for PagesFeatureServiceImpl<Db, ServiceRepo, TeamMemberRepo>
where
    Db: Database,
    ServiceRepo: ServiceRepository<Db::Transaction>,
    TeamMemberRepo: TeamMemberRepository<Db::Transaction>,
{
    #[tracing::instrument(skip(self))]
    async fn get_index(&self) -> anyhow::Result<IndexPage> {
        let mut txn = self
            .db
            .begin_transaction()
            .await
            .context("Failed to begin transaction")?;

        let mut services = self
            .service_repo
            .list_active(&mut txn)
            .await
            .context("Failed to get services from database")?;

        let mut team = self
            .team_member_repo
            .list_active_profiles(&mut txn)
            .await
            .context("Failed to get team members from database")?;

        // read-only, the transaction is dropped (and rolled back) here
        let mut rng = rand::thread_rng();
        services.shuffle(&mut rng);
        team.shuffle(&mut rng);

        Ok(IndexPage { services, team })
    }
}
