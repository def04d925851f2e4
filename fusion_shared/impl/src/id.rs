use fusion_shared_contracts::id::IdService;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    fn generate<I: From<Uuid> + 'static>(&self) -> I {
        Uuid::new_v4().into()
    }
}
