use chrono::{DateTime, Utc};
use fusion_shared_contracts::time::TimeService;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
