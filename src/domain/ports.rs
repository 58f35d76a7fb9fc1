use chrono::{DateTime, Utc};

use crate::domain::model::SeverancePolicy;

/// Source of "now" for termination timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant. Used by tests and for replaying scenarios.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn severance_policy(&self) -> SeverancePolicy;
    fn json_logs(&self) -> bool;
}
