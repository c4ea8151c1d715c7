use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Configuration;
use crate::utils::date::whole_days_between;

// FinePolicy holds the grace period and daily rate used when an item comes back
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct FinePolicy {
    pub grace_period_days: i64,
    pub fine_per_day: u64,
}

impl FinePolicy {
    /// Days past the grace period, never negative.
    pub fn days_overdue(&self, borrowed_at: NaiveDateTime, returned_at: NaiveDateTime) -> u64 {
        let kept = whole_days_between(borrowed_at, returned_at);
        u64::try_from(kept.saturating_sub(self.grace_period_days)).unwrap_or(0)
    }

    pub fn fine_for(&self, days_overdue: u64) -> u64 {
        days_overdue.saturating_mul(self.fine_per_day)
    }
}

impl Default for FinePolicy {
    fn default() -> Self {
        FinePolicy::from(&Configuration::default())
    }
}

impl From<&Configuration> for FinePolicy {
    fn from(config: &Configuration) -> Self {
        Self {
            grace_period_days: config.grace_period_days,
            fine_per_day: config.fine_per_day,
        }
    }
}
