//! Platform statistics shown on the dashboard header

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(alias = "totalUsers")]
    pub total_users: u64,
    #[serde(alias = "dailyAnalyses")]
    pub daily_analyses: u64,
    #[serde(alias = "activeSubscriptions")]
    pub active_subscriptions: u64,
}

impl DashboardStats {
    /// Figures used by the demo dataset
    pub fn demo() -> Self {
        Self {
            total_users: 156,
            daily_analyses: 423,
            active_subscriptions: 45,
        }
    }
}
