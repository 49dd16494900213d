//! Collection-wide aggregation for the dashboard headline cards

use serde::Serialize;

use crate::domain::contract::{ContractStatus, ContractSummary, RiskLevel};

/// Counts per lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub active: usize,
    pub renewal_due: usize,
    pub expired: usize,
    pub draft: usize,
}

/// Counts per risk level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Aggregation over the unfiltered collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ContractStats {
    pub total: usize,
    pub by_status: StatusCounts,
    pub by_risk: RiskCounts,
}

impl ContractStats {
    pub fn from_summaries(contracts: &[ContractSummary]) -> Self {
        let mut stats = Self {
            total: contracts.len(),
            ..Default::default()
        };

        for contract in contracts {
            match contract.status {
                ContractStatus::Active => stats.by_status.active += 1,
                ContractStatus::RenewalDue => stats.by_status.renewal_due += 1,
                ContractStatus::Expired => stats.by_status.expired += 1,
                ContractStatus::Draft => stats.by_status.draft += 1,
            }

            match contract.risk {
                RiskLevel::High => stats.by_risk.high += 1,
                RiskLevel::Medium => stats.by_risk.medium += 1,
                RiskLevel::Low => stats.by_risk.low += 1,
            }
        }

        stats
    }

    /// Share of the total as a percentage; 0 for an empty collection.
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.total as f64
    }
}
