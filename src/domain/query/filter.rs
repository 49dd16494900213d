//! List filtering: search, status, and risk predicates in conjunction

use serde::Deserialize;

use crate::domain::contract::{ContractStatus, ContractSummary, RiskLevel};

/// Filter parameters for the contract list view.
///
/// All present predicates must pass. An absent predicate always passes,
/// so the default filter keeps everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    /// Case-insensitive substring over name OR parties
    pub search: Option<String>,
    pub status: Option<ContractStatus>,
    pub risk: Option<RiskLevel>,
}

impl ListFilter {
    pub fn matches(&self, contract: &ContractSummary) -> bool {
        let matches_search = match &self.search {
            Some(query) => {
                let query = query.to_lowercase();
                contract.name.to_lowercase().contains(&query)
                    || contract.parties.to_lowercase().contains(&query)
            }
            None => true,
        };

        let matches_status = self.status.is_none_or(|s| contract.status == s);
        let matches_risk = self.risk.is_none_or(|r| contract.risk == r);

        matches_search && matches_status && matches_risk
    }

    pub fn apply(&self, contracts: &[ContractSummary]) -> Vec<ContractSummary> {
        contracts
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}

/// Standalone search over name OR parties, case-insensitive substring.
///
/// By convention a blank query yields nothing rather than everything.
pub fn search(contracts: &[ContractSummary], query: &str) -> Vec<ContractSummary> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    ListFilter {
        search: Some(query.to_string()),
        ..Default::default()
    }
    .apply(contracts)
}
