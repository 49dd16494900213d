//! List sorting by a single active key with direction toggle

use serde::Deserialize;

use crate::domain::contract::ContractSummary;

/// Column the list is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Expiry,
    Status,
    Risk,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sort summaries in place. The underlying sort is stable, so records with
/// equal keys keep their relative (document) order.
pub fn sort_contracts(contracts: &mut [ContractSummary], key: SortKey, order: SortOrder) {
    contracts.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Expiry => a.expiry.cmp(&b.expiry),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            SortKey::Risk => a.risk.severity_rank().cmp(&b.risk.severity_rank()),
        };

        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
