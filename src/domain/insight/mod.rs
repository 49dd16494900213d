//! Advisory insight generation for the contract detail view
//!
//! A fixed-order rule list over one contract's expiry, risk, and status.
//! Emission order is part of the contract: consumers snapshot it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::contract::{Contract, ContractStatus, RiskLevel};

/// Days before expiry under which the renewal alert fires
pub const RENEWAL_ALERT_WINDOW_DAYS: i64 = 30;

/// Severity of a generated advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Error,
    Warning,
    Success,
    Info,
}

/// A generated advisory message with a suggested follow-up action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub severity: InsightSeverity,
    pub title: String,
    pub description: String,
    pub action: String,
}

/// Whole days until the contract's expiry, negative once expired
pub fn days_until_expiry(contract: &Contract, today: NaiveDate) -> i64 {
    (contract.expiry() - today).num_days()
}

/// Evaluate the advisory rules against one contract.
///
/// Rules fire in fixed order: renewal alert, expired, high risk, draft
/// status, then the always-appended compliance check.
pub fn insights_for(contract: &Contract, today: NaiveDate) -> Vec<Insight> {
    let mut insights = Vec::new();
    let days_left = days_until_expiry(contract, today);

    if days_left > 0 && days_left < RENEWAL_ALERT_WINDOW_DAYS {
        insights.push(Insight {
            severity: InsightSeverity::Warning,
            title: "Renewal Alert".to_string(),
            description: format!(
                "Contract expires in {} days. Consider initiating renewal process soon.",
                days_left
            ),
            action: "Schedule renewal meeting".to_string(),
        });
    }

    if days_left < 0 {
        insights.push(Insight {
            severity: InsightSeverity::Error,
            title: "Contract Expired".to_string(),
            description: format!(
                "Contract expired {} days ago. Immediate action required.",
                days_left.abs()
            ),
            action: "Renew or terminate contract".to_string(),
        });
    }

    if contract.risk() == RiskLevel::High {
        insights.push(Insight {
            severity: InsightSeverity::Error,
            title: "High Risk Contract".to_string(),
            description: "This contract has been flagged as high risk. Review terms and conditions carefully.".to_string(),
            action: "Conduct risk assessment".to_string(),
        });
    }

    if contract.status() == ContractStatus::Draft {
        insights.push(Insight {
            severity: InsightSeverity::Info,
            title: "Draft Status".to_string(),
            description: "Contract is still in draft status. Finalize terms and activate when ready.".to_string(),
            action: "Review and activate".to_string(),
        });
    }

    insights.push(Insight {
        severity: InsightSeverity::Success,
        title: "Compliance Check".to_string(),
        description: "Contract appears to be compliant with current regulatory requirements."
            .to_string(),
        action: "No action needed".to_string(),
    });

    insights
}
