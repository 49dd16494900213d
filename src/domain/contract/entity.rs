//! Contract entity and related types
//!
//! Wire-compatible with the upstream `contracts.json` feed: status labels
//! keep their human-readable form (`"Renewal Due"`) and the nested
//! collections default to empty when absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContractStatus {
    Active,
    #[serde(rename = "Renewal Due")]
    RenewalDue,
    Expired,
    #[default]
    Draft,
}

impl ContractStatus {
    /// The wire/display label for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::RenewalDue => "Renewal Due",
            Self::Expired => "Expired",
            Self::Draft => "Draft",
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Assessed risk level of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RiskLevel {
    High,
    Medium,
    #[default]
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Fixed severity order used for sorting: Low < Medium < High
    pub fn severity_rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An extracted clause with its summary and extraction confidence in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub title: String,
    pub summary: String,
    pub confidence: f64,
}

/// A stored risk observation attached to a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractInsight {
    pub risk: RiskLevel,
    pub message: String,
}

/// Supporting evidence for a contract, with relevance in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub source: String,
    pub snippet: String,
    pub relevance: f64,
}

/// Full contract record as delivered by the upstream feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Unique, stable identifier
    id: String,
    name: String,
    parties: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<NaiveDate>,
    expiry: NaiveDate,
    status: ContractStatus,
    risk: RiskLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    clauses: Vec<Clause>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    insights: Vec<ContractInsight>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    evidence: Vec<Evidence>,
}

impl Contract {
    /// Create a new contract with empty nested collections
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        parties: impl Into<String>,
        expiry: NaiveDate,
        status: ContractStatus,
        risk: RiskLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parties: parties.into(),
            start: None,
            expiry,
            status,
            risk,
            clauses: Vec::new(),
            insights: Vec::new(),
            evidence: Vec::new(),
        }
    }

    pub fn with_start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_clauses(mut self, clauses: Vec<Clause>) -> Self {
        self.clauses = clauses;
        self
    }

    pub fn with_insights(mut self, insights: Vec<ContractInsight>) -> Self {
        self.insights = insights;
        self
    }

    pub fn with_evidence(mut self, evidence: Vec<Evidence>) -> Self {
        self.evidence = evidence;
        self
    }

    // Getters

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parties(&self) -> &str {
        &self.parties
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    pub fn status(&self) -> ContractStatus {
        self.status
    }

    pub fn risk(&self) -> RiskLevel {
        self.risk
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn insights(&self) -> &[ContractInsight] {
        &self.insights
    }

    pub fn evidence(&self) -> &[Evidence] {
        &self.evidence
    }

    /// Reduce to the list projection used by collection views
    pub fn summary(&self) -> ContractSummary {
        ContractSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            parties: self.parties.clone(),
            expiry: self.expiry,
            status: self.status,
            risk: self.risk,
        }
    }
}

/// List projection of a contract: the field subset collection views render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractSummary {
    pub id: String,
    pub name: String,
    pub parties: String,
    pub expiry: NaiveDate,
    pub status: ContractStatus,
    pub risk: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_wire_labels() {
        assert_eq!(
            serde_json::to_string(&ContractStatus::RenewalDue).unwrap(),
            "\"Renewal Due\""
        );
        assert_eq!(
            serde_json::from_str::<ContractStatus>("\"Renewal Due\"").unwrap(),
            ContractStatus::RenewalDue
        );
        assert_eq!(ContractStatus::Active.as_str(), "Active");
    }

    #[test]
    fn test_risk_severity_order() {
        assert!(RiskLevel::Low.severity_rank() < RiskLevel::Medium.severity_rank());
        assert!(RiskLevel::Medium.severity_rank() < RiskLevel::High.severity_rank());
    }

    #[test]
    fn test_contract_deserializes_without_nested_collections() {
        let json = r#"{
            "id": "c1",
            "name": "MSA",
            "parties": "Acme Corp & Globex",
            "expiry": "2026-12-31",
            "status": "Renewal Due",
            "risk": "Medium"
        }"#;

        let contract: Contract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.id(), "c1");
        assert_eq!(contract.status(), ContractStatus::RenewalDue);
        assert!(contract.start().is_none());
        assert!(contract.clauses().is_empty());
        assert!(contract.insights().is_empty());
        assert!(contract.evidence().is_empty());
    }

    #[test]
    fn test_summary_projection() {
        let contract = Contract::new(
            "c2",
            "SaaS Agreement",
            "Initech & Hooli",
            date(2027, 3, 1),
            ContractStatus::Active,
            RiskLevel::High,
        )
        .with_start(date(2025, 3, 1))
        .with_clauses(vec![Clause {
            title: "Termination".to_string(),
            summary: "90 day notice".to_string(),
            confidence: 0.92,
        }]);

        let summary = contract.summary();
        assert_eq!(summary.id, "c2");
        assert_eq!(summary.name, "SaaS Agreement");
        assert_eq!(summary.expiry, date(2027, 3, 1));
        assert_eq!(summary.risk, RiskLevel::High);

        // Projection drops the nested collections
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("clauses").is_none());
        assert!(json.get("start").is_none());
    }
}
