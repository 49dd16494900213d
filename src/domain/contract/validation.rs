//! Validation for new-contract drafts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::{ContractStatus, RiskLevel};

/// Draft of a contract submitted through the new-contract form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractDraft {
    pub name: String,
    pub parties: String,
    pub expiry: NaiveDate,
    #[serde(default)]
    pub status: ContractStatus,
    #[serde(default)]
    pub risk: RiskLevel,
}

/// Draft validation errors, one per form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftValidationError {
    #[error("Contract name is required")]
    NameRequired,

    #[error("Parties are required")]
    PartiesRequired,

    #[error("Expiry date must be in the future")]
    ExpiryNotFuture,
}

/// Validate a draft against `today`. Expiry must be strictly future-dated.
pub fn validate_draft(draft: &ContractDraft, today: NaiveDate) -> Result<(), DraftValidationError> {
    if draft.name.trim().is_empty() {
        return Err(DraftValidationError::NameRequired);
    }

    if draft.parties.trim().is_empty() {
        return Err(DraftValidationError::PartiesRequired);
    }

    if draft.expiry <= today {
        return Err(DraftValidationError::ExpiryNotFuture);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, parties: &str, expiry: NaiveDate) -> ContractDraft {
        ContractDraft {
            name: name.to_string(),
            parties: parties.to_string(),
            expiry,
            status: ContractStatus::Draft,
            risk: RiskLevel::Low,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    #[test]
    fn test_valid_draft() {
        let d = draft("NDA", "Acme & Initech", today() + chrono::Days::new(90));
        assert!(validate_draft(&d, today()).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let d = draft("   ", "Acme & Initech", today() + chrono::Days::new(1));
        assert_eq!(
            validate_draft(&d, today()),
            Err(DraftValidationError::NameRequired)
        );
    }

    #[test]
    fn test_blank_parties_rejected() {
        let d = draft("NDA", "", today() + chrono::Days::new(1));
        assert_eq!(
            validate_draft(&d, today()),
            Err(DraftValidationError::PartiesRequired)
        );
    }

    #[test]
    fn test_expiry_today_rejected() {
        let d = draft("NDA", "Acme & Initech", today());
        assert_eq!(
            validate_draft(&d, today()),
            Err(DraftValidationError::ExpiryNotFuture)
        );
    }

    #[test]
    fn test_expiry_past_rejected() {
        let d = draft("NDA", "Acme & Initech", today() - chrono::Days::new(1));
        assert_eq!(
            validate_draft(&d, today()),
            Err(DraftValidationError::ExpiryNotFuture)
        );
    }

    #[test]
    fn test_draft_defaults() {
        let d: ContractDraft = serde_json::from_str(
            r#"{"name":"NDA","parties":"Acme & Initech","expiry":"2027-01-01"}"#,
        )
        .unwrap();
        assert_eq!(d.status, ContractStatus::Draft);
        assert_eq!(d.risk, RiskLevel::Low);
    }
}
