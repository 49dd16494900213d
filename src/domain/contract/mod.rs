//! Contract entity, list projection, draft validation, and source trait

mod entity;
mod source;
mod validation;

pub use entity::{
    Clause, Contract, ContractInsight, ContractStatus, ContractSummary, Evidence, RiskLevel,
};
pub use source::ContractSource;
pub use validation::{validate_draft, ContractDraft, DraftValidationError};

#[cfg(test)]
pub use source::mock;
