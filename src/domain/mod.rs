//! Domain layer: entities, derived-state computations, and trait seams

pub mod contract;
pub mod insight;
pub mod query;
pub mod session;

mod error;

pub use error::DomainError;
