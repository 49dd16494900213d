//! Contract source trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::Contract;
use crate::domain::DomainError;

/// A source of the full contract collection.
///
/// The upstream feed is a single static document, so one read operation is
/// the whole wire contract: fetch everything, all-or-nothing.
#[async_trait]
pub trait ContractSource: Send + Sync + Debug {
    /// Fetch the full contract collection in document order
    async fn fetch_all(&self) -> Result<Vec<Contract>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// Mock contract source for testing.
    ///
    /// Counts fetches so cache tests can assert how many round-trips
    /// actually happened.
    #[derive(Debug, Default)]
    pub struct MockContractSource {
        contracts: Mutex<Vec<Contract>>,
        error: Mutex<Option<String>>,
        fetch_count: AtomicUsize,
    }

    impl MockContractSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_contracts(self, contracts: Vec<Contract>) -> Self {
            *self.contracts.lock().unwrap() = contracts;
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        /// Replace the failure mode after construction
        pub fn set_error(&self, error: Option<String>) {
            *self.error.lock().unwrap() = error;
        }

        pub fn fetch_count(&self) -> usize {
            self.fetch_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContractSource for MockContractSource {
        async fn fetch_all(&self) -> Result<Vec<Contract>, DomainError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);

            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(DomainError::fetch(error));
            }

            Ok(self.contracts.lock().unwrap().clone())
        }
    }
}
