//! HTTP contract source backed by the static upstream feed

use async_trait::async_trait;
use tracing::debug;

use crate::domain::contract::{Contract, ContractSource};
use crate::domain::DomainError;

/// Fetches the contract collection from a static JSON document over HTTP.
///
/// The feed is read-only and all-or-nothing: a non-success status or an
/// unparseable body fails the whole fetch. No retries are attempted here;
/// a failed fetch simply becomes retryable on the next access.
#[derive(Debug)]
pub struct HttpContractSource {
    client: reqwest::Client,
    url: String,
}

impl HttpContractSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ContractSource for HttpContractSource {
    async fn fetch_all(&self) -> Result<Vec<Contract>, DomainError> {
        debug!("Fetching contract feed from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::fetch(format!("Request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::fetch(format!(
                "Contract feed returned HTTP status {}",
                status
            )));
        }

        let contracts: Vec<Contract> = response
            .json()
            .await
            .map_err(|e| DomainError::fetch(format!("Invalid contract feed body: {}", e)))?;

        debug!("Fetched {} contracts", contracts.len());
        Ok(contracts)
    }
}
