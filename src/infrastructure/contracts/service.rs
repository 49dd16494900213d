//! Contract service - derived read operations over the upstream feed
//!
//! All operations share one lazily-populated document cache so derived
//! reads (search, filters, lookups) within a process lifetime do not
//! re-fetch the static feed. This cache is separate from the shared
//! [`ContractStore`](crate::infrastructure::store::ContractStore); it has
//! no TTL of its own and is only replaced through [`ContractService::reload`].

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::contract::{
    validate_draft, Contract, ContractDraft, ContractSource, ContractStatus, ContractSummary,
    RiskLevel,
};
use crate::domain::query;
use crate::domain::DomainError;

#[derive(Debug)]
pub struct ContractService {
    source: Arc<dyn ContractSource>,
    document: Mutex<Option<Vec<Contract>>>,
}

impl ContractService {
    pub fn new(source: Arc<dyn ContractSource>) -> Self {
        Self {
            source,
            document: Mutex::new(None),
        }
    }

    /// The raw document, fetching it on first access.
    ///
    /// The lock is held across the fetch, so concurrent first reads share
    /// one round-trip instead of racing.
    async fn document(&self) -> Result<Vec<Contract>, DomainError> {
        let mut document = self.document.lock().await;

        if let Some(contracts) = document.as_ref() {
            return Ok(contracts.clone());
        }

        let contracts = self.source.fetch_all().await?;
        debug!("Loaded contract document with {} records", contracts.len());
        *document = Some(contracts.clone());
        Ok(contracts)
    }

    /// Force a fresh fetch, replacing the document cache on success.
    ///
    /// On failure the previous document (if any) is kept; the error is the
    /// caller's to surface.
    pub async fn reload(&self) -> Result<Vec<Contract>, DomainError> {
        let mut document = self.document.lock().await;
        let contracts = self.source.fetch_all().await?;
        debug!("Reloaded contract document with {} records", contracts.len());
        *document = Some(contracts.clone());
        Ok(contracts)
    }

    /// List all contracts as summaries, in document order
    pub async fn list(&self) -> Result<Vec<ContractSummary>, DomainError> {
        let contracts = self.document().await?;
        Ok(contracts.iter().map(Contract::summary).collect())
    }

    /// Get the full record for one contract
    pub async fn get(&self, id: &str) -> Result<Contract, DomainError> {
        let contracts = self.document().await?;
        contracts
            .into_iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("Contract '{}' not found", id)))
    }

    /// Case-insensitive substring search over name OR parties.
    ///
    /// A blank query yields an empty result set by convention.
    pub async fn search(&self, query_text: &str) -> Result<Vec<ContractSummary>, DomainError> {
        let summaries = self.list().await?;
        Ok(query::search(&summaries, query_text))
    }

    /// All contracts with exactly this status
    pub async fn by_status(
        &self,
        status: ContractStatus,
    ) -> Result<Vec<ContractSummary>, DomainError> {
        let summaries = self.list().await?;
        Ok(summaries.into_iter().filter(|c| c.status == status).collect())
    }

    /// All contracts with exactly this risk level
    pub async fn by_risk(&self, risk: RiskLevel) -> Result<Vec<ContractSummary>, DomainError> {
        let summaries = self.list().await?;
        Ok(summaries.into_iter().filter(|c| c.risk == risk).collect())
    }

    /// Contracts whose expiry falls in the inclusive window
    /// `[today, today + days]`. Already-expired contracts are excluded.
    pub async fn expiring_within(&self, days: i64) -> Result<Vec<ContractSummary>, DomainError> {
        self.expiring_within_from(Utc::now().date_naive(), days).await
    }

    pub async fn expiring_within_from(
        &self,
        today: NaiveDate,
        days: i64,
    ) -> Result<Vec<ContractSummary>, DomainError> {
        let cutoff = today + Days::new(days.max(0) as u64);
        let summaries = self.list().await?;

        Ok(summaries
            .into_iter()
            .filter(|c| c.expiry >= today && c.expiry <= cutoff)
            .collect())
    }

    /// Add a contract from a validated draft.
    ///
    /// The write is memory-only: the new record is prepended to the
    /// document cache with a synthesized id and `start` defaulted to
    /// today. It is lost when the process restarts.
    pub async fn add(&self, draft: ContractDraft) -> Result<ContractSummary, DomainError> {
        let today = Utc::now().date_naive();
        validate_draft(&draft, today).map_err(|e| DomainError::validation(e.to_string()))?;

        let mut document = self.document.lock().await;
        if document.is_none() {
            *document = Some(self.source.fetch_all().await?);
        }
        let contracts = document.as_mut().ok_or_else(|| {
            DomainError::internal("Contract document unavailable after load")
        })?;

        let id = synthesize_id(contracts, Utc::now().timestamp_millis());
        let contract = Contract::new(
            id,
            draft.name.trim(),
            draft.parties.trim(),
            draft.expiry,
            draft.status,
            draft.risk,
        )
        .with_start(today);

        let summary = contract.summary();
        contracts.insert(0, contract);
        info!("Added contract '{}' ({})", summary.name, summary.id);

        Ok(summary)
    }
}

/// Synthesize a time-derived id, bumping past any collision so ids stay
/// unique within the document.
fn synthesize_id(contracts: &[Contract], now_millis: i64) -> String {
    let mut millis = now_millis;
    loop {
        let candidate = format!("contract-{}", millis);
        if !contracts.iter().any(|c| c.id() == candidate) {
            return candidate;
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract::mock::MockContractSource;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixtures() -> Vec<Contract> {
        vec![
            Contract::new(
                "c1",
                "MSA",
                "Acme Corp & Globex",
                date(2027, 1, 1),
                ContractStatus::Active,
                RiskLevel::Low,
            ),
            Contract::new(
                "c2",
                "NDA",
                "Initech & Hooli",
                date(2026, 10, 1),
                ContractStatus::RenewalDue,
                RiskLevel::High,
            ),
            Contract::new(
                "c3",
                "SaaS Agreement",
                "ACME Industrial",
                date(2025, 6, 1),
                ContractStatus::Expired,
                RiskLevel::Medium,
            ),
        ]
    }

    fn service_with(contracts: Vec<Contract>) -> (ContractService, Arc<MockContractSource>) {
        let source = Arc::new(MockContractSource::new().with_contracts(contracts));
        (ContractService::new(source.clone()), source)
    }

    #[tokio::test]
    async fn test_list_preserves_document_order() {
        let (service, _) = service_with(fixtures());

        let summaries = service.list().await.unwrap();
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
    }

    #[tokio::test]
    async fn test_document_loads_once_across_operations() {
        let (service, source) = service_with(fixtures());

        service.list().await.unwrap();
        service.search("acme").await.unwrap();
        service.by_status(ContractStatus::Active).await.unwrap();
        service.get("c2").await.unwrap();

        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let (service, _) = service_with(fixtures());

        let err = service.get("c404").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_failure_surfaces_and_retries() {
        let source = Arc::new(MockContractSource::new().with_error("connection refused"));
        let service = ContractService::new(source.clone());

        let err = service.list().await.unwrap_err();
        assert!(matches!(err, DomainError::Fetch { .. }));

        // Failure is not cached: the next read fetches again.
        source.set_error(None);
        assert!(service.list().await.is_ok());
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_search_matches_name_and_parties() {
        let (service, _) = service_with(fixtures());

        let results = service.search("Acme").await.unwrap();
        let ids: Vec<&str> = results.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[tokio::test]
    async fn test_blank_search_is_empty() {
        let (service, _) = service_with(fixtures());
        assert!(service.search("  ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_filter_by_risk() {
        let (service, _) = service_with(fixtures());

        let results = service.by_risk(RiskLevel::High).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "c2");
    }

    #[tokio::test]
    async fn test_expiring_window_boundaries() {
        let today = date(2026, 8, 25);
        let contracts = vec![
            Contract::new("in-30", "A", "P", today + Days::new(30), ContractStatus::Active, RiskLevel::Low),
            Contract::new("in-31", "B", "P", today + Days::new(31), ContractStatus::Active, RiskLevel::Low),
            Contract::new("today", "C", "P", today, ContractStatus::Active, RiskLevel::Low),
            Contract::new("past", "D", "P", today - Days::new(1), ContractStatus::Expired, RiskLevel::Low),
        ];
        let (service, _) = service_with(contracts);

        let results = service.expiring_within_from(today, 30).await.unwrap();
        let ids: Vec<&str> = results.iter().map(|s| s.id.as_str()).collect();

        // Exactly 30 days out and expiring today are in; 31 days and
        // already-expired are out.
        assert_eq!(ids, vec!["in-30", "today"]);
    }

    #[tokio::test]
    async fn test_add_prepends_without_refetch() {
        let (service, source) = service_with(fixtures());
        service.list().await.unwrap();

        let draft = ContractDraft {
            name: "Support Contract".to_string(),
            parties: "Acme & Vandelay".to_string(),
            expiry: Utc::now().date_naive() + Days::new(365),
            status: ContractStatus::Draft,
            risk: RiskLevel::Low,
        };

        let summary = service.add(draft).await.unwrap();
        assert!(summary.id.starts_with("contract-"));

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[0].id, summary.id);
        assert_eq!(source.fetch_count(), 1);

        // The full record defaults start to today and has empty collections.
        let full = service.get(&summary.id).await.unwrap();
        assert_eq!(full.start(), Some(Utc::now().date_naive()));
        assert!(full.clauses().is_empty());
        assert!(full.insights().is_empty());
        assert!(full.evidence().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_past_expiry() {
        let (service, _) = service_with(fixtures());

        let draft = ContractDraft {
            name: "Back-dated".to_string(),
            parties: "Acme & Vandelay".to_string(),
            expiry: Utc::now().date_naive() - Days::new(1),
            status: ContractStatus::Draft,
            risk: RiskLevel::Low,
        };

        let err = service.add(draft).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(err.to_string().contains("future"));
    }

    #[tokio::test]
    async fn test_reload_replaces_document() {
        let (service, source) = service_with(fixtures());
        service.list().await.unwrap();

        source.set_error(Some("feed offline".to_string()));
        assert!(service.reload().await.is_err());

        // The previous document survives a failed reload.
        assert_eq!(service.list().await.unwrap().len(), 3);
    }

    #[test]
    fn test_synthesize_id_bumps_past_collisions() {
        let existing = vec![Contract::new(
            "contract-1000",
            "A",
            "P",
            date(2027, 1, 1),
            ContractStatus::Draft,
            RiskLevel::Low,
        )];

        assert_eq!(synthesize_id(&existing, 1000), "contract-1001");
        assert_eq!(synthesize_id(&[], 1000), "contract-1000");
    }
}
