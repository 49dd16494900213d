//! Shared contract store
//!
//! One authoritative loading/data lifecycle for every consumer of the
//! contract collection. Consumers read through the store instead of the
//! service so overlapping reads share a single fetch and a single cached
//! payload, and subscribers hear about every mutation.
//!
//! The store is an explicit, injectable object: construct one at
//! application start, hand out `Arc`s, build isolated instances in tests.
//! Per-key lifecycle: empty, loading, ready (until the TTL elapses or a
//! force-refresh), and on failure the entry is evicted immediately so the
//! next access retries instead of serving a cached error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::future::Cache as MokaCache;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

use crate::domain::contract::{Contract, ContractDraft, ContractSummary};
use crate::domain::query::ContractStats;
use crate::domain::DomainError;
use crate::infrastructure::contracts::ContractService;

const EVENT_CHANNEL_CAPACITY: usize = 64;
const DETAIL_CACHE_CAPACITY: u64 = 10_000;

/// Broadcast to subscribers on every store mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    CollectionLoading,
    CollectionLoaded { count: usize },
    CollectionLoadFailed { message: String },
    CollectionLoadAborted,
    ContractAdded { id: String },
    DetailLoaded { id: String },
    DetailLoadFailed { id: String },
}

/// Cooperative cancellation handle for in-flight loads.
///
/// A consumer that goes away cancels its token; the store then skips the
/// shared-state write when the fetch completes.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    fetched_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            fetched_at: Instant::now(),
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Shared cache over the contract collection and per-id details
#[derive(Debug)]
pub struct ContractStore {
    service: Arc<ContractService>,
    collection_ttl: Duration,
    collection: Mutex<Option<CacheEntry<Vec<ContractSummary>>>>,
    details: MokaCache<String, Contract>,
    events: broadcast::Sender<StoreEvent>,
}

impl ContractStore {
    pub fn new(
        service: Arc<ContractService>,
        collection_ttl: Duration,
        detail_ttl: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            service,
            collection_ttl,
            collection: Mutex::new(None),
            details: MokaCache::builder()
                .max_capacity(DETAIL_CACHE_CAPACITY)
                .time_to_live(detail_ttl)
                .build(),
            events,
        }
    }

    /// Subscribe to store mutations. Every mounted consumer listens here
    /// so loading indicators and data stay consistent across all of them.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn service(&self) -> &Arc<ContractService> {
        &self.service
    }

    /// The contract collection, served from cache while fresh
    pub async fn collection(&self) -> Result<Vec<ContractSummary>, DomainError> {
        self.load_collection(false, &CancelToken::new()).await
    }

    /// Force a fresh fetch of the collection, bypassing the TTL
    pub async fn refresh_collection(&self) -> Result<Vec<ContractSummary>, DomainError> {
        self.load_collection(true, &CancelToken::new()).await
    }

    /// Load the collection with explicit force and cancellation control.
    ///
    /// The entry lock is held across the fetch, so concurrent readers of a
    /// missing or expired entry share one round-trip: the first performs
    /// it, the rest wake up to a fresh entry. A cancelled token still
    /// yields the fetched data to its caller but leaves shared state
    /// untouched.
    pub async fn load_collection(
        &self,
        force: bool,
        cancel: &CancelToken,
    ) -> Result<Vec<ContractSummary>, DomainError> {
        let mut slot = self.collection.lock().await;

        if !force {
            if let Some(entry) = slot.as_ref() {
                if entry.is_fresh(self.collection_ttl) {
                    return Ok(entry.data.clone());
                }
            }
        }

        self.notify(StoreEvent::CollectionLoading);

        // A miss, an expired entry, and a force flag all demand fresh
        // bytes from the feed, never the service's own document cache.
        let fetched = self
            .service
            .reload()
            .await
            .map(|contracts| contracts.iter().map(Contract::summary).collect::<Vec<_>>());

        match fetched {
            Ok(data) => {
                if cancel.is_cancelled() {
                    debug!("Collection load cancelled; shared state left untouched");
                    self.notify(StoreEvent::CollectionLoadAborted);
                    return Ok(data);
                }

                *slot = Some(CacheEntry::new(data.clone()));
                self.notify(StoreEvent::CollectionLoaded { count: data.len() });
                Ok(data)
            }
            Err(error) => {
                // Evict so the next access retries instead of serving a
                // stale mixture of old data plus an error.
                *slot = None;
                warn!("Collection load failed: {}", error);
                self.notify(StoreEvent::CollectionLoadFailed {
                    message: error.to_string(),
                });
                Err(error)
            }
        }
    }

    /// One contract's full record, cached per id.
    ///
    /// Concurrent loads of the same id share the in-flight lookup, and
    /// failures are never cached: a miss for one id affects neither the
    /// collection entry nor any other id.
    pub async fn detail(&self, id: &str) -> Result<Contract, DomainError> {
        let was_cached = self.details.contains_key(id);
        let service = self.service.clone();
        let lookup_id = id.to_string();

        let result = self
            .details
            .try_get_with(id.to_string(), async move { service.get(&lookup_id).await })
            .await;

        match result {
            Ok(contract) => {
                if !was_cached {
                    self.notify(StoreEvent::DetailLoaded { id: id.to_string() });
                }
                Ok(contract)
            }
            Err(error) => {
                self.notify(StoreEvent::DetailLoadFailed { id: id.to_string() });
                Err((*error).clone())
            }
        }
    }

    /// Re-fetch one contract's record, bypassing its cached entry
    pub async fn refresh_detail(
        &self,
        id: &str,
        cancel: &CancelToken,
    ) -> Result<Contract, DomainError> {
        self.details.invalidate(id).await;

        match self.service.get(id).await {
            Ok(contract) => {
                if !cancel.is_cancelled() {
                    self.details.insert(id.to_string(), contract.clone()).await;
                    self.notify(StoreEvent::DetailLoaded { id: id.to_string() });
                }
                Ok(contract)
            }
            Err(error) => {
                self.notify(StoreEvent::DetailLoadFailed { id: id.to_string() });
                Err(error)
            }
        }
    }

    /// Optimistic local write: validate, synthesize, and prepend the new
    /// contract into the ready collection entry without a round-trip.
    pub async fn add_contract(&self, draft: ContractDraft) -> Result<ContractSummary, DomainError> {
        let summary = self.service.add(draft).await?;

        {
            let mut slot = self.collection.lock().await;
            if let Some(entry) = slot.as_mut() {
                entry.data.insert(0, summary.clone());
            }
        }

        self.notify(StoreEvent::ContractAdded {
            id: summary.id.clone(),
        });
        Ok(summary)
    }

    /// Aggregation over the unfiltered cached collection
    pub async fn stats(&self) -> Result<ContractStats, DomainError> {
        let collection = self.collection().await?;
        Ok(ContractStats::from_summaries(&collection))
    }

    fn notify(&self, event: StoreEvent) {
        // Nobody listening is fine; the send result only reports that.
        let _ = self.events.send(event);
    }
}
