//! Contract Dashboard API
//!
//! Data layer and HTTP surface for a contract-management dashboard:
//! - Read-only contract feed fetched from a static JSON document
//! - Shared TTL cache with change notifications and request coalescing
//! - Derived views: filter, sort, paginate, stats, expiring-soon
//! - Rule-based advisory insights per contract
//! - Mock session authentication for demo deployments

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::session::SessionStore;
use infrastructure::auth::{AuthService, FileSessionStore, InMemorySessionStore};
use infrastructure::contracts::ContractService;
use infrastructure::source::HttpContractSource;
use infrastructure::store::ContractStore;
use tracing::info;

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> AppState {
    let source = Arc::new(HttpContractSource::new(&config.contracts.source_url));
    info!("Contract feed: {}", source.url());

    let service = Arc::new(ContractService::new(source));
    let store = Arc::new(ContractStore::new(
        service,
        config.contracts.collection_ttl(),
        config.contracts.detail_ttl(),
    ));

    let session_store: Arc<dyn SessionStore> = match &config.auth.session_file {
        Some(path) => {
            info!("Persisting sessions to {}", path.display());
            Arc::new(FileSessionStore::new(path))
        }
        None => Arc::new(InMemorySessionStore::new()),
    };
    let auth_service = Arc::new(AuthService::new(&config.auth.password, session_store));

    AppState::new(
        store,
        auth_service,
        config.contracts.page_size,
        config.contracts.expiring_window_days,
    )
}
