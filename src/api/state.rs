//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::AuthService;
use crate::infrastructure::store::ContractStore;

/// Shared handles injected into every handler.
///
/// The store and auth service are constructed once at startup; nothing in
/// here is a global, so tests build isolated states freely.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContractStore>,
    pub auth_service: Arc<AuthService>,
    /// Rows per page when the request does not say
    pub page_size: usize,
    /// Default window for the expiring-soon view, in days
    pub expiring_window_days: i64,
}

impl AppState {
    pub fn new(
        store: Arc<ContractStore>,
        auth_service: Arc<AuthService>,
        page_size: usize,
        expiring_window_days: i64,
    ) -> Self {
        Self {
            store,
            auth_service,
            page_size,
            expiring_window_days,
        }
    }
}
