//! API layer - HTTP endpoints and extractors

pub mod auth;
pub mod contracts;
pub mod health;
pub mod router;
pub mod state;
pub mod types;

pub use auth::RequireSession;
pub use router::create_router;
pub use state::AppState;
