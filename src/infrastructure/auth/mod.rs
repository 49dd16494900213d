mod service;
mod session_store;

pub use service::AuthService;
pub use session_store::{FileSessionStore, InMemorySessionStore};
