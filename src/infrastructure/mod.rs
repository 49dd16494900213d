pub mod auth;
pub mod contracts;
pub mod logging;
pub mod source;
pub mod store;
