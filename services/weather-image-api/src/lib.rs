//! Weather image API service library.
//!
//! Exposes the router, configuration and state so the HTTP surface can be
//! exercised in-process by tests.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::build_router;
pub use state::AppState;
