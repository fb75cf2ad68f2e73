//! HTTP API and request processing

pub mod deposit;
pub mod handler;
pub mod helpers;
pub mod validation;

// Re-export the entrypoints for convenience
pub use handler::{AppState, router, serve, serve_on};
