//! Deposit relay - an HTTP service that queues `deposit` contract writes on the
//! Engine transaction service.
//!
//! The service exposes `POST /deposit`. Each request is validated, turned into
//! a contract write with a fixed fee, forwarded to the Engine with the backend
//! wallet's credentials, and answered with the Engine's queue id.
//!
//! # Architecture
//!
//! - `core::config` loads the process configuration once at startup
//! - `engine` performs authenticated calls against the Engine REST API
//! - `api` holds the axum router and the deposit route
//!
//! # Example
//!
//! ```no_run
//! use deposit_relay::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     deposit_relay::setup_logging();
//!
//!     let config = AppConfig {
//!         engine_url: "https://engine.example.com".to_string(),
//!         engine_access_token: "dummy_token".to_string(),
//!         backend_wallet_address: "0x0000000000000000000000000000000000000001".to_string(),
//!         contract_address: "0x0000000000000000000000000000000000000002".to_string(),
//!         chain_id: "84532".to_string(),
//!         port: 3000,
//!     };
//!
//!     deposit_relay::api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod engine;
pub mod errors;

pub use errors::{ConfigError, EngineError, RelayError, ValidationError};

/// Configure structured logging with JSON output.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once leaves the first subscriber in place.
///
/// # Example
///
/// ```
/// deposit_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
