use std::env;

use crate::errors::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub engine_url: String,
    pub engine_access_token: String,
    pub backend_wallet_address: String,
    pub contract_address: String,
    pub chain_id: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any name -> value lookup. Blank values
    /// count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let port = match lookup("PORT").map(|v| v.trim().to_string()) {
            Some(raw) if !raw.is_empty() => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            engine_url: required("ENGINE_URL")?.trim_end_matches('/').to_string(),
            engine_access_token: required("ENGINE_ACCESS_TOKEN")?,
            backend_wallet_address: required("BACKEND_WALLET_ADDRESS")?,
            contract_address: required("CONTRACT_ADDRESS")?,
            chain_id: required("CHAIN_ID")?,
            port,
        })
    }

    /// Engine path for a state-mutating call on the configured contract.
    #[must_use]
    pub fn write_path(&self) -> String {
        format!("/contract/{}/{}/write", self.chain_id, self.contract_address)
    }
}
