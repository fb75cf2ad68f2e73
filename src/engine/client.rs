//! Engine API client
//!
//! Builds authenticated requests against the Engine REST API and unwraps its
//! `{ result, error }` response envelope.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::config::AppConfig;
use crate::core::models::EngineResponseEnvelope;
use crate::errors::EngineError;

pub const BACKEND_WALLET_HEADER: &str = "x-backend-wallet-address";
pub const ACCOUNT_ADDRESS_HEADER: &str = "x-account-address";

/// Method, extra headers and optional JSON body for one Engine call.
#[derive(Debug, Clone)]
pub struct EngineCallOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl EngineCallOptions {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// # Errors
    ///
    /// Returns an error if `body` cannot be represented as JSON.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, EngineError> {
        let value = serde_json::to_value(body)
            .map_err(|e| EngineError::Body(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

pub struct EngineClient {
    http: Client,
    base_url: String,
    access_token: String,
    backend_wallet_address: String,
}

impl EngineClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_client(http: Client, config: &AppConfig) -> Self {
        Self {
            http,
            base_url: config.engine_url.trim_end_matches('/').to_string(),
            access_token: config.engine_access_token.clone(),
            backend_wallet_address: config.backend_wallet_address.clone(),
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn headers(&self, extra: &[(String, String)]) -> Result<HeaderMap, EngineError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.access_token))
            .map_err(|e| EngineError::InvalidHeader(format!("Authorization: {e}")))?;
        headers.insert(AUTHORIZATION, auth_value);

        let wallet_value = HeaderValue::from_str(&self.backend_wallet_address)
            .map_err(|e| EngineError::InvalidHeader(format!("{BACKEND_WALLET_HEADER}: {e}")))?;
        headers.insert(HeaderName::from_static(BACKEND_WALLET_HEADER), wallet_value);

        // Caller headers replace base headers of the same name.
        for (name, value) in extra {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| EngineError::InvalidHeader(format!("{name}: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| EngineError::InvalidHeader(format!("{name}: {e}")))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    /// Performs one call against the Engine and returns the envelope's
    /// `result`, unchecked. Nothing is retried.
    ///
    /// # Errors
    ///
    /// - `EngineError::Upstream` when the Engine answers with a non-2xx status
    /// - `EngineError::Transport` when the Engine cannot be reached
    /// - `EngineError::Decode` when a 2xx body is not a JSON envelope
    /// - `EngineError::InvalidHeader` when a header cannot be encoded
    /// - `EngineError::Body` when the body cannot be serialized
    pub async fn call(&self, path: &str, options: EngineCallOptions) -> Result<Value, EngineError> {
        let url = self.url(path);
        let headers = self.headers(&options.headers)?;

        info!(method = %options.method, url = %url, "Sending Engine request");
        if let Some(body) = &options.body {
            debug!(body = %body, "Engine request body");
        }

        let mut request = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| EngineError::Body(e.to_string()))?;
            request = request.body(bytes);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        info!(status = status.as_u16(), url = %url, "Engine responded");
        debug!(body = %text, "Engine response body");

        let envelope = serde_json::from_str::<EngineResponseEnvelope>(&text);

        if !status.is_success() {
            let error_body = envelope.ok().and_then(|e| e.error_body());
            let upstream_status = error_body
                .as_ref()
                .and_then(|e| e.status_code)
                .unwrap_or_else(|| status.as_u16());
            let message = error_body.as_ref().and_then(|e| e.message.clone());

            warn!(
                status = upstream_status,
                message = message.as_deref().unwrap_or(""),
                "Engine request failed"
            );

            return Err(EngineError::Upstream {
                status: Some(upstream_status),
                message,
                envelope: error_body,
            });
        }

        let envelope = envelope.map_err(|e| EngineError::Decode(e.to_string()))?;
        Ok(envelope.result)
    }
}
