//! JSON-RPC wallet provider over HTTP.
//!
//! Plays the role of the injected browser provider: a wallet node (or a
//! local dev node with unlocked accounts) that answers `eth_accounts`,
//! `eth_requestAccounts`, `eth_call` and signs `eth_sendTransaction`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use client_blockchain_core::{ProviderError, WalletProvider};

use crate::config::EvmConfig;
use crate::core::{EvmError, Result};

/// HTTP JSON-RPC provider.
pub struct HttpWalletProvider {
    http_client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl HttpWalletProvider {
    /// Create a provider for `url` without contacting it.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(EvmError::InvalidConfig(format!(
                "Provider URL must be http(s): {}",
                url
            )));
        }

        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            url,
            next_id: AtomicU64::new(1),
        })
    }

    /// Detect a wallet provider for `config`.
    ///
    /// Returns `None` when no endpoint is configured or the endpoint does
    /// not answer `web3_clientVersion`.
    pub async fn detect(config: &EvmConfig) -> Option<Self> {
        let Some(url) = config.get_rpc_url() else {
            tracing::info!("No wallet provider configured for {}", config.network.name());
            return None;
        };

        let provider = match Self::new(url, config.request_timeout) {
            Ok(provider) => provider,
            Err(e) => {
                tracing::warn!("Cannot build wallet provider: {}", e);
                return None;
            }
        };

        match provider
            .request("web3_clientVersion", Value::Array(Vec::new()))
            .await
        {
            Ok(version) => {
                tracing::info!("✓ Wallet provider detected at {}: {}", url, version);
                Some(provider)
            }
            Err(e) => {
                tracing::warn!("Wallet provider at {} is unreachable: {}", url, e);
                None
            }
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WalletProvider for HttpWalletProvider {
    async fn request(
        &self,
        method: &str,
        params: Value,
    ) -> std::result::Result<Value, ProviderError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        tracing::trace!("→ {} #{}", method, id);

        let response = self
            .http_client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::NetworkError(format!(
                "{} returned HTTP {}",
                method, status
            )));
        }

        let response: RpcResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        response.into_result()
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl RpcResponse {
    /// A `null` result deserializes to `None`, which is a valid answer
    /// (e.g. a pending receipt), so only the error object is decisive.
    fn into_result(self) -> std::result::Result<Value, ProviderError> {
        match self.error {
            Some(error) => Err(ProviderError::from_rpc(error.code, error.message)),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> std::result::Result<Value, ProviderError> {
        serde_json::from_value::<RpcResponse>(body)
            .unwrap()
            .into_result()
    }

    #[test]
    fn result_is_returned() {
        let value = parse(json!({"jsonrpc": "2.0", "id": 1, "result": ["0xabc"]})).unwrap();
        assert_eq!(value, json!(["0xabc"]));
    }

    #[test]
    fn null_result_is_not_an_error() {
        let value = parse(json!({"jsonrpc": "2.0", "id": 1, "result": null})).unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn error_objects_are_classified() {
        let err = parse(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": 4001, "message": "User rejected the request."}
        }))
        .unwrap_err();
        assert!(matches!(err, ProviderError::Rejected));

        let err = parse(json!({
            "jsonrpc": "2.0",
            "id": 2,
            "error": {"code": -32601, "message": "Method not found"}
        }))
        .unwrap_err();
        assert!(matches!(err, ProviderError::Rpc { code: -32601, .. }));
    }

    #[test]
    fn request_body_shape() {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: 3,
            method: "eth_accounts",
            params: json!([]),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"jsonrpc": "2.0", "id": 3, "method": "eth_accounts", "params": []})
        );
    }

    #[test]
    fn non_http_urls_are_rejected() {
        assert!(HttpWalletProvider::new("ws://127.0.0.1:8545", Duration::from_secs(1)).is_err());
        assert!(HttpWalletProvider::new("http://127.0.0.1:8545", Duration::from_secs(1)).is_ok());
    }

    #[tokio::test]
    async fn detect_without_endpoint_is_none() {
        let config = EvmConfig::default();
        assert!(HttpWalletProvider::detect(&config).await.is_none());
    }
}
