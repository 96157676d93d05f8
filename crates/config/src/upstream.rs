// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{chain} RPC URL cannot be empty")]
    EmptyUrl { chain: &'static str },

    #[error("Invalid {chain} RPC URL '{url}': {source}")]
    InvalidUrl {
        chain: &'static str,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported scheme '{scheme}' in {chain} RPC URL, expected http or https")]
    UnsupportedScheme { chain: &'static str, scheme: String },

    #[error("RPC timeout must be greater than 0")]
    ZeroTimeout,
}

/// Upstream JSON-RPC endpoints the gateway forwards to.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// EVM JSON-RPC endpoint (POST)
    ///
    /// Env: CGW_EVM_URL
    /// Default: https://sei-evm-rpc.publicnode.com
    pub evm_url: String,

    /// Cosmos/Tendermint RPC endpoint (GET)
    ///
    /// Env: CGW_COSMOS_URL
    /// Default: https://sei-m.rpc.n0ok.net
    pub cosmos_url: String,

    /// Timeout applied to every outbound RPC request, in milliseconds
    ///
    /// Env: CGW_RPC_TIMEOUT_MS
    /// Default: 30000
    pub timeout_ms: u64,
}

pub(crate) fn default_evm_url() -> String {
    "https://sei-evm-rpc.publicnode.com".to_string()
}

pub(crate) fn default_cosmos_url() -> String {
    "https://sei-m.rpc.n0ok.net".to_string()
}

pub(crate) fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            evm_url: default_evm_url(),
            cosmos_url: default_cosmos_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl UpstreamConfig {
    pub fn validate(&self) -> Result<(), UpstreamError> {
        Self::validate_url("EVM", &self.evm_url)?;
        Self::validate_url("Cosmos", &self.cosmos_url)?;

        if self.timeout_ms == 0 {
            return Err(UpstreamError::ZeroTimeout);
        }

        Ok(())
    }

    fn validate_url(chain: &'static str, url_str: &str) -> Result<(), UpstreamError> {
        if url_str.trim().is_empty() {
            return Err(UpstreamError::EmptyUrl { chain });
        }

        let parsed = url::Url::parse(url_str).map_err(|source| UpstreamError::InvalidUrl {
            chain,
            url: url_str.to_string(),
            source,
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(UpstreamError::UnsupportedScheme {
                chain,
                scheme: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_upstream_config() {
        let config = UpstreamConfig::default();
        assert_eq!(config.evm_url, "https://sei-evm-rpc.publicnode.com");
        assert_eq!(config.cosmos_url, "https://sei-m.rpc.n0ok.net");
        assert_eq!(config.timeout_ms, 30_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let config = UpstreamConfig {
            evm_url: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(UpstreamError::EmptyUrl { chain: "EVM" })
        ));
    }

    #[test]
    fn test_malformed_url_rejected() {
        let config = UpstreamConfig {
            cosmos_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(UpstreamError::InvalidUrl {
                chain: "Cosmos",
                ..
            })
        ));
    }

    #[test]
    fn test_websocket_scheme_rejected() {
        let config = UpstreamConfig {
            cosmos_url: "wss://rpc.example.com".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, UpstreamError::UnsupportedScheme { .. }));
        assert!(err.to_string().contains("wss"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = UpstreamConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(UpstreamError::ZeroTimeout)));
    }

    #[test]
    fn test_plain_http_allowed() {
        let config = UpstreamConfig {
            evm_url: "http://127.0.0.1:8545".to_string(),
            cosmos_url: "http://localhost:26657".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
