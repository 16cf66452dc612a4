use std::str::FromStr;

use alloy::primitives::{address, Address};
use poly_ticker_core::{NetworkName, PolyAmount};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct TickerAdapterConfig {
    /// JSON-RPC endpoint. `None` selects the deterministic in-memory adapters.
    pub rpc_url: Option<String>,
    pub rpc_timeout_ms: u64,
    pub ticker_registry_address: Address,
    pub poly_token_address: Address,
    pub receipt_poll_interval_ms: u64,
    pub deterministic_expiry_limit_secs: u64,
    pub deterministic_balance: PolyAmount,
    pub deterministic_network: NetworkName,
    pub deterministic_account: Option<Address>,
}

impl Default for TickerAdapterConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            rpc_timeout_ms: 15_000,
            ticker_registry_address: Address::ZERO,
            poly_token_address: Address::ZERO,
            receipt_poll_interval_ms: 2_000,
            deterministic_expiry_limit_secs: 7 * 24 * 60 * 60,
            deterministic_balance: PolyAmount::ZERO,
            deterministic_network: NetworkName::new(NetworkName::KOVAN),
            deterministic_account: Some(address!("1000000000000000000000000000000000000001")),
        }
    }
}

impl TickerAdapterConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or unparsable keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(url) = lookup("POLY_TICKER_RPC_URL").filter(|v| !v.trim().is_empty()) {
            cfg.rpc_url = Some(url.trim().to_owned());
        }
        if let Some(v) = parse_var(&lookup, "POLY_TICKER_RPC_TIMEOUT_MS") {
            cfg.rpc_timeout_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "POLY_TICKER_REGISTRY_ADDRESS") {
            cfg.ticker_registry_address = v;
        }
        if let Some(v) = parse_var(&lookup, "POLY_TICKER_POLY_TOKEN_ADDRESS") {
            cfg.poly_token_address = v;
        }
        if let Some(v) = parse_var(&lookup, "POLY_TICKER_RECEIPT_POLL_MS") {
            cfg.receipt_poll_interval_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "POLY_TICKER_EXPIRY_LIMIT_SECS") {
            cfg.deterministic_expiry_limit_secs = v;
        }
        if let Some(v) = parse_var(&lookup, "POLY_TICKER_BALANCE") {
            cfg.deterministic_balance = v;
        }
        if let Some(v) = lookup("POLY_TICKER_NETWORK").filter(|v| !v.is_empty()) {
            cfg.deterministic_network = NetworkName::new(v);
        }
        if let Some(v) = parse_var(&lookup, "POLY_TICKER_ACCOUNT") {
            cfg.deterministic_account = Some(v);
        }

        cfg
    }

    pub fn rpc_enabled(&self) -> bool {
        self.rpc_url.is_some()
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("ignoring {key}={raw:?}: {e}");
            None
        }
    }
}
