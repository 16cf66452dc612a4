use std::time::Duration;

use alloy::primitives::{Address, Bytes, B256, U256};
use serde_json::Value;

use poly_ticker_core::PortError;

/// Minimal blocking Ethereum JSON-RPC client.
#[derive(Debug, Clone)]
pub struct JsonRpcClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl JsonRpcClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Result<Self, PortError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| PortError::Transport(format!("failed to build rpc client: {e}")))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn call(&self, method: &str, params: Value) -> Result<Value, PortError> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response = self
            .client
            .post(&self.base_url)
            .json(&payload)
            .send()
            .map_err(|e| PortError::Transport(format!("{method} request failed: {e}")))?;
        let status = response.status();
        let body: Value = response
            .json()
            .map_err(|e| PortError::Transport(format!("{method} json decode failed: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Transport(format!(
                "{method} status {status}: {body}"
            )));
        }
        if let Some(err) = body.get("error") {
            return Err(PortError::Transport(format!("{method} returned error: {err}")));
        }
        body.get("result")
            .cloned()
            .ok_or_else(|| PortError::Transport(format!("{method} missing result")))
    }

    pub fn eth_call(&self, to: Address, data: Bytes) -> Result<Bytes, PortError> {
        let result = self.call(
            "eth_call",
            serde_json::json!([{ "to": to, "data": data }, "latest"]),
        )?;
        serde_json::from_value(result)
            .map_err(|e| PortError::Transport(format!("eth_call result must be hex bytes: {e}")))
    }

    pub fn send_transaction(
        &self,
        from: Address,
        to: Address,
        data: Bytes,
    ) -> Result<B256, PortError> {
        let result = self.call(
            "eth_sendTransaction",
            serde_json::json!([{ "from": from, "to": to, "data": data }]),
        )?;
        serde_json::from_value(result).map_err(|e| {
            PortError::Transport(format!("eth_sendTransaction result must be a hash: {e}"))
        })
    }

    pub fn accounts(&self) -> Result<Vec<Address>, PortError> {
        let result = self.call("eth_accounts", serde_json::json!([]))?;
        serde_json::from_value(result)
            .map_err(|e| PortError::Transport(format!("eth_accounts result must be addresses: {e}")))
    }

    pub fn chain_id(&self) -> Result<u64, PortError> {
        let result = self.call("eth_chainId", serde_json::json!([]))?;
        quantity_to_u64(&result)
    }

    /// `None` while the transaction is still pending, otherwise whether it succeeded.
    pub fn receipt_status(&self, tx_hash: B256) -> Result<Option<bool>, PortError> {
        let result = self.call("eth_getTransactionReceipt", serde_json::json!([tx_hash]))?;
        if result.is_null() {
            return Ok(None);
        }
        let status = result
            .get("status")
            .ok_or_else(|| PortError::Transport("receipt missing status".to_owned()))?;
        Ok(Some(quantity_to_u64(status)? == 1))
    }
}

pub fn quantity_to_u64(value: &Value) -> Result<u64, PortError> {
    let raw = value
        .as_str()
        .ok_or_else(|| PortError::Transport(format!("quantity must be a hex string: {value}")))?;
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    u64::from_str_radix(digits, 16)
        .map_err(|e| PortError::Transport(format!("invalid quantity {raw}: {e}")))
}

/// Decode a single ABI `uint256` return word.
pub fn decode_uint256(data: &[u8]) -> Result<U256, PortError> {
    if data.len() < 32 {
        return Err(PortError::Transport(format!(
            "expected a 32-byte word, got {} bytes",
            data.len()
        )));
    }
    Ok(U256::from_be_slice(&data[..32]))
}
