use std::sync::{Arc, Mutex, MutexGuard};

use alloy::primitives::{Address, Bytes};
use alloy::sol_types::SolCall;
use tracing::{debug, warn};

use poly_ticker_core::{AccountPort, AccountSnapshot, NetworkName, PolyAmount, PortError};

use crate::contracts::IPolyToken;
use crate::rpc::{decode_uint256, JsonRpcClient};
use crate::TickerAdapterConfig;

/// Network label shown before the node has answered.
pub const NOT_CONNECTED: &str = "Not connected";

/// Account, network and POLY balance of the connected wallet.
///
/// `snapshot` is read on every frame, so it only returns the cached value.
/// In RPC mode the cache is filled by `refresh`.
#[derive(Debug, Clone)]
pub struct AccountStoreAdapter {
    mode: AccountMode,
    snapshot: Arc<Mutex<AccountSnapshot>>,
}

#[derive(Debug, Clone)]
enum AccountMode {
    Deterministic,
    Rpc {
        rpc: JsonRpcClient,
        poly_token: Address,
    },
}

impl Default for AccountStoreAdapter {
    fn default() -> Self {
        Self::with_config(TickerAdapterConfig::default())
    }
}

impl AccountStoreAdapter {
    pub fn with_config(config: TickerAdapterConfig) -> Self {
        let deterministic = AccountSnapshot {
            account: config.deterministic_account,
            network_name: config.deterministic_network.clone(),
            poly_balance: config.deterministic_balance,
        };
        let mode = match config.rpc_url.as_deref() {
            Some(url) => match JsonRpcClient::new(url, config.rpc_timeout_ms) {
                Ok(rpc) => AccountMode::Rpc {
                    rpc,
                    poly_token: config.poly_token_address,
                },
                Err(e) => {
                    warn!("falling back to deterministic account store: {e}");
                    AccountMode::Deterministic
                }
            },
            None => AccountMode::Deterministic,
        };
        // Nothing is known about the node until the first refresh.
        let snapshot = match mode {
            AccountMode::Deterministic => deterministic,
            AccountMode::Rpc { .. } => AccountSnapshot {
                account: None,
                network_name: NetworkName::new(NOT_CONNECTED),
                poly_balance: PolyAmount::ZERO,
            },
        };
        Self {
            mode,
            snapshot: Arc::new(Mutex::new(snapshot)),
        }
    }

    /// Build the adapter and read the node once, so the first snapshot
    /// already carries the node's account, chain and balance.
    pub fn connect(config: TickerAdapterConfig) -> Self {
        let adapter = Self::with_config(config);
        if let Err(e) = adapter.refresh() {
            warn!("initial account refresh failed: {e}");
        }
        adapter
    }

    fn lock(&self) -> Result<MutexGuard<'_, AccountSnapshot>, PortError> {
        self.snapshot
            .lock()
            .map_err(|e| PortError::Transport(format!("account lock poisoned: {e}")))
    }

    /// Re-read account, chain and balance from the node. A no-op offline.
    pub fn refresh(&self) -> Result<AccountSnapshot, PortError> {
        let (rpc, poly_token) = match &self.mode {
            AccountMode::Deterministic => return self.snapshot(),
            AccountMode::Rpc { rpc, poly_token } => (rpc, *poly_token),
        };

        let account = rpc.accounts()?.into_iter().next();
        let network_name = NetworkName::from_chain_id(rpc.chain_id()?);
        let poly_balance = match account {
            Some(owner) => {
                let data = IPolyToken::balanceOfCall { owner }.abi_encode();
                let raw = rpc.eth_call(poly_token, Bytes::from(data))?;
                PolyAmount::from_base_units(decode_uint256(&raw)?)
            }
            None => PolyAmount::ZERO,
        };

        let fresh = AccountSnapshot {
            account,
            network_name,
            poly_balance,
        };
        debug!(account = ?fresh.account, network = %fresh.network_name, balance = %fresh.poly_balance, "account refreshed");
        *self.lock()? = fresh.clone();
        Ok(fresh)
    }

    pub fn debug_set_balance(&self, balance: PolyAmount) -> Result<(), PortError> {
        self.lock()?.poly_balance = balance;
        Ok(())
    }

    pub fn debug_set_network(&self, network: NetworkName) -> Result<(), PortError> {
        self.lock()?.network_name = network;
        Ok(())
    }
}

impl AccountPort for AccountStoreAdapter {
    fn snapshot(&self) -> Result<AccountSnapshot, PortError> {
        Ok(self.lock()?.clone())
    }
}
