use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use alloy::primitives::{keccak256, Address, Bytes, B256};
use alloy::sol_types::SolCall;
use tracing::{debug, info, warn};

use poly_ticker_core::{
    PolyAmount, PortError, RegistrationStatus, TickerDetails, TickerRegistryPort,
    TickerTransaction, TransactionStatus,
};

use crate::contracts::{IPolyToken, ITickerRegistry};
use crate::rpc::{decode_uint256, JsonRpcClient};
use crate::TickerAdapterConfig;

#[derive(Debug, Clone)]
pub struct TickerRegistryAdapter {
    mode: RegistryMode,
    state: Arc<Mutex<RegistryState>>,
}

#[derive(Debug, Clone)]
enum RegistryMode {
    Deterministic { expiry_limit_secs: u64 },
    Rpc(RpcRuntime),
}

#[derive(Debug, Clone)]
struct RpcRuntime {
    rpc: JsonRpcClient,
    registry: Address,
    poly_token: Address,
}

#[derive(Debug, Default)]
struct RegistryState {
    status: RegistrationStatus,
    /// Token selected on another page; cleared when the reservation page mounts.
    token: Option<TickerDetails>,
    token_resets: u64,
}

impl Default for TickerRegistryAdapter {
    fn default() -> Self {
        Self::with_config(TickerAdapterConfig::default())
    }
}

impl TickerRegistryAdapter {
    pub fn with_config(config: TickerAdapterConfig) -> Self {
        let mode = match config.rpc_url.as_deref() {
            Some(url) => match JsonRpcClient::new(url, config.rpc_timeout_ms) {
                Ok(rpc) => RegistryMode::Rpc(RpcRuntime {
                    rpc,
                    registry: config.ticker_registry_address,
                    poly_token: config.poly_token_address,
                }),
                Err(e) => {
                    warn!("falling back to deterministic ticker registry: {e}");
                    RegistryMode::Deterministic {
                        expiry_limit_secs: config.deterministic_expiry_limit_secs,
                    }
                }
            },
            None => RegistryMode::Deterministic {
                expiry_limit_secs: config.deterministic_expiry_limit_secs,
            },
        };
        Self {
            mode,
            state: Arc::new(Mutex::new(RegistryState::default())),
        }
    }

    pub fn is_rpc(&self) -> bool {
        matches!(self.mode, RegistryMode::Rpc(_))
    }

    fn lock(&self) -> Result<MutexGuard<'_, RegistryState>, PortError> {
        lock_state(&self.state)
    }

    pub fn selected_token(&self) -> Result<Option<TickerDetails>, PortError> {
        Ok(self.lock()?.token.clone())
    }

    pub fn select_token(&self, token: TickerDetails) -> Result<(), PortError> {
        self.lock()?.token = Some(token);
        Ok(())
    }

    pub fn token_resets(&self) -> Result<u64, PortError> {
        Ok(self.lock()?.token_resets)
    }

    /// Advance a submitted registration. Returns the resulting status.
    pub fn poll(&self) -> Result<RegistrationStatus, PortError> {
        let hash = {
            let g = self.lock()?;
            match g.status.transaction.as_ref() {
                Some(tx) if tx.status == TransactionStatus::Submitted => tx.hash,
                _ => return Ok(g.status.clone()),
            }
        };

        let outcome = match (&self.mode, hash) {
            (RegistryMode::Deterministic { .. }, _) => Some(true),
            (RegistryMode::Rpc(rt), Some(hash)) => rt.rpc.receipt_status(hash)?,
            (RegistryMode::Rpc(_), None) => None,
        };

        let mut g = self.lock()?;
        if let Some(success) = outcome {
            if let Some(tx) = g.status.transaction.as_mut() {
                if success {
                    tx.status = TransactionStatus::Confirmed;
                    info!(ticker = %tx.ticker, "ticker registration confirmed");
                } else {
                    tx.status = TransactionStatus::Failed;
                    tx.error = Some("registration transaction reverted".to_owned());
                    warn!(ticker = %tx.ticker, "ticker registration reverted");
                }
            }
            g.status.is_registered = success;
        }
        Ok(g.status.clone())
    }
}

impl TickerRegistryPort for TickerRegistryAdapter {
    fn expiry_limit_seconds(&self) -> Result<u64, PortError> {
        match &self.mode {
            RegistryMode::Deterministic { expiry_limit_secs } => Ok(*expiry_limit_secs),
            RegistryMode::Rpc(rt) => {
                let data = ITickerRegistry::expiryLimitCall {}.abi_encode();
                let raw = rt.rpc.eth_call(rt.registry, Bytes::from(data))?;
                let seconds = decode_uint256(&raw)?;
                u64::try_from(seconds)
                    .map_err(|_| PortError::Validation(format!("expiry limit out of range: {seconds}")))
            }
        }
    }

    fn register(&self, details: &TickerDetails) -> Result<(), PortError> {
        {
            let mut g = self.lock()?;
            if g.status.transaction.as_ref().is_some_and(|tx| tx.is_in_flight()) {
                return Err(PortError::Validation(
                    "a ticker registration is already in flight".to_owned(),
                ));
            }
            g.status.transaction = Some(TickerTransaction::pending(details.ticker.clone()));
        }

        match &self.mode {
            RegistryMode::Deterministic { .. } => {
                let mut seed = Vec::new();
                seed.extend_from_slice(details.ticker.as_bytes());
                seed.extend_from_slice(details.owner.as_slice());
                let hash = keccak256(seed);
                let mut g = self.lock()?;
                if let Some(tx) = g.status.transaction.as_mut() {
                    tx.status = TransactionStatus::Submitted;
                    tx.hash = Some(hash);
                }
                debug!(ticker = %details.ticker, %hash, "deterministic registration submitted");
                Ok(())
            }
            RegistryMode::Rpc(rt) => {
                let rt = rt.clone();
                let state = Arc::clone(&self.state);
                let details = details.clone();
                thread::spawn(move || {
                    let outcome = rt.submit_registration(&details);
                    let Ok(mut g) = lock_state(&state) else {
                        return;
                    };
                    let Some(tx) = g.status.transaction.as_mut() else {
                        return;
                    };
                    match outcome {
                        Ok(hash) => {
                            info!(ticker = %details.ticker, %hash, "ticker registration submitted");
                            tx.status = TransactionStatus::Submitted;
                            tx.hash = Some(hash);
                        }
                        Err(e) => {
                            warn!(ticker = %details.ticker, "ticker registration failed: {e}");
                            tx.status = TransactionStatus::Failed;
                            tx.error = Some(e.to_string());
                        }
                    }
                });
                Ok(())
            }
        }
    }

    fn reset_token_data(&self) -> Result<(), PortError> {
        let mut g = self.lock()?;
        g.token = None;
        g.token_resets = g.token_resets.saturating_add(1);
        Ok(())
    }

    fn registration_status(&self) -> Result<RegistrationStatus, PortError> {
        Ok(self.lock()?.status.clone())
    }
}

impl RpcRuntime {
    /// Approve the reservation fee, then register. Returns the registration hash.
    fn submit_registration(&self, details: &TickerDetails) -> Result<B256, PortError> {
        let sender = self
            .rpc
            .accounts()?
            .into_iter()
            .next()
            .ok_or_else(|| PortError::NotFound("no unlocked account on node".to_owned()))?;

        let approve = IPolyToken::approveCall {
            spender: self.registry,
            value: PolyAmount::reservation_fee().base_units(),
        }
        .abi_encode();
        let approve_hash = self
            .rpc
            .send_transaction(sender, self.poly_token, Bytes::from(approve))?;
        debug!(%approve_hash, "reservation fee approved");

        let register = ITickerRegistry::registerTickerCall {
            owner: details.owner,
            symbol: details.ticker.clone(),
            tokenName: details.token_name.clone(),
            swarmHash: B256::ZERO,
        }
        .abi_encode();
        self.rpc
            .send_transaction(sender, self.registry, Bytes::from(register))
    }
}

fn lock_state(state: &Mutex<RegistryState>) -> Result<MutexGuard<'_, RegistryState>, PortError> {
    state
        .lock()
        .map_err(|e| PortError::Transport(format!("registry lock poisoned: {e}")))
}
