use std::fmt;
use std::str::FromStr;

use alloy::primitives::utils::{format_units, parse_units, ParseUnits};
use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::ports::PortError;

/// POLY uses the standard ERC-20 precision.
pub const POLY_DECIMALS: u8 = 18;
/// Fixed reservation fee, in whole POLY.
pub const RESERVATION_FEE_POLY: u64 = 250;
/// Amount the Kovan faucet hands out, in whole POLY.
pub const FAUCET_AMOUNT_POLY: u64 = 25_000;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
/// Shown until the registry answers.
pub const DEFAULT_EXPIRY_DAYS: f64 = 7.0;
pub const TICKER_SUCCESS_PATH: &str = "/ticker/success";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct PolyAmount(pub U256);

impl PolyAmount {
    pub const ZERO: Self = Self(U256::ZERO);

    pub fn from_base_units(units: U256) -> Self {
        Self(units)
    }

    pub fn from_whole(poly: u64) -> Self {
        Self(U256::from(poly) * U256::from(10u64).pow(U256::from(POLY_DECIMALS)))
    }

    /// The fee a ticker reservation costs. Balances below this cannot register.
    pub fn reservation_fee() -> Self {
        Self::from_whole(RESERVATION_FEE_POLY)
    }

    pub fn base_units(&self) -> U256 {
        self.0
    }

    pub fn covers_reservation_fee(&self) -> bool {
        *self >= Self::reservation_fee()
    }
}

impl FromStr for PolyAmount {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_units(s.trim(), POLY_DECIMALS)
            .map_err(|e| PortError::Validation(format!("invalid POLY amount '{s}': {e}")))?
        {
            ParseUnits::U256(units) => Ok(Self(units)),
            ParseUnits::I256(_) => Err(PortError::Validation(format!(
                "POLY amount must not be negative: {s}"
            ))),
        }
    }
}

impl fmt::Display for PolyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = format_units(self.0, POLY_DECIMALS).map_err(|_| fmt::Error)?;
        let trimmed = if raw.contains('.') {
            raw.trim_end_matches('0').trim_end_matches('.')
        } else {
            raw.as_str()
        };
        write!(f, "{trimmed} POLY")
    }
}

/// Display name of the network the account is connected to.
///
/// Only the two literal names below get a balance warning dialog; any other
/// name is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkName(pub String);

impl NetworkName {
    pub const KOVAN: &'static str = "Kovan Testnet";
    pub const MAINNET: &'static str = "Ethereum Mainnet";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn from_chain_id(chain_id: u64) -> Self {
        match chain_id {
            1 => Self::new(Self::MAINNET),
            42 => Self::new(Self::KOVAN),
            other => Self(format!("Unknown Network ({other})")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_kovan(&self) -> bool {
        self.0 == Self::KOVAN
    }

    pub fn is_mainnet(&self) -> bool {
        self.0 == Self::MAINNET
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub account: Option<Address>,
    pub network_name: NetworkName,
    pub poly_balance: PolyAmount,
}

impl Default for AccountSnapshot {
    fn default() -> Self {
        Self {
            account: None,
            network_name: NetworkName::new(NetworkName::KOVAN),
            poly_balance: PolyAmount::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Pending,
    Submitted,
    Confirmed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerTransaction {
    pub ticker: String,
    pub status: TransactionStatus,
    pub hash: Option<B256>,
    pub error: Option<String>,
}

impl TickerTransaction {
    pub fn pending(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            status: TransactionStatus::Pending,
            hash: None,
            error: None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(
            self.status,
            TransactionStatus::Pending | TransactionStatus::Submitted
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationStatus {
    pub is_registered: bool,
    pub transaction: Option<TickerTransaction>,
}
