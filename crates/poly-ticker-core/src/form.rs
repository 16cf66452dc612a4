//! Ticker form values and their validation.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

pub const TICKER_MAX_LEN: usize = 10;
pub const TOKEN_NAME_MAX_LEN: usize = 100;

/// Raw field contents as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerFormValues {
    pub ticker: String,
    pub token_name: String,
    pub owner: String,
}

/// Validated reservation request handed to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerDetails {
    pub ticker: String,
    pub token_name: String,
    pub owner: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    Ticker,
    TokenName,
    Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl TickerFormValues {
    pub fn with_owner(owner: Option<Address>) -> Self {
        Self {
            owner: owner.map(|a| a.to_checksum(None)).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Validate every field, collecting all errors rather than stopping at the first.
    pub fn validate(&self) -> Result<TickerDetails, Vec<FieldError>> {
        let mut errors = Vec::new();

        let ticker = self.ticker.trim().to_uppercase();
        if ticker.is_empty() {
            errors.push(FieldError::new(FormField::Ticker, "Required."));
        } else if ticker.chars().count() > TICKER_MAX_LEN {
            errors.push(FieldError::new(
                FormField::Ticker,
                format!("Must be {TICKER_MAX_LEN} characters or less."),
            ));
        } else if !ticker.chars().all(|c| c.is_ascii_alphanumeric()) {
            errors.push(FieldError::new(
                FormField::Ticker,
                "Only letters and digits are allowed.",
            ));
        }

        let token_name = self.token_name.trim().to_owned();
        if token_name.is_empty() {
            errors.push(FieldError::new(FormField::TokenName, "Required."));
        } else if token_name.chars().count() > TOKEN_NAME_MAX_LEN {
            errors.push(FieldError::new(
                FormField::TokenName,
                format!("Must be {TOKEN_NAME_MAX_LEN} characters or less."),
            ));
        }

        let owner = match self.owner.trim() {
            "" => {
                errors.push(FieldError::new(FormField::Owner, "Required."));
                None
            }
            raw => match raw.parse::<Address>() {
                Ok(addr) if raw.starts_with("0x") => Some(addr),
                _ => {
                    errors.push(FieldError::new(
                        FormField::Owner,
                        "Must be a valid Ethereum address.",
                    ));
                    None
                }
            },
        };

        match owner {
            Some(owner) if errors.is_empty() => Ok(TickerDetails {
                ticker,
                token_name,
                owner,
            }),
            _ => Err(errors),
        }
    }
}
