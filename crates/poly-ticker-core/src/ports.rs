use std::sync::Arc;

use alloy::primitives::Address;
use thiserror::Error;

use crate::domain::{AccountSnapshot, RegistrationStatus};
use crate::form::{TickerDetails, TickerFormValues};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub trait AccountPort {
    fn snapshot(&self) -> Result<AccountSnapshot, PortError>;
}

pub trait TickerRegistryPort {
    fn expiry_limit_seconds(&self) -> Result<u64, PortError>;
    /// Fire-and-forget: progress is reported through `registration_status`.
    fn register(&self, details: &TickerDetails) -> Result<(), PortError>;
    fn reset_token_data(&self) -> Result<(), PortError>;
    fn registration_status(&self) -> Result<RegistrationStatus, PortError>;
}

pub trait TickerFormPort {
    fn set_owner(&self, owner: Option<Address>) -> Result<(), PortError>;
    fn values(&self) -> Result<TickerFormValues, PortError>;
}

pub trait NavigationPort {
    fn redirect_to(&self, path: &str) -> Result<(), PortError>;
}

impl<T: AccountPort + ?Sized> AccountPort for Arc<T> {
    fn snapshot(&self) -> Result<AccountSnapshot, PortError> {
        (**self).snapshot()
    }
}

impl<T: TickerRegistryPort + ?Sized> TickerRegistryPort for Arc<T> {
    fn expiry_limit_seconds(&self) -> Result<u64, PortError> {
        (**self).expiry_limit_seconds()
    }

    fn register(&self, details: &TickerDetails) -> Result<(), PortError> {
        (**self).register(details)
    }

    fn reset_token_data(&self) -> Result<(), PortError> {
        (**self).reset_token_data()
    }

    fn registration_status(&self) -> Result<RegistrationStatus, PortError> {
        (**self).registration_status()
    }
}

impl<T: TickerFormPort + ?Sized> TickerFormPort for Arc<T> {
    fn set_owner(&self, owner: Option<Address>) -> Result<(), PortError> {
        (**self).set_owner(owner)
    }

    fn values(&self) -> Result<TickerFormValues, PortError> {
        (**self).values()
    }
}

impl<T: NavigationPort + ?Sized> NavigationPort for Arc<T> {
    fn redirect_to(&self, path: &str) -> Result<(), PortError> {
        (**self).redirect_to(path)
    }
}
