use std::sync::{Arc, Mutex, MutexGuard};

use alloy::primitives::Address;

use poly_ticker_core::{PortError, TickerFormPort, TickerFormValues};

/// Shared ticker form contents, written by the form widgets and read by the
/// controller at confirm time.
#[derive(Debug, Clone, Default)]
pub struct TickerFormStore {
    values: Arc<Mutex<TickerFormValues>>,
}

impl TickerFormStore {
    fn lock(&self) -> Result<MutexGuard<'_, TickerFormValues>, PortError> {
        self.values
            .lock()
            .map_err(|e| PortError::Transport(format!("form lock poisoned: {e}")))
    }

    pub fn replace(&self, values: TickerFormValues) -> Result<(), PortError> {
        *self.lock()? = values;
        Ok(())
    }
}

impl TickerFormPort for TickerFormStore {
    fn set_owner(&self, owner: Option<Address>) -> Result<(), PortError> {
        self.lock()?.owner = TickerFormValues::with_owner(owner).owner;
        Ok(())
    }

    fn values(&self) -> Result<TickerFormValues, PortError> {
        Ok(self.lock()?.clone())
    }
}
