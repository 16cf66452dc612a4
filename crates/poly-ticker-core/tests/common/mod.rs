#![allow(dead_code)]

use std::sync::Mutex;

use alloy::primitives::Address;

use poly_ticker_core::{
    AccountPort, AccountSnapshot, NavigationPort, NetworkName, PolyAmount, PortError,
    RegistrationStatus, TickerDetails, TickerFormPort, TickerFormValues, TickerRegistryPort,
    TickerReservationController,
};

#[derive(Debug)]
pub struct FixedAccount {
    pub snapshot: Mutex<AccountSnapshot>,
}

impl FixedAccount {
    pub fn new(network: &str, balance: &str) -> Self {
        Self {
            snapshot: Mutex::new(AccountSnapshot {
                account: Some(owner_address()),
                network_name: NetworkName::new(network),
                poly_balance: balance.parse::<PolyAmount>().expect("valid balance"),
            }),
        }
    }
}

impl AccountPort for FixedAccount {
    fn snapshot(&self) -> Result<AccountSnapshot, PortError> {
        Ok(self.snapshot.lock().expect("account lock").clone())
    }
}

#[derive(Debug, Default)]
pub struct RecordingRegistry {
    pub expiry_seconds: Option<u64>,
    pub registered: Mutex<Vec<TickerDetails>>,
    pub resets: Mutex<u32>,
    pub fail_reset: bool,
    pub status: Mutex<RegistrationStatus>,
}

impl RecordingRegistry {
    pub fn register_calls(&self) -> usize {
        self.registered.lock().expect("registry lock").len()
    }

    pub fn mark_registered(&self) {
        self.status.lock().expect("registry lock").is_registered = true;
    }
}

impl TickerRegistryPort for RecordingRegistry {
    fn expiry_limit_seconds(&self) -> Result<u64, PortError> {
        self.expiry_seconds
            .ok_or_else(|| PortError::Transport("registry offline".to_owned()))
    }

    fn register(&self, details: &TickerDetails) -> Result<(), PortError> {
        self.registered
            .lock()
            .expect("registry lock")
            .push(details.clone());
        Ok(())
    }

    fn reset_token_data(&self) -> Result<(), PortError> {
        if self.fail_reset {
            return Err(PortError::Transport("token store unavailable".to_owned()));
        }
        *self.resets.lock().expect("registry lock") += 1;
        Ok(())
    }

    fn registration_status(&self) -> Result<RegistrationStatus, PortError> {
        Ok(self.status.lock().expect("registry lock").clone())
    }
}

#[derive(Debug, Default)]
pub struct MemoryForm {
    pub values: Mutex<TickerFormValues>,
}

impl TickerFormPort for MemoryForm {
    fn set_owner(&self, owner: Option<Address>) -> Result<(), PortError> {
        let mut g = self.values.lock().expect("form lock");
        g.owner = owner.map(|a| a.to_checksum(None)).unwrap_or_default();
        Ok(())
    }

    fn values(&self) -> Result<TickerFormValues, PortError> {
        Ok(self.values.lock().expect("form lock").clone())
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigation {
    pub redirects: Mutex<Vec<String>>,
}

impl NavigationPort for RecordingNavigation {
    fn redirect_to(&self, path: &str) -> Result<(), PortError> {
        self.redirects
            .lock()
            .expect("navigation lock")
            .push(path.to_owned());
        Ok(())
    }
}

pub type TestController =
    TickerReservationController<FixedAccount, RecordingRegistry, MemoryForm, RecordingNavigation>;

pub fn new_controller(network: &str, balance: &str) -> TestController {
    TickerReservationController::new(
        FixedAccount::new(network, balance),
        RecordingRegistry {
            expiry_seconds: Some(15 * 86_400),
            ..RecordingRegistry::default()
        },
        MemoryForm::default(),
        RecordingNavigation::default(),
    )
}

/// Mount and fill the form with a valid reservation.
pub fn mounted_controller(network: &str, balance: &str) -> TestController {
    let mut controller = new_controller(network, balance);
    controller.mount().expect("mount");
    {
        let mut values = controller.form.values.lock().expect("form lock");
        values.ticker = "poly".to_owned();
        values.token_name = "Polymath Test Token".to_owned();
    }
    controller
}

pub fn owner_address() -> Address {
    "0x1000000000000000000000000000000000000001"
        .parse()
        .expect("valid owner address")
}
