use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::SECONDS_PER_DAY;
use crate::form::FieldError;
use crate::ports::{AccountPort, NavigationPort, PortError, TickerFormPort, TickerRegistryPort};
use crate::state_machine::{
    dialog_transition, DialogAction, DialogState, IllegalTransition, ReservationState,
    StateTransition,
};
use crate::view::{render, DialogIntent, PageProps, ViewModel};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Port(#[from] PortError),
    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransition),
    #[error("ticker form is invalid: {}", describe_field_errors(.0))]
    InvalidForm(Vec<FieldError>),
    #[error("controller is not mounted")]
    NotMounted,
}

fn describe_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{:?}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationCommand {
    Submit,
    Confirm,
    CancelConfirmation,
    CancelInsufficientBalance,
    RequestFaucet,
}

impl From<DialogIntent> for ReservationCommand {
    fn from(intent: DialogIntent) -> Self {
        match intent {
            DialogIntent::CancelConfirmation => Self::CancelConfirmation,
            DialogIntent::Confirm => Self::Confirm,
            DialogIntent::CancelInsufficientBalance => Self::CancelInsufficientBalance,
            DialogIntent::RequestFaucet => Self::RequestFaucet,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub transition: Option<StateTransition>,
    pub registration_dispatched: bool,
}

impl CommandResult {
    fn empty() -> Self {
        Self {
            transition: None,
            registration_dispatched: false,
        }
    }
}

/// Issued on mount; an expiry-limit result is only applied with the ticket of
/// the current mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryFetchTicket {
    epoch: u64,
}

pub struct TickerReservationController<A, R, F, N>
where
    A: AccountPort,
    R: TickerRegistryPort,
    F: TickerFormPort,
    N: NavigationPort,
{
    pub account: A,
    pub registry: R,
    pub form: F,
    pub navigation: N,
    state: ReservationState,
    mounted: bool,
    epoch: u64,
}

impl<A, R, F, N> TickerReservationController<A, R, F, N>
where
    A: AccountPort,
    R: TickerRegistryPort,
    F: TickerFormPort,
    N: NavigationPort,
{
    pub fn new(account: A, registry: R, form: F, navigation: N) -> Self {
        Self {
            account,
            registry,
            form,
            navigation,
            state: ReservationState::default(),
            mounted: false,
            epoch: 0,
        }
    }

    pub fn state(&self) -> &ReservationState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start a fresh page lifetime: seed the owner field, clear any selected
    /// token, and hand back the ticket for the expiry-limit fetch.
    pub fn mount(&mut self) -> Result<ExpiryFetchTicket, ControllerError> {
        self.epoch = self.epoch.wrapping_add(1);
        self.mounted = false;
        self.state = ReservationState::default();

        let snapshot = self.account.snapshot()?;
        self.form.set_owner(snapshot.account)?;
        self.registry.reset_token_data()?;

        self.mounted = true;
        let ticket = ExpiryFetchTicket { epoch: self.epoch };

        info!(
            account = ?snapshot.account,
            network = %snapshot.network_name,
            "ticker reservation page mounted"
        );
        Ok(ticket)
    }

    pub fn unmount(&mut self) {
        if self.mounted {
            debug!("ticker reservation page unmounted");
        }
        self.mounted = false;
        self.state = ReservationState::default();
    }

    /// Apply the outcome of an expiry-limit fetch. Returns whether the state
    /// changed. Failures leave the default in place.
    pub fn complete_expiry_fetch(
        &mut self,
        ticket: ExpiryFetchTicket,
        result: Result<u64, PortError>,
    ) -> bool {
        if !self.mounted || ticket.epoch != self.epoch {
            debug!("discarding expiry limit for a torn-down page");
            return false;
        }
        match result {
            Ok(seconds) => {
                self.state.expiry_days = seconds as f64 / SECONDS_PER_DAY;
                debug!(seconds, days = self.state.expiry_days, "expiry limit loaded");
                true
            }
            Err(e) => {
                warn!("expiry limit unavailable, keeping default: {e}");
                false
            }
        }
    }

    /// Run the expiry-limit fetch inline. Hosts with a background runtime
    /// call the registry themselves and use `complete_expiry_fetch`.
    pub fn load_expiry_limit(&mut self, ticket: ExpiryFetchTicket) -> bool {
        let result = self.registry.expiry_limit_seconds();
        self.complete_expiry_fetch(ticket, result)
    }

    pub fn handle(&mut self, command: ReservationCommand) -> Result<CommandResult, ControllerError> {
        match command {
            ReservationCommand::Submit => Ok(CommandResult {
                transition: Some(self.submit()?),
                registration_dispatched: false,
            }),
            ReservationCommand::Confirm => {
                let transition = self.confirm()?;
                let registration_dispatched = transition.to == DialogState::Idle;
                Ok(CommandResult {
                    transition: Some(transition),
                    registration_dispatched,
                })
            }
            ReservationCommand::CancelConfirmation => Ok(CommandResult {
                transition: Some(self.cancel_confirmation()?),
                registration_dispatched: false,
            }),
            ReservationCommand::CancelInsufficientBalance => Ok(CommandResult {
                transition: Some(self.cancel_insufficient_balance()?),
                registration_dispatched: false,
            }),
            ReservationCommand::RequestFaucet => {
                self.request_faucet()?;
                Ok(CommandResult::empty())
            }
        }
    }

    pub fn submit(&mut self) -> Result<StateTransition, ControllerError> {
        self.apply(DialogAction::Submit)
    }

    /// Close the confirmation dialog, then either register or report an
    /// insufficient balance. The fee check is inclusive: exactly 250 POLY
    /// registers.
    pub fn confirm(&mut self) -> Result<StateTransition, ControllerError> {
        self.ensure_mounted()?;
        if self.state.dialog != DialogState::ConfirmationOpen {
            return Err(IllegalTransition {
                from: self.state.dialog,
                action: DialogAction::ConfirmFunded,
            }
            .into());
        }

        let snapshot = self.account.snapshot()?;
        if !snapshot.poly_balance.covers_reservation_fee() {
            info!(balance = %snapshot.poly_balance, "balance below reservation fee");
            return self.apply(DialogAction::ConfirmUnderfunded);
        }

        let transition = self.apply(DialogAction::ConfirmFunded)?;
        let details = self
            .form
            .values()?
            .validate()
            .map_err(ControllerError::InvalidForm)?;

        info!(ticker = %details.ticker, owner = %details.owner, "dispatching ticker registration");
        if let Err(e) = self.registry.register(&details) {
            warn!("ticker registration could not be dispatched: {e}");
            return Err(e.into());
        }
        Ok(transition)
    }

    pub fn cancel_confirmation(&mut self) -> Result<StateTransition, ControllerError> {
        self.apply(DialogAction::CancelConfirmation)
    }

    pub fn cancel_insufficient_balance(&mut self) -> Result<StateTransition, ControllerError> {
        self.apply(DialogAction::CancelInsufficientBalance)
    }

    /// Test-POLY faucet hook. Not wired to any contract yet.
    pub fn request_faucet(&self) -> Result<(), ControllerError> {
        self.ensure_mounted()?;
        debug!("faucet request ignored: no faucet is wired");
        Ok(())
    }

    pub fn props(&self) -> Result<PageProps, ControllerError> {
        let status = self.registry.registration_status()?;
        let snapshot = self.account.snapshot()?;
        Ok(PageProps {
            is_registered: status.is_registered,
            network_name: snapshot.network_name,
            transaction: status.transaction,
        })
    }

    pub fn view(&self) -> Result<ViewModel, ControllerError> {
        Ok(render(&self.state, &self.props()?))
    }

    /// Render and, on a redirect, forward it to the navigation service.
    pub fn present(&self) -> Result<ViewModel, ControllerError> {
        let view = self.view()?;
        if let ViewModel::Redirect { path } = &view {
            self.navigation.redirect_to(path)?;
        }
        Ok(view)
    }

    fn ensure_mounted(&self) -> Result<(), ControllerError> {
        if self.mounted {
            Ok(())
        } else {
            Err(ControllerError::NotMounted)
        }
    }

    fn apply(&mut self, action: DialogAction) -> Result<StateTransition, ControllerError> {
        self.ensure_mounted()?;
        let (next, transition) = dialog_transition(self.state.dialog, action)?;
        debug!(from = ?transition.from, to = ?transition.to, reason = transition.reason, "dialog transition");
        self.state.dialog = next;
        Ok(transition)
    }
}
