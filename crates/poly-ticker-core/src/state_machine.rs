use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DialogState {
    #[default]
    Idle,
    ConfirmationOpen,
    InsufficientBalanceOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogAction {
    Submit,
    CancelConfirmation,
    /// Confirmed with a balance that covers the reservation fee.
    ConfirmFunded,
    /// Confirmed with a balance below the reservation fee.
    ConfirmUnderfunded,
    CancelInsufficientBalance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub from: DialogState,
    pub to: DialogState,
    pub reason: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("illegal dialog transition: {from:?} --{action:?}-->")]
pub struct IllegalTransition {
    pub from: DialogState,
    pub action: DialogAction,
}

pub fn dialog_transition(
    from: DialogState,
    action: DialogAction,
) -> Result<(DialogState, StateTransition), IllegalTransition> {
    use DialogAction as A;
    use DialogState as S;

    let (to, reason) = match (from, action) {
        (S::Idle, A::Submit) => (S::ConfirmationOpen, "form submitted"),
        (S::ConfirmationOpen, A::Submit) => (S::ConfirmationOpen, "confirmation already open"),
        (S::ConfirmationOpen, A::CancelConfirmation) => (S::Idle, "confirmation cancelled"),
        (S::ConfirmationOpen, A::ConfirmFunded) => (S::Idle, "registration dispatched"),
        (S::ConfirmationOpen, A::ConfirmUnderfunded) => {
            (S::InsufficientBalanceOpen, "balance below reservation fee")
        }
        // Unrecognised networks render no balance dialog, so the form stays live.
        (S::InsufficientBalanceOpen, A::Submit) => (S::ConfirmationOpen, "form resubmitted"),
        (S::InsufficientBalanceOpen, A::CancelInsufficientBalance) => {
            (S::Idle, "insufficient balance dismissed")
        }
        (S::Idle, A::CancelConfirmation | A::CancelInsufficientBalance) => {
            (S::Idle, "dialog already closed")
        }
        (S::ConfirmationOpen, A::CancelInsufficientBalance) => {
            (S::ConfirmationOpen, "dialog already closed")
        }
        (S::InsufficientBalanceOpen, A::CancelConfirmation) => {
            (S::InsufficientBalanceOpen, "dialog already closed")
        }
        _ => return Err(IllegalTransition { from, action }),
    };

    Ok((to, StateTransition { from, to, reason }))
}

/// Ephemeral page state owned by the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationState {
    pub dialog: DialogState,
    pub expiry_days: f64,
}

impl Default for ReservationState {
    fn default() -> Self {
        Self {
            dialog: DialogState::Idle,
            expiry_days: crate::domain::DEFAULT_EXPIRY_DAYS,
        }
    }
}

impl ReservationState {
    pub fn confirmation_dialog_open(&self) -> bool {
        self.dialog == DialogState::ConfirmationOpen
    }

    pub fn insufficient_balance_dialog_open(&self) -> bool {
        self.dialog == DialogState::InsufficientBalanceOpen
    }
}
