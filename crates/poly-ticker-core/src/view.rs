//! Pure view model for the ticker reservation page.
//!
//! `render` is a function of controller state and collaborator snapshots
//! only. The hosting shell draws the result and performs navigation.

use serde::{Deserialize, Serialize};

use crate::domain::{NetworkName, TickerTransaction, FAUCET_AMOUNT_POLY, RESERVATION_FEE_POLY, TICKER_SUCCESS_PATH};
use crate::state_machine::ReservationState;

pub const DOCUMENT_TITLE: &str = "Token Symbol Reservation – Polymath";
pub const PAGE_HEADING: &str = "Reserve Your Token Symbol";

/// Collaborator data the page reads on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProps {
    pub is_registered: bool,
    pub network_name: NetworkName,
    pub transaction: Option<TickerTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewModel {
    Redirect { path: String },
    Render(PageView),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageView {
    pub document_title: String,
    pub heading: String,
    pub expiry_notice: String,
    pub confirmation_dialog: Option<DialogView>,
    pub testnet_balance_dialog: Option<DialogView>,
    pub mainnet_balance_dialog: Option<DialogView>,
    pub transaction: Option<TickerTransaction>,
}

impl PageView {
    /// The dialog the shell should draw, if any. At most one is ever visible.
    pub fn visible_dialog(&self) -> Option<&DialogView> {
        self.confirmation_dialog
            .as_ref()
            .or(self.testnet_balance_dialog.as_ref())
            .or(self.mainnet_balance_dialog.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogKind {
    Confirmation,
    InsufficientBalanceTestnet,
    InsufficientBalanceMainnet,
}

/// What pressing a dialog button asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogIntent {
    CancelConfirmation,
    Confirm,
    CancelInsufficientBalance,
    RequestFaucet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonKind {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogButton {
    pub label: String,
    pub kind: ButtonKind,
    pub intent: DialogIntent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogView {
    pub kind: DialogKind,
    pub label: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub buttons: Vec<DialogButton>,
}

pub fn render(state: &ReservationState, props: &PageProps) -> ViewModel {
    if props.is_registered {
        return ViewModel::Redirect {
            path: TICKER_SUCCESS_PATH.to_owned(),
        };
    }

    let balance_dialog_open = state.insufficient_balance_dialog_open();

    ViewModel::Render(PageView {
        document_title: DOCUMENT_TITLE.to_owned(),
        heading: PAGE_HEADING.to_owned(),
        expiry_notice: expiry_notice(state.expiry_days),
        confirmation_dialog: state
            .confirmation_dialog_open()
            .then(confirmation_dialog),
        testnet_balance_dialog: (balance_dialog_open && props.network_name.is_kovan())
            .then(testnet_balance_dialog),
        mainnet_balance_dialog: (balance_dialog_open && props.network_name.is_mainnet())
            .then(mainnet_balance_dialog),
        transaction: props.transaction.clone(),
    })
}

pub fn expiry_notice(expiry_days: f64) -> String {
    format!(
        "Your token symbol will be reserved for {} days, and permanently yours once you \
         create your Token. This reservation ensures that no other organization can use \
         your brand or create an identical token symbol using the Polymath platform.",
        format_days(expiry_days)
    )
}

/// Whole day counts print without a fractional part.
pub fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{days:.0}")
    } else {
        let s = format!("{days:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

fn button(label: &str, kind: ButtonKind, intent: DialogIntent) -> DialogButton {
    DialogButton {
        label: label.to_owned(),
        kind,
        intent,
    }
}

fn confirmation_dialog() -> DialogView {
    DialogView {
        kind: DialogKind::Confirmation,
        label: "Confirmation required".to_owned(),
        title: "Before You Proceed with Your Token Symbol Reservation".to_owned(),
        paragraphs: vec![
            "Please confirm that all previous information is correct and that you are not \
             violating any trademarks."
                .to_owned(),
            "Once you hit «RESERVE TICKER», your Token Symbol reservation will be sent to the \
             blockchain and will be immutable. Any change will require that you start the \
             process over. If you wish to review your information, please select «CANCEL»."
                .to_owned(),
        ],
        buttons: vec![
            button("Cancel", ButtonKind::Secondary, DialogIntent::CancelConfirmation),
            button("Reserve Ticker", ButtonKind::Primary, DialogIntent::Confirm),
        ],
    }
}

fn fee_paragraph() -> String {
    format!(
        "The registration of a token symbol has a fixed cost of {RESERVATION_FEE_POLY} POLY. \
         Please make sure that your wallet has a sufficient balance in POLY to complete this \
         operation."
    )
}

fn testnet_balance_dialog() -> DialogView {
    let faucet_label = format!("REQUEST {}k POLY", FAUCET_AMOUNT_POLY / 1_000);
    DialogView {
        kind: DialogKind::InsufficientBalanceTestnet,
        label: "Confirmation required".to_owned(),
        title: "Transaction Impossible".to_owned(),
        paragraphs: vec![
            fee_paragraph(),
            "You are currently connected to the Kovan Test Network.".to_owned(),
            format!(
                "As such, you can click on the «{}» button below to receive {} test POLY in \
                 your wallet.",
                faucet_label.to_uppercase(),
                group_thousands(FAUCET_AMOUNT_POLY)
            ),
        ],
        buttons: vec![
            button(
                "Cancel",
                ButtonKind::Secondary,
                DialogIntent::CancelInsufficientBalance,
            ),
            button(&faucet_label, ButtonKind::Primary, DialogIntent::RequestFaucet),
        ],
    }
}

fn mainnet_balance_dialog() -> DialogView {
    DialogView {
        kind: DialogKind::InsufficientBalanceMainnet,
        label: "Confirmation required".to_owned(),
        title: "Transaction Impossible".to_owned(),
        paragraphs: vec![
            fee_paragraph(),
            "You can purchase POLY at your favourite exchange.".to_owned(),
        ],
        buttons: vec![button(
            "Cancel",
            ButtonKind::Secondary,
            DialogIntent::CancelInsufficientBalance,
        )],
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
