use poly_ticker_core::{
    render, DialogIntent, DialogKind, DialogState, NetworkName, PageProps, ReservationState,
    TickerTransaction, ViewModel,
};

fn props(network: &str, is_registered: bool) -> PageProps {
    PageProps {
        is_registered,
        network_name: NetworkName::new(network),
        transaction: None,
    }
}

fn state(dialog: DialogState) -> ReservationState {
    ReservationState {
        dialog,
        ..ReservationState::default()
    }
}

fn expect_page(view: ViewModel) -> poly_ticker_core::PageView {
    match view {
        ViewModel::Render(page) => page,
        ViewModel::Redirect { path } => panic!("unexpected redirect to {path}"),
    }
}

#[test]
fn registered_renders_only_a_redirect() {
    for dialog in [
        DialogState::Idle,
        DialogState::ConfirmationOpen,
        DialogState::InsufficientBalanceOpen,
    ] {
        let view = render(&state(dialog), &props(NetworkName::KOVAN, true));
        assert_eq!(
            view,
            ViewModel::Redirect {
                path: "/ticker/success".to_owned()
            }
        );
    }
}

#[test]
fn idle_page_shows_no_dialogs() {
    let page = expect_page(render(
        &ReservationState::default(),
        &props(NetworkName::KOVAN, false),
    ));
    assert!(page.visible_dialog().is_none());
    assert_eq!(page.document_title, "Token Symbol Reservation – Polymath");
    assert!(page.expiry_notice.contains("reserved for 7 days"));
}

#[test]
fn confirmation_dialog_offers_cancel_and_reserve() {
    let page = expect_page(render(
        &state(DialogState::ConfirmationOpen),
        &props(NetworkName::MAINNET, false),
    ));
    let dialog = page.confirmation_dialog.expect("confirmation visible");
    assert_eq!(dialog.kind, DialogKind::Confirmation);
    let intents: Vec<_> = dialog.buttons.iter().map(|b| b.intent).collect();
    assert_eq!(
        intents,
        vec![DialogIntent::CancelConfirmation, DialogIntent::Confirm]
    );
    assert!(page.testnet_balance_dialog.is_none());
    assert!(page.mainnet_balance_dialog.is_none());
}

#[test]
fn kovan_balance_dialog_offers_faucet() {
    let page = expect_page(render(
        &state(DialogState::InsufficientBalanceOpen),
        &props(NetworkName::KOVAN, false),
    ));
    let dialog = page.testnet_balance_dialog.expect("testnet dialog visible");
    assert!(page.mainnet_balance_dialog.is_none());
    assert!(dialog
        .buttons
        .iter()
        .any(|b| b.intent == DialogIntent::RequestFaucet && b.label == "REQUEST 25k POLY"));
    assert!(dialog.paragraphs[0].contains("fixed cost of 250 POLY"));
}

#[test]
fn mainnet_balance_dialog_only_cancels() {
    let page = expect_page(render(
        &state(DialogState::InsufficientBalanceOpen),
        &props(NetworkName::MAINNET, false),
    ));
    let dialog = page.mainnet_balance_dialog.expect("mainnet dialog visible");
    assert!(page.testnet_balance_dialog.is_none());
    assert_eq!(dialog.buttons.len(), 1);
    assert_eq!(dialog.buttons[0].intent, DialogIntent::CancelInsufficientBalance);
}

#[test]
fn unknown_network_shows_no_balance_dialog() {
    for network in ["Ropsten Testnet", "Unknown Network (1337)", "kovan testnet", ""] {
        let page = expect_page(render(
            &state(DialogState::InsufficientBalanceOpen),
            &props(network, false),
        ));
        assert!(page.visible_dialog().is_none(), "network {network:?}");
    }
}

#[test]
fn fractional_expiry_is_printed_trimmed() {
    let page = expect_page(render(
        &ReservationState {
            dialog: DialogState::Idle,
            expiry_days: 1.5,
        },
        &props(NetworkName::KOVAN, false),
    ));
    assert!(page.expiry_notice.contains("reserved for 1.5 days"));
}

#[test]
fn in_flight_transaction_is_passed_through() {
    let mut p = props(NetworkName::KOVAN, false);
    p.transaction = Some(TickerTransaction::pending("POLY"));
    let page = expect_page(render(&ReservationState::default(), &p));
    assert!(page.transaction.expect("transaction").is_in_flight());
}
