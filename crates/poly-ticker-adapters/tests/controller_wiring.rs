mod common;

use std::sync::{Arc, Mutex};

use common::{node_account, rpc_config, spawn_mock_node};
use poly_ticker_adapters::{
    AccountStoreAdapter, NavigationAdapter, TickerAdapterConfig, TickerFormStore,
    TickerRegistryAdapter,
};
use poly_ticker_core::{
    PolyAmount, ReservationCommand, TickerFormPort, TickerFormValues, TickerRegistryPort,
    TickerReservationController,
    ViewModel,
};

type WiredController = TickerReservationController<
    AccountStoreAdapter,
    TickerRegistryAdapter,
    TickerFormStore,
    NavigationAdapter,
>;

fn wired(balance: u64) -> WiredController {
    let cfg = TickerAdapterConfig {
        deterministic_balance: PolyAmount::from_whole(balance),
        deterministic_expiry_limit_secs: 10 * 86_400,
        ..TickerAdapterConfig::default()
    };
    TickerReservationController::new(
        AccountStoreAdapter::with_config(cfg.clone()),
        TickerRegistryAdapter::with_config(cfg),
        TickerFormStore::default(),
        NavigationAdapter::default(),
    )
}

#[test]
fn reservation_flow_ends_in_success_redirect() {
    let mut controller = wired(1_000);
    let ticket = controller.mount().expect("mount");
    assert!(controller.load_expiry_limit(ticket));
    assert_eq!(controller.state().expiry_days, 10.0);

    let owner = controller.form.values().expect("values").owner;
    controller
        .form
        .replace(TickerFormValues {
            ticker: "tkn".to_owned(),
            token_name: "Token".to_owned(),
            owner,
        })
        .expect("fill form");

    controller.handle(ReservationCommand::Submit).expect("submit");
    let result = controller.handle(ReservationCommand::Confirm).expect("confirm");
    assert!(result.registration_dispatched);

    match controller.present().expect("present") {
        ViewModel::Render(page) => {
            assert!(page.transaction.expect("transaction").is_in_flight());
        }
        ViewModel::Redirect { .. } => panic!("not registered yet"),
    }
    assert!(controller.navigation.take_redirect().expect("redirect").is_none());

    controller.registry.poll().expect("poll");
    assert!(matches!(
        controller.present().expect("present"),
        ViewModel::Redirect { .. }
    ));
    assert_eq!(
        controller.navigation.take_redirect().expect("redirect").as_deref(),
        Some("/ticker/success")
    );
}

#[test]
fn default_config_balance_is_blocked_on_kovan() {
    let mut controller = wired(0);
    controller.mount().expect("mount");
    controller.submit().expect("submit");
    controller.confirm().expect("confirm");

    match controller.view().expect("view") {
        ViewModel::Render(page) => assert!(page.testnet_balance_dialog.is_some()),
        ViewModel::Redirect { .. } => panic!("unexpected redirect"),
    }
    assert!(controller
        .registry
        .registration_status()
        .expect("status")
        .transaction
        .is_none());
}

#[test]
fn rpc_mount_seeds_owner_from_node_account() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let cfg = rpc_config(spawn_mock_node(Arc::clone(&calls), 3));
    let mut controller: WiredController = TickerReservationController::new(
        AccountStoreAdapter::connect(cfg.clone()),
        TickerRegistryAdapter::with_config(cfg),
        TickerFormStore::default(),
        NavigationAdapter::default(),
    );

    controller.mount().expect("mount");

    let owner = controller.form.values().expect("values").owner;
    assert_eq!(owner, node_account().to_checksum(None));
    let ViewModel::Render(page) = controller.view().expect("view") else {
        panic!("nothing registered yet");
    };
    assert!(page.visible_dialog().is_none());
    let methods: Vec<String> = calls
        .lock()
        .expect("calls")
        .iter()
        .map(|(m, _)| m.clone())
        .collect();
    assert_eq!(methods, ["eth_accounts", "eth_chainId", "eth_call"]);
}
