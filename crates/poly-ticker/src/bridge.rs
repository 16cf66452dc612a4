//! Bridge between the egui shell and the reservation workspace crates.
//! The shell reaches the controller and its adapters only through here.

use poly_ticker_adapters::{
    AccountStoreAdapter, NavigationAdapter, TickerAdapterConfig, TickerFormStore,
    TickerRegistryAdapter,
};
use poly_ticker_core::{
    CommandResult, ControllerError, ExpiryFetchTicket, PortError, ReservationCommand,
    ReservationState, TickerFormPort, TickerFormValues, TickerReservationController, ViewModel,
};

type ReservationController = TickerReservationController<
    AccountStoreAdapter,
    TickerRegistryAdapter,
    TickerFormStore,
    NavigationAdapter,
>;

pub struct ReservationBridge {
    controller: ReservationController,
}

impl ReservationBridge {
    pub fn new(config: TickerAdapterConfig) -> Self {
        Self {
            controller: TickerReservationController::new(
                AccountStoreAdapter::connect(config.clone()),
                TickerRegistryAdapter::with_config(config),
                TickerFormStore::default(),
                NavigationAdapter::default(),
            ),
        }
    }

    pub fn mount(&mut self) -> Result<ExpiryFetchTicket, ControllerError> {
        self.controller.mount()
    }

    pub fn unmount(&mut self) {
        self.controller.unmount();
    }

    pub fn complete_expiry_fetch(
        &mut self,
        ticket: ExpiryFetchTicket,
        result: Result<u64, PortError>,
    ) -> bool {
        self.controller.complete_expiry_fetch(ticket, result)
    }

    pub fn handle(&mut self, command: ReservationCommand) -> Result<CommandResult, ControllerError> {
        self.controller.handle(command)
    }

    pub fn present(&self) -> Result<ViewModel, ControllerError> {
        self.controller.present()
    }

    pub fn state(&self) -> &ReservationState {
        self.controller.state()
    }

    pub fn form_values(&self) -> Result<TickerFormValues, PortError> {
        self.controller.form.values()
    }

    pub fn set_form_values(&self, values: TickerFormValues) -> Result<(), PortError> {
        self.controller.form.replace(values)
    }

    pub fn take_redirect(&self) -> Result<Option<String>, PortError> {
        self.controller.navigation.take_redirect()
    }

    /// Adapter handles for background work. They share state with the controller.
    pub fn registry(&self) -> TickerRegistryAdapter {
        self.controller.registry.clone()
    }

    pub fn account(&self) -> AccountStoreAdapter {
        self.controller.account.clone()
    }
}
