pub mod controller;
pub mod domain;
pub mod form;
pub mod ports;
pub mod state_machine;
pub mod view;

pub use controller::{
    CommandResult, ControllerError, ExpiryFetchTicket, ReservationCommand,
    TickerReservationController,
};
pub use domain::{
    AccountSnapshot, NetworkName, PolyAmount, RegistrationStatus, TickerTransaction,
    TransactionStatus, DEFAULT_EXPIRY_DAYS, FAUCET_AMOUNT_POLY, POLY_DECIMALS,
    RESERVATION_FEE_POLY, SECONDS_PER_DAY, TICKER_SUCCESS_PATH,
};
pub use form::{FieldError, FormField, TickerDetails, TickerFormValues};
pub use ports::{AccountPort, NavigationPort, PortError, TickerFormPort, TickerRegistryPort};
pub use state_machine::{
    dialog_transition, DialogAction, DialogState, IllegalTransition, ReservationState,
    StateTransition,
};
pub use view::{
    render, ButtonKind, DialogButton, DialogIntent, DialogKind, DialogView, PageProps, PageView,
    ViewModel,
};
