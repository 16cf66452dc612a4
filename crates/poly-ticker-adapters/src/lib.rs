pub mod account;
pub mod config;
pub mod contracts;
pub mod form;
pub mod navigation;
pub mod registry;
pub mod rpc;

pub use account::AccountStoreAdapter;
pub use config::TickerAdapterConfig;
pub use form::TickerFormStore;
pub use navigation::NavigationAdapter;
pub use registry::TickerRegistryAdapter;
pub use rpc::JsonRpcClient;
