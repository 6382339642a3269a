pub mod backup;
pub mod config;
pub mod filter;
pub mod log;
pub mod stats;
pub mod store;

pub use filter::ApplicationFilter;
pub use store::ApplicationStore;
