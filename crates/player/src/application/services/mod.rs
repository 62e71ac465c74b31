//! Application services
//!
//! Services depend on port traits, not on the concrete HTTP adapter.

pub mod action_proxy;
pub mod state_fetcher;

pub use action_proxy::ActionProxy;
pub use state_fetcher::StateFetcher;
