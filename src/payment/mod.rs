pub mod payment_registry;

pub mod adapters;
pub mod gateways;
pub mod provider;
pub mod request;
pub mod types;
