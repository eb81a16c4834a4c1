pub mod config;
pub mod error;
pub mod global;
pub mod payment;
pub mod squad;
pub mod timestamp;

// Re-exports
pub use error::*;
pub use payment::{
    payment_registry::PaymentRegistry,
    provider::{PaymentProvider, ProviderKind},
    request::PaymentRequest,
    types::{PaymentError, PaymentResult},
};
