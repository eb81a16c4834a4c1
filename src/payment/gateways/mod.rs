//! In-process stand-ins for the payment mechanisms the adapters wrap.
//!
//! Each gateway keeps its own native call shape; none of them knows about
//! `PaymentProvider`.

pub mod bank;
pub mod paypal;
pub mod stripe;

pub use bank::BankGateway;
pub use paypal::{PayPalGateway, PayPalPayment};
pub use stripe::{StripeCharge, StripeGateway};

/// Shared acceptance rule: gateways refuse non-positive or non-finite amounts.
pub(crate) fn is_payable(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

pub(crate) fn transaction_id(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4())
}

/// Hides sensitive identifiers in logs. Only values longer than eight
/// characters keep their last four.
pub(crate) fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", visible)
}
