use tracing::{info, warn};

use super::{is_payable, transaction_id};

#[derive(Debug, Clone, PartialEq)]
pub struct PayPalPayment {
    pub amount: f64,
    pub email: String,
}

/// External wallet processor; returns a transaction id per executed payment.
#[derive(Debug, Default, Clone)]
pub struct PayPalGateway;

impl PayPalGateway {
    pub fn new() -> Self {
        Self
    }

    /// Returns the transaction id, empty when the payment was not executed.
    pub fn execute_payment(&self, payment: PayPalPayment) -> String {
        if !is_payable(payment.amount) {
            warn!(
                "PayPal: Refused ${} for {}",
                payment.amount, payment.email
            );
            return String::new();
        }
        info!(
            "PayPal: Processing ${} for {}",
            payment.amount, payment.email
        );
        transaction_id("paypal")
    }
}
