use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use crate::timestamp::Timestamp;

use super::{is_payable, mask, transaction_id};

#[derive(Debug, Clone)]
pub struct StripeCharge {
    pub success: bool,
    pub transaction_id: String,
    pub created_at: Timestamp,
}

/// External card processor; tokens are masked before they reach the logs.
#[derive(Debug, Default, Clone)]
pub struct StripeGateway;

impl StripeGateway {
    pub fn new() -> Self {
        Self
    }

    pub fn charge(&self, amount: f64, token: &SecretString) -> StripeCharge {
        let masked = mask(token.expose_secret());
        if !is_payable(amount) {
            warn!("Stripe: Declined ${} with token {}", amount, masked);
            return StripeCharge {
                success: false,
                transaction_id: String::new(),
                created_at: Timestamp::now(),
            };
        }
        info!("Stripe: Charging ${} with token {}", amount, masked);
        StripeCharge {
            success: true,
            transaction_id: transaction_id("stripe"),
            created_at: Timestamp::now(),
        }
    }
}
