use tracing::{info, warn};

use super::{is_payable, mask};

/// Legacy bank transfer; account numbers are masked before they reach the logs.
#[derive(Debug, Default, Clone)]
pub struct BankGateway;

impl BankGateway {
    pub fn new() -> Self {
        Self
    }

    pub fn process_payment(&self, amount: f64, account_number: &str) -> bool {
        let masked = mask(account_number);
        if !is_payable(amount) || account_number.is_empty() {
            warn!(
                "BankPayment: rejected {} to the account {}",
                amount, masked
            );
            return false;
        }
        info!(
            "BankPayment: Paying {} to the account {}",
            amount, masked
        );
        true
    }
}
