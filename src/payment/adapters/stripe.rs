use async_trait::async_trait;
use secrecy::SecretString;
use tracing::debug;

use crate::payment::{
    gateways::StripeGateway,
    provider::PaymentProvider,
    request::PaymentRequest,
    types::PaymentResult,
};

pub const TOKEN_FIELD: &str = "token";

pub struct StripePaymentAdapter {
    name: String,
    stripe: StripeGateway,
}

impl StripePaymentAdapter {
    pub fn new(stripe: StripeGateway) -> Self {
        Self {
            name: "StripePaymentAdapter".to_string(),
            stripe,
        }
    }
}

impl Default for StripePaymentAdapter {
    fn default() -> Self {
        Self::new(StripeGateway::new())
    }
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn pay(&self, amount: f64, request: &PaymentRequest) -> PaymentResult<bool> {
        let token = SecretString::from(request.field_str(TOKEN_FIELD)?.to_string());
        let charge = self.stripe.charge(amount, &token);
        debug!(
            "stripe charge: success={} transaction_id={} at {}",
            charge.success, charge.transaction_id, charge.created_at
        );
        Ok(charge.success)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
