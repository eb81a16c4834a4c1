use async_trait::async_trait;
use tracing::debug;

use crate::payment::{
    gateways::{PayPalGateway, PayPalPayment},
    provider::PaymentProvider,
    request::PaymentRequest,
    types::PaymentResult,
};

pub const EMAIL_FIELD: &str = "email";

pub struct PayPalPaymentAdapter {
    name: String,
    paypal: PayPalGateway,
}

impl PayPalPaymentAdapter {
    pub fn new(paypal: PayPalGateway) -> Self {
        Self {
            name: "PayPalPaymentAdapter".to_string(),
            paypal,
        }
    }
}

impl Default for PayPalPaymentAdapter {
    fn default() -> Self {
        Self::new(PayPalGateway::new())
    }
}

#[async_trait]
impl PaymentProvider for PayPalPaymentAdapter {
    async fn pay(&self, amount: f64, request: &PaymentRequest) -> PaymentResult<bool> {
        let email = request.field_str(EMAIL_FIELD)?;
        let transaction_id = self.paypal.execute_payment(PayPalPayment {
            amount,
            email: email.to_string(),
        });
        debug!("paypal transaction_id: {:?}", transaction_id);
        Ok(!transaction_id.is_empty())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
