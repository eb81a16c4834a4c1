use async_trait::async_trait;

use crate::payment::{
    gateways::BankGateway,
    provider::PaymentProvider,
    request::PaymentRequest,
    types::PaymentResult,
};

pub const ACCOUNT_NUMBER_FIELD: &str = "accountNumber";

pub struct BankPaymentAdapter {
    name: String,
    bank: BankGateway,
}

impl BankPaymentAdapter {
    pub fn new(bank: BankGateway) -> Self {
        Self {
            name: "BankPaymentAdapter".to_string(),
            bank,
        }
    }
}

impl Default for BankPaymentAdapter {
    fn default() -> Self {
        Self::new(BankGateway::new())
    }
}

#[async_trait]
impl PaymentProvider for BankPaymentAdapter {
    async fn pay(&self, amount: f64, request: &PaymentRequest) -> PaymentResult<bool> {
        let account_number = request.field_str(ACCOUNT_NUMBER_FIELD)?;
        Ok(self.bank.process_payment(amount, account_number))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
