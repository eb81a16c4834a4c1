use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{request::PaymentRequest, types::PaymentResult};

/// Uniform payment capability.
///
/// Every mechanism, whatever its native call shape, is reached through
/// `pay`. Implementations return `Ok(true)` when the mechanism accepted the
/// payment and `Ok(false)` when it declined it.
#[mockall::automock]
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn pay(&self, amount: f64, request: &PaymentRequest) -> PaymentResult<bool>;

    fn name(&self) -> &str;
}

/// Built-in adapter kinds known to the provider factory.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProviderKind {
    Bank,
    Stripe,
    PayPal,
}

impl From<ProviderKind> for String {
    fn from(kind: ProviderKind) -> Self {
        kind.to_string()
    }
}
