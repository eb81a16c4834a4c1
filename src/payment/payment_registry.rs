use dashmap::DashMap;
use std::{str::FromStr, sync::Arc};
use tracing::{debug, instrument, warn};

use crate::config::PaymentConfig;

use super::{
    adapters::{BankPaymentAdapter, PayPalPaymentAdapter, StripePaymentAdapter},
    gateways::{BankGateway, PayPalGateway, StripeGateway},
    provider::{PaymentProvider, ProviderKind},
    request::PaymentRequest,
    types::{PaymentError, PaymentResult},
};

/// 決済プロバイダーのレジストリ
///
/// Maps a provider key to the `PaymentProvider` that serves it. Callers only
/// see `dispatch`; adding a mechanism means one adapter and one `register`.
#[derive(Clone, Default)]
pub struct PaymentRegistry {
    providers: Arc<DashMap<String, Arc<dyn PaymentProvider>>>,
}

impl PaymentRegistry {
    pub fn new() -> Self {
        Self {
            providers: Arc::new(DashMap::new()),
        }
    }

    /// Registry with every built-in adapter registered under its kind name.
    pub fn with_default_providers() -> Self {
        let registry = Self::new();
        registry.register_providers(&PaymentConfig::default());
        registry
    }

    /// Inserts or replaces the provider for `key`.
    #[instrument(level = "debug", skip(self, provider))]
    pub fn register(&self, key: &str, provider: Arc<dyn PaymentProvider>) {
        if self
            .providers
            .insert(key.to_string(), provider)
            .is_some()
        {
            debug!("provider replaced: {}", key);
        }
    }

    pub fn register_providers(&self, config: &PaymentConfig) {
        for (key, provider_config) in config.providers.iter() {
            self.register(key, Self::create_provider(provider_config.provider_type));
        }
    }

    /// Registers the built-in adapter named by `kind` (e.g. `"stripe"`).
    pub fn register_kind(&self, key: &str, kind: &str) -> PaymentResult<()> {
        let kind = ProviderKind::from_str(kind)
            .map_err(|_| PaymentError::UnknownProviderKind(kind.to_string()))?;
        self.register(key, Self::create_provider(kind));
        Ok(())
    }

    /// Factory for the built-in adapters.
    pub fn create_provider(kind: ProviderKind) -> Arc<dyn PaymentProvider> {
        match kind {
            ProviderKind::Bank => Arc::new(BankPaymentAdapter::new(BankGateway::new())),
            ProviderKind::Stripe => Arc::new(StripePaymentAdapter::new(StripeGateway::new())),
            ProviderKind::PayPal => Arc::new(PayPalPaymentAdapter::new(PayPalGateway::new())),
        }
    }

    pub fn get_provider(&self, key: &str) -> PaymentResult<Arc<dyn PaymentProvider>> {
        self.providers
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| PaymentError::UnknownProvider(key.to_string()))
    }

    /// Routes the payment to the provider named in `request.provider`.
    ///
    /// The provider's result is returned unchanged. An unknown key fails
    /// before any provider is invoked.
    #[instrument(level = "debug", skip(self, request), fields(provider = %request.provider))]
    pub async fn dispatch(&self, amount: f64, request: &PaymentRequest) -> PaymentResult<bool> {
        let provider = self.get_provider(&request.provider).inspect_err(|e| {
            warn!("dispatch failed: {}", e);
        })?;
        let result = provider.pay(amount, request).await;
        debug!("dispatch result: {:?}", result);
        result
    }

    pub fn contains(&self, key: &str) -> bool {
        self.providers.contains_key(key)
    }

    /// Registered keys, sorted.
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .providers
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
