use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use patternbook::{
    payment::adapters::{BankPaymentAdapter, PayPalPaymentAdapter, StripePaymentAdapter},
    PaymentError, PaymentProvider, PaymentRegistry, PaymentRequest, PaymentResult,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

/// Records every call and answers with a fixed outcome.
struct CountingProvider {
    name: String,
    outcome: bool,
    calls: AtomicUsize,
}

impl CountingProvider {
    fn new(name: &str, outcome: bool) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentProvider for CountingProvider {
    async fn pay(&self, _amount: f64, _request: &PaymentRequest) -> PaymentResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.outcome)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn payment_service() -> PaymentRegistry {
    let registry = PaymentRegistry::new();
    registry.register("bank", Arc::new(BankPaymentAdapter::default()));
    registry.register("stripe", Arc::new(StripePaymentAdapter::default()));
    registry.register("paypal", Arc::new(PayPalPaymentAdapter::default()));
    registry
}

#[tokio::test]
async fn test_payment_service_flow() {
    let registry = payment_service();

    let requests = [
        json!({"provider": "bank", "accountNumber": "1234567890"}),
        json!({"provider": "stripe", "token": "1234567890"}),
        json!({"provider": "paypal", "email": "test@test.com"}),
    ];
    for request in requests {
        let request: PaymentRequest = serde_json::from_value(request).unwrap();
        assert_eq!(registry.dispatch(100.0, &request).await, Ok(true));
    }
}

#[tokio::test]
async fn test_unknown_provider_scenario() {
    let registry = payment_service();
    let request: PaymentRequest =
        serde_json::from_value(json!({"provider": "unknown", "accountNumber": "123"})).unwrap();

    let err = registry.dispatch(100.0, &request).await.unwrap_err();
    assert_eq!(err, PaymentError::UnknownProvider("unknown".to_string()));
    assert_eq!(err.to_string(), "Provider unknown not found");
}

#[tokio::test]
async fn test_unknown_provider_invokes_nothing() {
    let registry = PaymentRegistry::new();
    let bank = CountingProvider::new("bank", true);
    registry.register("bank", bank.clone());

    let result = registry.dispatch(5.0, &PaymentRequest::new("Bank")).await;
    assert_eq!(result, Err(PaymentError::UnknownProvider("Bank".to_string())));
    assert_eq!(bank.calls(), 0);
}

#[tokio::test]
async fn test_reregister_routes_to_second_instance() {
    let registry = PaymentRegistry::new();
    let first = CountingProvider::new("first", true);
    let second = CountingProvider::new("second", false);
    let request = PaymentRequest::new("bank").with_field("accountNumber", "123");

    registry.register("bank", first.clone());
    assert_eq!(registry.dispatch(100.0, &request).await, Ok(true));

    registry.register("bank", second.clone());
    assert_eq!(registry.dispatch(100.0, &request).await, Ok(false));
    assert_eq!(registry.dispatch(100.0, &request).await, Ok(false));

    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 2);
}

#[tokio::test]
async fn test_adapter_failures_surface() {
    let registry = payment_service();

    let declined = PaymentRequest::new("stripe").with_field("token", "tok");
    assert_eq!(registry.dispatch(0.0, &declined).await, Ok(false));

    let missing = PaymentRequest::new("paypal");
    assert_eq!(
        registry.dispatch(10.0, &missing).await,
        Err(PaymentError::MissingField {
            provider: "paypal".to_string(),
            field: "email".to_string(),
        })
    );
}

#[tokio::test]
async fn test_new_provider_without_touching_registry() {
    // a mechanism the crate knows nothing about
    struct GiftCardProvider;

    #[async_trait]
    impl PaymentProvider for GiftCardProvider {
        async fn pay(&self, amount: f64, request: &PaymentRequest) -> PaymentResult<bool> {
            let balance = request
                .field("balance")
                .and_then(|v| v.as_f64())
                .unwrap_or_default();
            Ok(balance >= amount)
        }

        fn name(&self) -> &str {
            "GiftCardProvider"
        }
    }

    let registry = payment_service();
    registry.register("giftcard", Arc::new(GiftCardProvider));

    let request = PaymentRequest::new("giftcard").with_field("balance", 50.0);
    assert_eq!(registry.dispatch(20.0, &request).await, Ok(true));
    assert_eq!(registry.dispatch(80.0, &request).await, Ok(false));
}

/// Provider outcomes together with a random registration order.
fn outcomes_and_order() -> impl Strategy<Value = (Vec<bool>, Vec<usize>)> {
    prop::collection::vec(any::<bool>(), 1..8).prop_flat_map(|outcomes| {
        let order: Vec<usize> = (0..outcomes.len()).collect();
        (Just(outcomes), Just(order).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn test_registration_order_does_not_matter((outcomes, order) in outcomes_and_order()) {
        let keys: Vec<String> = (0..outcomes.len()).map(|i| format!("provider_{}", i)).collect();

        let forward = PaymentRegistry::new();
        let shuffled = PaymentRegistry::new();
        for (i, key) in keys.iter().enumerate() {
            forward.register(key, CountingProvider::new(key, outcomes[i]));
        }
        for &i in order.iter() {
            shuffled.register(&keys[i], CountingProvider::new(&keys[i], outcomes[i]));
        }

        let runtime = tokio::runtime::Runtime::new().unwrap();
        for (i, key) in keys.iter().enumerate() {
            let request = PaymentRequest::new(key);
            let a = runtime.block_on(forward.dispatch(1.0, &request));
            let b = runtime.block_on(shuffled.dispatch(1.0, &request));
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a, Ok(outcomes[i]));
        }
        prop_assert_eq!(forward.provider_names(), shuffled.provider_names());
    }
}
