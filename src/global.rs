//! Process-wide payment registry.
//!
//! Prefer building a `PaymentRegistry` and passing it around; this exists for
//! call sites that cannot be handed one. Creation is gated by `lazy_static`'s
//! one-time initialisation, so concurrent first access still yields a single
//! instance.

use lazy_static::lazy_static;
use tracing::debug;

use crate::payment::payment_registry::PaymentRegistry;

lazy_static! {
    static ref GLOBAL_REGISTRY: PaymentRegistry = {
        debug!("initializing global payment registry");
        PaymentRegistry::with_default_providers()
    };
}

pub fn registry() -> &'static PaymentRegistry {
    &GLOBAL_REGISTRY
}
