//! Adapters translating `PaymentProvider::pay` into each gateway's native call.

pub mod bank;
pub mod paypal;
pub mod stripe;

pub use bank::BankPaymentAdapter;
pub use paypal::PayPalPaymentAdapter;
pub use stripe::StripePaymentAdapter;
