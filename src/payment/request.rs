use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{PaymentError, PaymentResult};

/// Request data handed to every provider.
///
/// On the wire this is a flat object: `provider` selects the registered
/// provider, every other key is a mechanism-specific field
/// (`accountNumber`, `token`, `email`, ...).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub provider: String,
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl PaymentRequest {
    pub fn new(provider: &str) -> Self {
        Self {
            provider: provider.to_string(),
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// 文字列フィールドの取得
    pub fn field_str(&self, name: &str) -> PaymentResult<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| PaymentError::missing_field(&self.provider, name))
    }
}
