use thiserror::Error;

/// 決済処理のエラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PaymentError {
    #[error("Provider {0} not found")]
    UnknownProvider(String),

    #[error("Provider {provider} requires field `{field}`")]
    MissingField { provider: String, field: String },

    #[error("Unknown provider kind: {0}")]
    UnknownProviderKind(String),
}

pub type PaymentResult<T> = Result<T, PaymentError>;

impl PaymentError {
    pub fn missing_field(provider: &str, field: &str) -> Self {
        PaymentError::MissingField {
            provider: provider.to_string(),
            field: field.to_string(),
        }
    }
}
