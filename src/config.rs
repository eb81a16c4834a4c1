use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs::File, io::BufReader, path::Path};
use strum::IntoEnumIterator;

use crate::{payment::provider::ProviderKind, Error, InternalResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentConfig {
    /// registry key -> provider settings
    #[serde(default = "default_providers")]
    pub providers: HashMap<String, ProviderConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderConfig {
    pub provider_type: ProviderKind,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
        }
    }
}

fn default_providers() -> HashMap<String, ProviderConfig> {
    ProviderKind::iter()
        .map(|kind| (kind.to_string(), ProviderConfig { provider_type: kind }))
        .collect()
}

impl PaymentConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to open config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn from_json(content: &str) -> InternalResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` when it exists, the defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
