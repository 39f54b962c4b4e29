use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyCode, LocaleConfig};

/// Presentation and resolution settings supplied by the hosting shell.
/// The shell owns where this lives (file, local storage, remote profile);
/// this layer only defines the shape and the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Name given to the household created for a user with no memberships.
    #[serde(default = "CoreConfig::default_household_name")]
    pub default_household_name: String,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub locale: LocaleConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_household_name: Self::default_household_name(),
            currency: CurrencyCode::default(),
            locale: LocaleConfig::default(),
        }
    }
}

impl CoreConfig {
    fn default_household_name() -> String {
        "My Home".into()
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
