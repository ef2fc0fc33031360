//! Payment gateway configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Substrings that mark a credential as a placeholder from a sample `.env`.
/// Matched case-insensitively against both key id and key secret.
const PLACEHOLDER_MARKERS: &[&str] = &["your_razorpay", "your_key", "xxxx", "change_this"];

/// Payment gateway configuration (Razorpay)
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Razorpay key id (public, sent to the client)
    #[serde(default)]
    pub key_id: String,

    /// Razorpay key secret (signs callback payloads)
    #[serde(default = "default_key_secret")]
    pub key_secret: SecretString,

    /// Currency for all orders
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl GatewayConfig {
    /// Whether real gateway credentials are present.
    ///
    /// Empty or placeholder credentials mean the service falls back to the
    /// mock checkout path outside production.
    pub fn is_configured(&self) -> bool {
        !Self::is_placeholder(&self.key_id)
            && !Self::is_placeholder(self.key_secret.expose_secret())
    }

    fn is_placeholder(value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        let lower = value.to_lowercase();
        PLACEHOLDER_MARKERS.iter().any(|m| lower.contains(m))
    }

    /// Validate gateway configuration
    ///
    /// Production refuses to boot without real credentials; every other
    /// environment accepts placeholders and runs the mock checkout path.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if *environment == Environment::Production {
            if !self.is_configured() {
                return Err(ValidationError::PlaceholderGatewayCredentials);
            }
            if !self.key_id.starts_with("rzp_") {
                return Err(ValidationError::InvalidGatewayKeyId);
            }
        }
        if self.currency.is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY_CURRENCY"));
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            key_secret: default_key_secret(),
            currency: default_currency(),
        }
    }
}

fn default_key_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_currency() -> String {
    "INR".to_string()
}
