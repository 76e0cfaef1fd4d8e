//! Environment-driven configuration.

use thiserror::Error;

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_WHATSAPP_PHONE: &str = "971500000000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid WhatsApp phone {0:?}: expected digits-only international format, e.g. 9715XXXXXXXX")]
    InvalidPhone(String),
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Listen address, `HUB_WEB_BIND`.
    pub bind: String,
    /// Agency WhatsApp number in international format, `HUB_WHATSAPP_PHONE`.
    pub whatsapp_phone: String,
}

impl HubConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = std::env::var("HUB_WEB_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let whatsapp_phone = std::env::var("HUB_WHATSAPP_PHONE")
            .unwrap_or_else(|_| DEFAULT_WHATSAPP_PHONE.to_string());
        validate_phone(&whatsapp_phone)?;
        Ok(Self {
            bind,
            whatsapp_phone,
        })
    }
}

fn validate_phone(phone: &str) -> Result<(), ConfigError> {
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidPhone(phone.to_string()));
    }
    Ok(())
}
