//! Environment-driven configuration.

use std::path::PathBuf;

use digimenu_checkout::CheckoutConfig;
use digimenu_observability::LogFormat;

use crate::error::KioskError;

pub const ENV_CATALOG: &str = "DIGIMENU_CATALOG";
pub const ENV_WHATSAPP_NUMBER: &str = "DIGIMENU_WHATSAPP_NUMBER";
pub const ENV_CHECKOUT_BASE_URL: &str = "DIGIMENU_CHECKOUT_BASE_URL";
pub const ENV_CURRENCY: &str = "DIGIMENU_CURRENCY";
pub const ENV_LOG_FORMAT: &str = "DIGIMENU_LOG_FORMAT";

pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    pub catalog_path: PathBuf,
    pub checkout: CheckoutConfig,
    pub log_format: LogFormat,
    /// Variables that were unset and fell back to their defaults.
    pub defaulted: Vec<&'static str>,
}

impl KioskConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, KioskError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Log the fallbacks taken while reading the environment.
    ///
    /// Separate from parsing because the subscriber is only installed once the
    /// log format is known.
    pub fn report_defaults(&self) {
        for key in &self.defaulted {
            tracing::warn!("{key} not set; using default");
        }
        tracing::info!(
            catalog = %self.catalog_path.display(),
            recipient = %self.checkout.recipient,
            base_url = %self.checkout.base_url,
            "configuration loaded"
        );
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, KioskError> {
        let defaults = CheckoutConfig::default();
        let mut defaulted = Vec::new();
        let mut read = |key: &'static str| {
            let value = lookup(key);
            if value.is_none() {
                defaulted.push(key);
            }
            value
        };

        let catalog_path = read(ENV_CATALOG)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        let recipient = read(ENV_WHATSAPP_NUMBER)
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.recipient);
        if recipient.is_empty() || recipient.chars().any(char::is_whitespace) {
            return Err(KioskError::config(format!(
                "{ENV_WHATSAPP_NUMBER} must be a non-empty number without spaces"
            )));
        }

        let base_url = read(ENV_CHECKOUT_BASE_URL).unwrap_or(defaults.base_url);
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(KioskError::config(format!(
                "{ENV_CHECKOUT_BASE_URL} must be an http(s) URL (got '{base_url}')"
            )));
        }

        let currency = read(ENV_CURRENCY).unwrap_or(defaults.currency);

        let log_format = match read(ENV_LOG_FORMAT) {
            Some(v) => v.parse::<LogFormat>().map_err(KioskError::config)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            catalog_path,
            checkout: CheckoutConfig {
                base_url,
                recipient,
                currency,
            },
            log_format,
            defaulted,
        })
    }
}
