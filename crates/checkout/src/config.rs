use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_RECIPIENT: &str = "5511957695751";
pub const DEFAULT_CURRENCY: &str = "R$";

/// Where checkout links point and how amounts are labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Messaging service root, without trailing slash.
    pub base_url: String,
    /// Recipient phone number / handle appended as the path.
    pub recipient: String,
    /// Currency symbol printed before every amount.
    pub currency: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}
