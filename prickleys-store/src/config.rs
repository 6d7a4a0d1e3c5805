//! Storefront configuration
use serde::{Deserialize, Serialize};

/// Default address that receives order emails.
pub const DEFAULT_SUPPORT_EMAIL: &str = "prickleysofficial254@gmail.com";
/// Default subject line of order emails.
pub const DEFAULT_ORDER_SUBJECT: &str = "New Order from Prickleys Store";
/// Currency label printed before every amount.
pub const DEFAULT_CURRENCY: &str = "Ksh";

/// Document metadata applied to the page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub viewport: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Prickleys Handwash Store".to_string(),
            description: "Affordable, moisturizing handwash that kills 99.9% germs with delightful fragrances.".to_string(),
            viewport: "width=device-width, initial-scale=1".to_string(),
        }
    }
}

/// Fixed values the storefront needs to place an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub support_email: String,
    pub subject: String,
    pub currency: String,
    pub page: PageMeta,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl StorefrontConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            support_email: DEFAULT_SUPPORT_EMAIL.to_string(),
            subject: DEFAULT_ORDER_SUBJECT.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            page: PageMeta::default(),
        }
    }

    /// Parse configuration from JSON, filling missing keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
