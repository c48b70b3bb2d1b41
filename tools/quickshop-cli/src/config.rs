//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use quickshop_commerce::checkout::{MessageTemplate, DEFAULT_HANDOFF_BASE};
use quickshop_commerce::Currency;
use serde::{Deserialize, Serialize};

/// Store name used when no config overrides it.
pub const DEFAULT_STORE_NAME: &str = "Quickshop";

/// Checkout destination used when no config overrides it.
pub const DEFAULT_DESTINATION: &str = "5215555555555";

/// Config file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["quickshop.toml", ".quickshop.toml", "quickshop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuickshopConfig {
    /// Store identity.
    #[serde(default)]
    pub store: StoreConfig,

    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Search behavior.
    #[serde(default)]
    pub search: SearchConfig,

    /// Checkout message and link.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Product display.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl QuickshopConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.store.currency().is_none() {
            bail!("Unknown currency code: {}", self.store.currency);
        }
        if self.store.destination.trim().is_empty() {
            bail!("store.destination must not be empty");
        }
        if self.catalog.source.trim().is_empty() {
            bail!("catalog.source must not be empty");
        }
        Ok(())
    }

    /// The checkout message wording.
    pub fn message_template(&self) -> MessageTemplate {
        MessageTemplate {
            greeting: self.checkout.greeting.clone(),
            total_label: self.checkout.total_label.clone(),
            closing: self.checkout.closing.clone(),
        }
    }
}

/// Store identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in the header, footer and greeting.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Checkout destination address.
    #[serde(default = "default_destination")]
    pub destination: String,

    /// ISO currency code prices are in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_store_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

fn default_destination() -> String {
    DEFAULT_DESTINATION.to_string()
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl StoreConfig {
    /// The configured currency, if the code is known.
    pub fn currency(&self) -> Option<Currency> {
        Currency::from_code(&self.currency)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            destination: default_destination(),
            currency: default_currency(),
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL or file path of the product list. Relative paths resolve
    /// against the config file's directory.
    #[serde(default = "default_source")]
    pub source: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_source() -> String {
    "data/products.json".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl CatalogConfig {
    /// The request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Search behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet window before typed text is applied, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    300
}

impl SearchConfig {
    /// The debounce delay.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Checkout message and link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Base URL of the messaging service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// First line of the message; `{store}` is replaced.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Label before the total.
    #[serde(default = "default_total_label")]
    pub total_label: String,

    /// Last line of the message.
    #[serde(default = "default_closing")]
    pub closing: String,
}

fn default_base_url() -> String {
    DEFAULT_HANDOFF_BASE.to_string()
}

fn default_greeting() -> String {
    MessageTemplate::default().greeting
}

fn default_total_label() -> String {
    MessageTemplate::default().total_label
}

fn default_closing() -> String {
    MessageTemplate::default().closing
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            greeting: default_greeting(),
            total_label: default_total_label(),
            closing: default_closing(),
        }
    }
}

/// Product display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Image shown for products without one.
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,

    /// Description excerpt length in characters.
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
}

fn default_fallback_image() -> String {
    "https://picsum.photos/400/300?grayscale".to_string()
}

fn default_excerpt_chars() -> usize {
    60
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fallback_image: default_fallback_image(),
            excerpt_chars: default_excerpt_chars(),
        }
    }
}

/// Generate a default quickshop.toml config file.
pub fn generate_default_config(store_name: &str) -> String {
    format!(
        r#"# Quickshop storefront configuration

[store]
name = "{store_name}"
destination = "{destination}"
currency = "USD"

[catalog]
# A file path (relative to this file) or an http(s) URL
source = "data/products.json"
timeout_secs = 10

[search]
debounce_ms = 300

[checkout]
base_url = "{base_url}"
greeting = "Hello {{store}}! I would like to place the following order:"
total_label = "Order total:"
closing = "Thank you!"

[display]
fallback_image = "https://picsum.photos/400/300?grayscale"
excerpt_chars = 60
"#,
        store_name = store_name,
        destination = DEFAULT_DESTINATION,
        base_url = DEFAULT_HANDOFF_BASE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = QuickshopConfig::default();
        assert_eq!(config.store.name, DEFAULT_STORE_NAME);
        assert_eq!(config.store.destination, DEFAULT_DESTINATION);
        assert_eq!(config.store.currency(), Some(Currency::USD));
        assert_eq!(config.search.delay(), Duration::from_millis(300));
        assert_eq!(config.display.excerpt_chars, 60);
        assert_eq!(config.message_template(), MessageTemplate::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: QuickshopConfig = toml::from_str(
            r#"
            [store]
            name = "Corner Shop"

            [search]
            debounce_ms = 150
            "#,
        )
        .unwrap();

        assert_eq!(config.store.name, "Corner Shop");
        assert_eq!(config.store.destination, DEFAULT_DESTINATION);
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.checkout.base_url, DEFAULT_HANDOFF_BASE);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: QuickshopConfig = toml::from_str(&generate_default_config("Corner Shop")).unwrap();
        assert_eq!(config.store.name, "Corner Shop");
        assert_eq!(config.checkout.greeting, default_greeting());
        config.validate().unwrap();
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"store": {"name": "Json Shop", "currency": "EUR"}}"#)
            .unwrap();

        let config = QuickshopConfig::load(file.path()).unwrap();
        assert_eq!(config.store.name, "Json Shop");
        assert_eq!(config.store.currency(), Some(Currency::EUR));
    }

    #[test]
    fn test_validate_rejects_unknown_currency() {
        let mut config = QuickshopConfig::default();
        config.store.currency = "XYZ".to_string();
        assert!(config.validate().is_err());
    }
}
