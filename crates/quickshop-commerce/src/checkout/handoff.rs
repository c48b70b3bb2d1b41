//! Hand-off of the order to an external messaging link.

use serde::{Deserialize, Serialize};

/// Default base of the messaging link.
pub const DEFAULT_HANDOFF_BASE: &str = "https://wa.me";

/// Builds `<base>/<destination>?text=<message>` links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandoffLink {
    /// Base URL of the messaging service.
    pub base_url: String,
    /// Destination address (e.g. a phone number in international format).
    pub destination: String,
}

impl HandoffLink {
    /// Create a link builder for the default messaging service.
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_HANDOFF_BASE.to_string(),
            destination: destination.into(),
        }
    }

    /// Use a different messaging service.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The link carrying `message`, URL-escaped.
    pub fn url_for(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            self.destination,
            urlencoding::encode(message)
        )
    }
}

/// Opens a link somewhere outside the storefront.
pub trait LinkOpener {
    /// Open `url`. The storefront does not wait on what happens next.
    fn open(&self, url: &str) -> std::io::Result<()>;
}
