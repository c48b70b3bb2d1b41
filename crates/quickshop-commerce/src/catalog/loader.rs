//! One-shot catalog loading.

use crate::catalog::{Catalog, CatalogStatus, ProductRecord};
use crate::error::CommerceError;
use crate::money::Currency;
use quickshop_data::{FetchClient, Resource};

/// Prefix of the message shown when the catalog cannot be loaded.
pub const LOAD_FAILED_PREFIX: &str = "Could not load products";

/// Loads the product catalog from a static resource.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    client: FetchClient,
    resource: Resource,
    currency: Currency,
}

impl CatalogLoader {
    /// Create a loader for `resource`, pricing products in USD.
    pub fn new(client: FetchClient, resource: Resource) -> Self {
        Self {
            client,
            resource,
            currency: Currency::default(),
        }
    }

    /// Price loaded products in `currency`.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// The resource this loader reads.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Fetch and decode the catalog.
    pub async fn fetch(&self) -> Result<Catalog, CommerceError> {
        let records: Vec<ProductRecord> = self
            .client
            .load(&self.resource)
            .await?
            .error_for_status()?
            .json()?;
        Ok(Catalog::from_records(records, self.currency))
    }

    /// Run the load and fold the outcome into a [`CatalogStatus`].
    ///
    /// Never fails: any error becomes [`CatalogStatus::Failed`] with a
    /// message fit for display.
    pub async fn load(&self) -> CatalogStatus {
        tracing::info!(resource = %self.resource, "loading catalog");
        match self.fetch().await {
            Ok(catalog) => {
                tracing::info!(products = catalog.len(), "catalog loaded");
                CatalogStatus::Ready(catalog)
            }
            Err(e) => {
                tracing::warn!(resource = %self.resource, error = %e, "catalog load failed");
                CatalogStatus::Failed {
                    message: format!("{}: {}", LOAD_FAILED_PREFIX, e),
                }
            }
        }
    }
}
