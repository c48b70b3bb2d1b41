//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _, Result};
use quickshop_commerce::catalog::CatalogLoader;
use quickshop_commerce::checkout::{CheckoutComposer, HandoffLink};
use quickshop_commerce::session::StoreSession;
use quickshop_commerce::Currency;
use quickshop_data::{FetchClient, Resource};

use crate::config::{QuickshopConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: QuickshopConfig,
    /// The file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let found = match config_path {
            Some(path) => {
                let path = resolve(&cwd, Path::new(path));
                Some((QuickshopConfig::load(&path)?, path))
            }
            None => find_config(&cwd)?,
        };

        let (config, config_path) = match found {
            Some((config, path)) => (config, Some(path)),
            None => (QuickshopConfig::default(), None),
        };
        config.validate()?;

        if let Some(path) = &config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory relative catalog paths resolve against.
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// The configured currency.
    pub fn currency(&self) -> Result<Currency> {
        self.config
            .store
            .currency()
            .ok_or_else(|| anyhow!("Unknown currency code: {}", self.config.store.currency))
    }

    /// The catalog resource, with relative paths resolved.
    pub fn catalog_resource(&self) -> Result<Resource> {
        let resource = Resource::parse(&self.config.catalog.source)
            .with_context(|| format!("Invalid catalog source: {}", self.config.catalog.source))?;
        Ok(resource.resolve_against(&self.base_dir()))
    }

    /// A loader for the configured catalog.
    pub fn loader(&self) -> Result<CatalogLoader> {
        let client = FetchClient::builder()
            .timeout(self.config.catalog.timeout())
            .build()?;
        Ok(CatalogLoader::new(client, self.catalog_resource()?).with_currency(self.currency()?))
    }

    /// The checkout composer for the configured store.
    pub fn composer(&self) -> CheckoutComposer {
        let link = HandoffLink::new(&self.config.store.destination)
            .with_base_url(&self.config.checkout.base_url);
        CheckoutComposer::new(&self.config.store.name, link)
            .with_template(self.config.message_template())
    }

    /// Start a session and load the catalog behind a spinner.
    pub async fn open_session(&self) -> Result<StoreSession> {
        let loader = self.loader()?;
        let mut session =
            StoreSession::new(self.composer(), self.currency()?, self.config.search.delay());

        let spinner = self.output.spinner(&format!("Loading products from {}", loader.resource()));
        session.load(&loader).await;
        spinner.finish_and_clear();

        Ok(session)
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Result<Option<(QuickshopConfig, PathBuf)>> {
    for dir in start.ancestors() {
        for name in &CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.is_file() {
                return Ok(Some((QuickshopConfig::load(&path)?, path)));
            }
        }
    }
    Ok(None)
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
