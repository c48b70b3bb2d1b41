//! CLI command implementations.

pub mod categories;
pub mod checkout;
pub mod config;
pub mod products;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show this category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only show products whose name or description contains this text.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Item to order, as ID or ID:QTY. Repeatable.
    #[arg(short, long = "item", value_name = "ID[:QTY]", required = true)]
    pub items: Vec<String>,

    /// Open the checkout link in the browser.
    #[arg(long)]
    pub open: bool,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Store name to write.
        #[arg(short, long)]
        name: Option<String>,
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
