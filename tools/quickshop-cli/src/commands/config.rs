//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES, DEFAULT_STORE_NAME};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { name, force } => init_config(name, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv("destination", &config.store.destination);
    ctx.output.kv("currency", &config.store.currency);

    ctx.output.info("[catalog]");
    ctx.output.kv("source", &config.catalog.source);
    ctx.output.kv("resolved", &ctx.catalog_resource()?.to_string());
    ctx.output.kv("timeout_secs", &config.catalog.timeout_secs.to_string());

    ctx.output.info("[search]");
    ctx.output.kv("debounce_ms", &config.search.debounce_ms.to_string());

    ctx.output.info("[checkout]");
    ctx.output.kv("base_url", &config.checkout.base_url);
    ctx.output.kv("greeting", &config.checkout.greeting);
    ctx.output.kv("total_label", &config.checkout.total_label);
    ctx.output.kv("closing", &config.checkout.closing);

    ctx.output.info("[display]");
    ctx.output.kv("fallback_image", &config.display.fallback_image);
    ctx.output.kv("excerpt_chars", &config.display.excerpt_chars.to_string());

    Ok(())
}

fn init_config(name: Option<String>, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let name = name.unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());
    fs::write(&config_path, generate_default_config(&name))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}
