//! Compose an order from the command line and hand it off.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use quickshop_commerce::ProductId;

use super::CheckoutArgs;
use crate::context::Context;
use crate::opener::BrowserOpener;
use crate::output::cart_table;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let items = args
        .items
        .iter()
        .map(|item| parse_item(item))
        .collect::<Result<Vec<_>>>()?;

    let mut session = ctx.open_session().await?;
    if let Some(message) = session.catalog().error() {
        bail!("{}", message);
    }

    for (id, quantity) in &items {
        session.add_to_cart(id)?;
        if let Some(quantity) = quantity {
            session.set_quantity(id, *quantity);
        }
    }

    if session.cart().is_empty() {
        ctx.output.warn("Your cart is empty; nothing to check out");
        return Ok(());
    }

    let checkout = ctx.composer().compose(session.cart())?;

    if ctx.output.is_json() {
        ctx.output.json(&checkout);
    } else {
        ctx.output.header("Order");
        ctx.output
            .block(&cart_table(session.cart(), &session.cart().calculate_pricing()?));
        ctx.output.header("Message");
        ctx.output.block(&checkout.summary.message);
        ctx.output.header("Link");
        ctx.output.block(&checkout.url);
    }

    if !args.open {
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Send this order to {}?", ctx.config.store.name))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    checkout.hand_off(&BrowserOpener);
    ctx.output.success("Opened checkout link");
    Ok(())
}

/// Parse `ID` or `ID:QTY`. A suffix that is not an integer is part of
/// the id, so ids like `sku:abc` pass through whole.
fn parse_item(item: &str) -> Result<(ProductId, Option<i64>)> {
    let (id, quantity) = match item.rsplit_once(':') {
        Some((id, suffix)) => match suffix.trim().parse::<i64>() {
            Ok(quantity) => (id, Some(quantity)),
            Err(_) => (item, None),
        },
        None => (item, None),
    };

    let id = id.trim();
    if id.is_empty() {
        bail!("Missing product id in item: {}", item);
    }
    Ok((ProductId::new(id), quantity))
}
