//! Interactive storefront session on stdin.

use std::ops::ControlFlow;

use anyhow::Result;
use quickshop_commerce::catalog::CategoryFilter;
use quickshop_commerce::checkout::LinkOpener;
use quickshop_commerce::session::StoreSession;
use quickshop_commerce::ProductId;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::products::current_year;
use crate::context::Context;
use crate::opener::BrowserOpener;
use crate::output::{cart_badge, cart_table, category_bar, footer, product_grid, store_header};

const HELP: &str = "\
Commands:
  list                 show products
  search <text>        filter by name or description (empty clears)
  category <name>      filter by category (\"All\" clears)
  add <id>             add one to the cart
  inc <id> / dec <id>  change a cart line by one
  qty <id> <n>         set a cart line's quantity (0 removes)
  remove <id>          remove a cart line
  cart                 show the cart
  checkout             send the order
  help                 show this help
  quit                 leave";

/// A line typed at the shop prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopCommand {
    List,
    Search(String),
    Category(String),
    Add(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Quantity(ProductId, i64),
    Remove(ProductId),
    Cart,
    Checkout,
    Help,
    Quit,
}

impl ShopCommand {
    /// Parse a prompt line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let id = || {
            if rest.is_empty() {
                Err(format!("Usage: {} <id>", word))
            } else {
                Ok(ProductId::new(rest))
            }
        };

        let command = match word.to_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "search" => Self::Search(rest.to_string()),
            "category" | "cat" => Self::Category(rest.to_string()),
            "add" => Self::Add(id()?),
            "inc" => Self::Increment(id()?),
            "dec" => Self::Decrement(id()?),
            "remove" | "rm" => Self::Remove(id()?),
            "qty" => {
                let usage = || "Usage: qty <id> <n>".to_string();
                let (id, n) = rest.rsplit_once(char::is_whitespace).ok_or_else(usage)?;
                let n = n.parse::<i64>().map_err(|_| usage())?;
                Self::Quantity(ProductId::new(id.trim()), n)
            }
            "cart" => Self::Cart,
            "checkout" => Self::Checkout,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("Unknown command: {} (try `help`)", other)),
        };
        Ok(Some(command))
    }
}

/// Run the shop command.
pub async fn run(ctx: &Context) -> Result<()> {
    let mut session = ctx.open_session().await?;
    if let Some(message) = session.catalog().error() {
        ctx.output.error(message);
    }

    render_storefront(ctx, &session);
    ctx.output.block(HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut search_live = true;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match ShopCommand::parse(&line) {
                    Ok(Some(command)) => {
                        if execute(ctx, &mut session, command, &BrowserOpener).is_break() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(message) => ctx.output.warn(&message),
                }
            }
            settled = session.search_settled(), if search_live => {
                if settled {
                    tracing::debug!(search = %session.applied_search(), "search applied");
                    render_storefront(ctx, &session);
                } else {
                    search_live = false;
                }
            }
        }
    }

    ctx.output.block(&footer(session.store_name(), current_year()));
    Ok(())
}

/// Apply one command to the session.
pub fn execute(
    ctx: &Context,
    session: &mut StoreSession,
    command: ShopCommand,
    opener: &dyn LinkOpener,
) -> ControlFlow<()> {
    match command {
        ShopCommand::List => render_storefront(ctx, session),
        ShopCommand::Search(text) => session.type_search(text),
        ShopCommand::Category(name) => {
            let category = CategoryFilter::from_label(&name);
            if !session.categories().contains(&category) {
                ctx.output.warn(&format!("No such category: {}", name));
            } else {
                session.select_category(category);
                render_storefront(ctx, session);
            }
        }
        ShopCommand::Add(id) => match session.add_to_cart(&id) {
            Ok(()) => cart_changed(ctx, session),
            Err(e) => ctx.output.warn(&e.to_string()),
        },
        ShopCommand::Increment(id) => line_changed(ctx, session, &id, |s| s.increment(&id)),
        ShopCommand::Decrement(id) => line_changed(ctx, session, &id, |s| s.decrement(&id)),
        ShopCommand::Quantity(id, n) => line_changed(ctx, session, &id, |s| s.set_quantity(&id, n)),
        ShopCommand::Remove(id) => line_changed(ctx, session, &id, |s| s.remove_from_cart(&id)),
        ShopCommand::Cart => show_cart(ctx, session),
        ShopCommand::Checkout => match session.checkout(opener) {
            Ok(Some(checkout)) => {
                ctx.output.block(&checkout.summary.message);
                ctx.output.success(&format!("Checkout link: {}", checkout.url));
            }
            Ok(None) => ctx.output.warn("Your cart is empty"),
            Err(e) => ctx.output.error(&e.to_string()),
        },
        ShopCommand::Help => ctx.output.block(HELP),
        ShopCommand::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

fn line_changed(
    ctx: &Context,
    session: &mut StoreSession,
    id: &ProductId,
    change: impl FnOnce(&mut StoreSession) -> bool,
) {
    if change(session) {
        cart_changed(ctx, session);
    } else {
        ctx.output.warn(&format!("Not in cart: {}", id));
    }
}

fn cart_changed(ctx: &Context, session: &StoreSession) {
    ctx.output.block(&cart_badge(session.item_count()));
}

fn show_cart(ctx: &Context, session: &StoreSession) {
    match session.cart().calculate_pricing() {
        Ok(pricing) => ctx.output.block(&cart_table(session.cart(), &pricing)),
        Err(e) => ctx.output.error(&e.to_string()),
    }
}

fn render_storefront(ctx: &Context, session: &StoreSession) {
    ctx.output
        .block(&store_header(session.store_name(), session.item_count()));
    if let Some(message) = session.catalog().error() {
        ctx.output.error(message);
        return;
    }
    ctx.output
        .block(&category_bar(&session.categories(), session.selected_category()));
    if !session.applied_search().is_empty() {
        ctx.output
            .kv("search", &session.applied_search());
    }
    ctx.output.block("");
    ctx.output
        .block(&product_grid(&session.visible_products(), &ctx.config.display));
}
