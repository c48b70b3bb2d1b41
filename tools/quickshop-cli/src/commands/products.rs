//! List catalog products.

use anyhow::{bail, Result};
use quickshop_commerce::catalog::CategoryFilter;
use quickshop_commerce::search::SearchQuery;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{category_bar, footer, product_grid, store_header};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let session = ctx.open_session().await?;
    if let Some(message) = session.catalog().error() {
        bail!("{}", message);
    }

    let category = args
        .category
        .as_deref()
        .map(CategoryFilter::from_label)
        .unwrap_or_default();
    let query = SearchQuery::new()
        .with_category(category.clone())
        .with_text(args.search.unwrap_or_default());
    let products = query.apply(session.catalog().products());

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output
        .block(&store_header(&ctx.config.store.name, session.item_count()));
    ctx.output
        .block(&category_bar(&session.categories(), &category));
    ctx.output.block("");
    ctx.output.block(&product_grid(&products, &ctx.config.display));
    ctx.output.block("");
    ctx.output
        .block(&footer(&ctx.config.store.name, current_year()));
    Ok(())
}

/// The year shown in the footer.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
