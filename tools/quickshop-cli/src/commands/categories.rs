//! Print the category toolbar.

use anyhow::{bail, Result};

use crate::context::Context;
use crate::output::category_bar;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let session = ctx.open_session().await?;
    if let Some(message) = session.catalog().error() {
        bail!("{}", message);
    }

    let categories = session.categories();
    if ctx.output.is_json() {
        let labels: Vec<&str> = categories.iter().map(|c| c.label()).collect();
        ctx.output.json(&labels);
        return Ok(());
    }

    ctx.output.header("Categories");
    ctx.output
        .block(&category_bar(&categories, session.selected_category()));
    ctx.output.block("");
    for category in &categories {
        let count = session
            .catalog()
            .products()
            .iter()
            .filter(|p| category.admits(&p.category))
            .count();
        ctx.output.list_item(&format!("{} ({})", category, count));
    }
    Ok(())
}
