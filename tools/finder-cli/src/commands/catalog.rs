//! Catalog overview commands.

use anyhow::Result;

use crate::context::Context;
use crate::output::format_price;

/// List the distinct categories in the catalog.
pub async fn categories(ctx: &Context) -> Result<()> {
    let view = ctx.load_view(String::new()).await;
    let categories = view.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output.list_item(category);
    }

    Ok(())
}

/// Show the whole-number price span of the catalog.
pub async fn price_range(ctx: &Context) -> Result<()> {
    let view = ctx.load_view(String::new()).await;
    let bounds = view.price_bounds();

    if ctx.output.is_json() {
        ctx.output.json(&bounds);
        return Ok(());
    }

    ctx.output.header("Price range");
    ctx.output.kv("min", &format_price(bounds.min));
    ctx.output.kv("max", &format_price(bounds.max));

    Ok(())
}
