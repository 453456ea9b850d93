//! Search command.

use anyhow::Result;
use finder_core::search::{FilterPatch, SortOption};
use finder_core::view::ViewSnapshot;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let term = args
        .term
        .clone()
        .unwrap_or_else(|| ctx.config.defaults.search.clone());

    if let Some(ref sort) = args.sort {
        if !SortOption::SELECTABLE.contains(&SortOption::parse(sort)) {
            ctx.output.warn(&format!(
                "Unknown sort \"{}\", keeping catalog order (expected one of: {})",
                sort,
                sort_choices()
            ));
        }
    }

    let mut view = ctx.load_view(term).await;

    let patch = patch_from_args(&args);
    if !patch.is_empty() {
        view.update_options(patch);
    }

    let snapshot = view.snapshot();
    if ctx.output.is_json() {
        ctx.output.json(&snapshot);
        return Ok(());
    }

    render(&snapshot, ctx);
    Ok(())
}

/// Translate command line flags into an options update.
fn patch_from_args(args: &SearchArgs) -> FilterPatch {
    let mut patch = FilterPatch::new();

    if let Some(ref category) = args.category {
        patch = patch.category(Some(category.clone()));
    }

    if args.no_min_price {
        patch = patch.min_price(None);
    } else if let Some(min) = args.min_price {
        patch = patch.min_price(Some(min));
    }

    if args.no_max_price {
        patch = patch.max_price(None);
    } else if let Some(max) = args.max_price {
        patch = patch.max_price(Some(max));
    }

    if args.in_stock {
        patch = patch.in_stock(true);
    }

    if let Some(ref sort) = args.sort {
        patch = patch.sort(SortOption::parse(sort));
    }

    patch
}

/// Sort names accepted by `--sort`, comma separated.
fn sort_choices() -> String {
    SortOption::SELECTABLE
        .iter()
        .map(SortOption::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render(snapshot: &ViewSnapshot, ctx: &Context) {
    let out = &ctx.output;

    if !snapshot.search_term.is_empty() {
        out.header(&format!("Results for \"{}\"", snapshot.search_term));
    } else {
        out.header("Products");
    }

    out.kv("Sort", snapshot.options.sort.display_name());
    for filter in &snapshot.active_filters {
        out.list_item(&filter.to_string());
    }
    out.info(&snapshot.summary.to_string());

    if snapshot.derived.is_empty() {
        out.warn("No products found matching your criteria");
        return;
    }

    for product in &snapshot.derived {
        println!();
        out.card(product);
    }
}
