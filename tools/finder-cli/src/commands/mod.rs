//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod search;

use clap::{Args, Subcommand};

/// Arguments for the search command.
#[derive(Args, Default)]
pub struct SearchArgs {
    /// Free-text search term (matched against name, description and category).
    pub term: Option<String>,

    /// Only show products in this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum price (inclusive).
    #[arg(long, conflicts_with = "no_min_price")]
    pub min_price: Option<f64>,

    /// Maximum price (inclusive).
    #[arg(long, conflicts_with = "no_max_price")]
    pub max_price: Option<f64>,

    /// Remove the lower price bound.
    #[arg(long)]
    pub no_min_price: bool,

    /// Remove the upper price bound.
    #[arg(long)]
    pub no_max_price: bool,

    /// Only show products that are in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order: name, price-asc, price-desc or rating.
    #[arg(short, long)]
    pub sort: Option<String>,
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
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
