//! Product catalog browsing for Product Finder.
//!
//! This crate provides the logic behind the product finder UI:
//!
//! - **Catalog**: the product record and the sources that fetch it
//! - **Search**: filter options and the search/filter/sort pipeline
//! - **View**: browsing state that re-derives its result list on every change
//! - **Config**: file-based configuration for sources and initial filters
//!
//! # Example
//!
//! ```rust,ignore
//! use finder_core::prelude::*;
//!
//! let mut view = ViewController::start(MockCatalogSource::new()).await;
//!
//! view.set_search_term("keyboard");
//! view.update_options(FilterPatch::new().in_stock(true).sort(SortOption::PriceAsc));
//!
//! for product in view.derived() {
//!     println!("{} - ${:.2}", product.name, product.price);
//! }
//! println!("{}", view.summary());
//! ```

pub mod config;
pub mod error;
pub mod ids;

pub mod catalog;
pub mod search;
pub mod view;

pub use error::{CatalogError, ConfigError};
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::FinderConfig;
    pub use crate::error::{CatalogError, ConfigError};
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{CatalogSource, JsonCatalogSource, MockCatalogSource, Product};

    // Search
    pub use crate::search::{
        ActiveFilter, FilterOptions, FilterPatch, PriceBounds, ResultSummary, SortOption,
    };

    // View
    pub use crate::view::{ViewController, ViewSnapshot};
}
