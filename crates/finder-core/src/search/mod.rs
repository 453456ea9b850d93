//! Search module.
//!
//! Contains the filter options and the search/filter/sort pipeline.

mod engine;
mod options;
mod results;

pub use engine::{apply, distinct_categories, price_bounds, sort_products};
pub use options::{
    ActiveFilter, FilterOptions, FilterPatch, SortOption, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE,
};
pub use results::{PriceBounds, ResultSummary};
