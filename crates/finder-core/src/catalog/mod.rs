//! Product catalog module.
//!
//! Contains the product record and the sources that supply it.

mod product;
mod reference;
mod source;

pub use product::Product;
pub use reference::reference_catalog;
pub use source::{
    ensure_unique_ids, CatalogSource, JsonCatalogSource, MockCatalogSource, DEFAULT_LATENCY,
};
