//! View module.
//!
//! Browsing state, its synchronization rule and the read-only snapshot
//! handed to presentation.

mod controller;

pub use controller::ViewController;

use serde::Serialize;

use crate::catalog::Product;
use crate::search::{ActiveFilter, FilterOptions, ResultSummary};

/// Read-only copy of the view state.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub catalog: Vec<Product>,
    pub derived: Vec<Product>,
    pub search_term: String,
    pub options: FilterOptions,
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
    pub summary: ResultSummary,
    pub active_filters: Vec<ActiveFilter>,
}
