//! View state controller.

use tracing::{debug, error, info};

use crate::catalog::{CatalogSource, Product};
use crate::error::CatalogError;
use crate::search::{self, FilterOptions, FilterPatch, PriceBounds, ResultSummary};
use crate::view::ViewSnapshot;

/// Holds browsing state and keeps the derived list in sync with it.
///
/// After every operation `derived()` equals
/// `search::apply(catalog(), search_term(), options())`. The list is rebuilt
/// from scratch on each change; all mutation goes through `&mut self`.
pub struct ViewController<S> {
    source: S,
    catalog: Vec<Product>,
    search_term: String,
    options: FilterOptions,
    derived: Vec<Product>,
    is_loading: bool,
    load_error: Option<CatalogError>,
}

impl<S: CatalogSource> ViewController<S> {
    /// Create a controller in the loading state with default options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, String::new(), FilterOptions::default())
    }

    /// Create a controller with an initial search term and options.
    pub fn with_options(source: S, search_term: impl Into<String>, options: FilterOptions) -> Self {
        let mut controller = Self {
            source,
            catalog: Vec::new(),
            search_term: search_term.into(),
            options,
            derived: Vec::new(),
            is_loading: true,
            load_error: None,
        };
        controller.recompute();
        controller
    }

    /// Create a controller and load its catalog.
    ///
    /// A failed load is logged and recorded in `load_error()`; the
    /// controller is returned either way.
    pub async fn start(source: S) -> Self {
        let mut controller = Self::new(source);
        if let Err(e) = controller.load().await {
            debug!(error = %e, "starting with an empty catalog");
        }
        controller
    }

    /// Fetch the catalog from the source.
    ///
    /// On success the catalog is replaced and the product count returned.
    /// On failure the catalog is left empty and the error is both stored
    /// and returned. Loading always ends.
    pub async fn load(&mut self) -> Result<usize, CatalogError> {
        self.is_loading = true;
        let result = self.source.fetch_catalog().await;
        self.is_loading = false;

        match result {
            Ok(products) => {
                let count = products.len();
                info!(count, "catalog loaded");
                self.catalog = products;
                self.load_error = None;
                self.recompute();
                Ok(count)
            }
            Err(e) => {
                error!(error = %e, "failed to load products");
                self.catalog.clear();
                self.load_error = Some(e.clone());
                self.recompute();
                Err(e)
            }
        }
    }

    /// Replace the search term verbatim.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute();
    }

    /// Merge a partial update into the current options.
    pub fn update_options(&mut self, patch: FilterPatch) {
        self.options = self.options.merge(&patch);
        self.recompute();
    }

    /// Replace the options wholesale.
    pub fn replace_options(&mut self, options: FilterOptions) {
        self.options = options;
        self.recompute();
    }

    /// Clear the search term and restore default options.
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.options = FilterOptions::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.derived = search::apply(&self.catalog, &self.search_term, &self.options);
        debug!(
            shown = self.derived.len(),
            total = self.catalog.len(),
            term = %self.search_term,
            "derived list recomputed"
        );
    }
}

impl<S> ViewController<S> {
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn derived(&self) -> &[Product] {
        &self.derived
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The error from the most recent failed load, if any.
    pub fn load_error(&self) -> Option<&CatalogError> {
        self.load_error.as_ref()
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(self.derived.len(), self.catalog.len())
    }

    /// Categories present in the catalog.
    pub fn categories(&self) -> Vec<String> {
        search::distinct_categories(&self.catalog)
    }

    /// Price span of the catalog.
    pub fn price_bounds(&self) -> PriceBounds {
        search::price_bounds(&self.catalog)
    }

    /// Owned copy of the current state for presentation.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            catalog: self.catalog.clone(),
            derived: self.derived.clone(),
            search_term: self.search_term.clone(),
            options: self.options.clone(),
            is_loading: self.is_loading,
            load_error: self.load_error.as_ref().map(ToString::to_string),
            summary: self.summary(),
            active_filters: self.options.active_filters(),
        }
    }
}
