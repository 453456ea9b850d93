//! Catalog sources.
//!
//! A [`CatalogSource`] hands the full product list to the view layer. The
//! mock source simulates a remote call with a fixed delay; the JSON source
//! reads a catalog file and is the one that actually exercises the failure
//! channel.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::{reference_catalog, Product};
use crate::error::CatalogError;

/// Default simulated network latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Supplier of the complete product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every known product.
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError>;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        (**self).fetch_catalog().await
    }
}

/// In-memory source returning a fixed catalog after an artificial delay.
#[derive(Debug, Clone)]
pub struct MockCatalogSource {
    products: Vec<Product>,
    latency: Duration,
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalogSource {
    /// Create a source serving the reference catalog.
    pub fn new() -> Self {
        Self::with_products(reference_catalog())
    }

    /// Create a source serving the given products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Set the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        debug!(count = self.products.len(), "mock catalog fetched");
        Ok(self.products.clone())
    }
}

/// Source reading a JSON array of products from disk.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            CatalogError::FetchFailure(format!("{}: {}", self.path.display(), e))
        })?;
        let products: Vec<Product> = serde_json::from_slice(&bytes)?;
        ensure_unique_ids(&products)?;
        debug!(
            count = products.len(),
            path = %self.path.display(),
            "json catalog loaded"
        );
        Ok(products)
    }
}

/// Check that no two products share an id.
pub fn ensure_unique_ids(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id.as_str()) {
            return Err(CatalogError::InvalidCatalog(format!(
                "duplicate product id {}",
                product.id
            )));
        }
    }
    Ok(())
}
