//! Result summaries shown alongside the derived list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Price span of a product collection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceBounds {
    /// Floor of the cheapest price.
    pub min: f64,
    /// Ceiling of the most expensive price.
    pub max: f64,
}

/// How many products survived filtering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultSummary {
    /// Products in the derived list.
    pub shown: usize,
    /// Products in the catalog.
    pub total: usize,
}

impl ResultSummary {
    pub fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }

    /// Check if filtering removed every product.
    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} products", self.shown, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = ResultSummary::new(3, 8);
        assert_eq!(summary.to_string(), "Showing 3 of 8 products");
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_summary_empty() {
        let summary = ResultSummary::new(0, 8);
        assert!(summary.is_empty());
        assert!(!ResultSummary::new(8, 8).is_empty());
    }
}
