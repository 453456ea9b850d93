//! Filter options, partial updates and sort order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower price bound applied when nothing else is configured.
pub const DEFAULT_MIN_PRICE: f64 = 0.0;

/// Upper price bound applied when nothing else is configured.
pub const DEFAULT_MAX_PRICE: f64 = 10_000.0;

/// Sort order for the derived product list.
///
/// Parsing never fails: unrecognized strings become [`SortOption::Unsorted`],
/// which keeps catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOption {
    /// Name A-Z.
    #[default]
    Name,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    Rating,
    /// Catalog order.
    Unsorted,
}

impl SortOption {
    /// Every sort a user can pick, in menu order.
    pub const SELECTABLE: [SortOption; 4] = [
        SortOption::Name,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Rating,
    ];

    pub fn parse(s: &str) -> Self {
        match s {
            "name" | "by-name" => SortOption::Name,
            "price-asc" | "by-price-ascending" => SortOption::PriceAsc,
            "price-desc" | "by-price-descending" => SortOption::PriceDesc,
            "rating" | "by-rating" => SortOption::Rating,
            _ => SortOption::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Name => "name",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Rating => "rating",
            SortOption::Unsorted => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Name => "Name (A-Z)",
            SortOption::PriceAsc => "Price (Low to High)",
            SortOption::PriceDesc => "Price (High to Low)",
            SortOption::Rating => "Rating",
            SortOption::Unsorted => "Catalog order",
        }
    }
}

impl From<String> for SortOption {
    fn from(s: String) -> Self {
        SortOption::parse(&s)
    }
}

impl From<&str> for SortOption {
    fn from(s: &str) -> Self {
        SortOption::parse(s)
    }
}

impl From<SortOption> for String {
    fn from(sort: SortOption) -> Self {
        sort.as_str().to_string()
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter configuration applied to the catalog.
///
/// Values are never edited in place: every change produces a new value via
/// the `with_*` builders or [`FilterOptions::merge`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Exact category to keep. `None` and `Some("")` both mean any category.
    pub category: Option<String>,
    /// Inclusive lower price bound, `None` for unbounded.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound, `None` for unbounded.
    pub max_price: Option<f64>,
    /// Keep only in-stock products.
    pub in_stock: bool,
    /// Result ordering.
    pub sort: SortOption,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            category: None,
            min_price: Some(DEFAULT_MIN_PRICE),
            max_price: Some(DEFAULT_MAX_PRICE),
            in_stock: false,
            sort: SortOption::Name,
        }
    }
}

impl FilterOptions {
    /// Options that constrain nothing and keep catalog order.
    pub fn unrestricted() -> Self {
        Self {
            category: None,
            min_price: None,
            max_price: None,
            in_stock: false,
            sort: SortOption::Unsorted,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_price(mut self, min: Option<f64>) -> Self {
        self.min_price = min;
        self
    }

    pub fn with_max_price(mut self, max: Option<f64>) -> Self {
        self.max_price = max;
        self
    }

    pub fn with_price_range(self, min: Option<f64>, max: Option<f64>) -> Self {
        self.with_min_price(min).with_max_price(max)
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// The category constraint, if one is in effect.
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Check whether a price falls within the configured bounds.
    pub fn price_in_range(&self, price: f64) -> bool {
        self.min_price.map_or(true, |min| price >= min)
            && self.max_price.map_or(true, |max| price <= max)
    }

    /// Return a copy with the patch's fields applied.
    pub fn merge(&self, patch: &FilterPatch) -> Self {
        Self {
            category: patch.category.clone().unwrap_or_else(|| self.category.clone()),
            min_price: patch.min_price.unwrap_or(self.min_price),
            max_price: patch.max_price.unwrap_or(self.max_price),
            in_stock: patch.in_stock.unwrap_or(self.in_stock),
            sort: patch.sort.unwrap_or(self.sort),
        }
    }

    /// Constraints that differ from the defaults, for a filter summary.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();

        if let Some(category) = self.category_filter() {
            active.push(ActiveFilter::Category(category.to_string()));
        }

        let min_narrowed = self.min_price.map_or(false, |min| min > DEFAULT_MIN_PRICE);
        let max_narrowed = self.max_price.map_or(true, |max| max < DEFAULT_MAX_PRICE);
        if min_narrowed || max_narrowed || self.min_price.is_none() {
            active.push(ActiveFilter::PriceRange {
                min: self.min_price,
                max: self.max_price,
            });
        }

        if self.in_stock {
            active.push(ActiveFilter::InStockOnly);
        }

        active
    }
}

/// Partial update to [`FilterOptions`].
///
/// `None` leaves a field untouched. The price bounds nest an extra `Option`
/// so a patch can clear a bound with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPatch {
    pub category: Option<Option<String>>,
    pub min_price: Option<Option<f64>>,
    pub max_price: Option<Option<f64>>,
    pub in_stock: Option<bool>,
    pub sort: Option<SortOption>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = Some(category);
        self
    }

    pub fn min_price(mut self, min: Option<f64>) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn max_price(mut self, max: Option<f64>) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A constraint currently narrowing the results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveFilter {
    Category(String),
    PriceRange { min: Option<f64>, max: Option<f64> },
    InStockOnly,
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveFilter::Category(category) => write!(f, "Category: {}", category),
            ActiveFilter::PriceRange { min, max } => {
                let bound = |b: &Option<f64>| match b {
                    Some(v) => format!("${}", v),
                    None => "any".to_string(),
                };
                write!(f, "Price: {} - {}", bound(min), bound(max))
            }
            ActiveFilter::InStockOnly => write!(f, "In stock only"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_parse_aliases() {
        assert_eq!(SortOption::parse("name"), SortOption::Name);
        assert_eq!(SortOption::parse("by-name"), SortOption::Name);
        assert_eq!(SortOption::parse("price-asc"), SortOption::PriceAsc);
        assert_eq!(SortOption::parse("by-price-descending"), SortOption::PriceDesc);
        assert_eq!(SortOption::parse("rating"), SortOption::Rating);
        assert_eq!(SortOption::parse("popularity"), SortOption::Unsorted);
        assert_eq!(SortOption::parse(""), SortOption::Unsorted);
    }

    #[test]
    fn test_sort_serde_uses_strings() {
        let json = serde_json::to_string(&SortOption::PriceDesc).unwrap();
        assert_eq!(json, "\"price-desc\"");
        let sort: SortOption = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(sort, SortOption::Unsorted);
    }

    #[test]
    fn test_defaults() {
        let options = FilterOptions::default();
        assert_eq!(options.category, None);
        assert_eq!(options.min_price, Some(0.0));
        assert_eq!(options.max_price, Some(10_000.0));
        assert!(!options.in_stock);
        assert_eq!(options.sort, SortOption::Name);
        assert!(options.active_filters().is_empty());
    }

    #[test]
    fn test_empty_category_means_no_filter() {
        let options = FilterOptions::default().with_category("");
        assert_eq!(options.category_filter(), None);
        let options = options.with_category("Books");
        assert_eq!(options.category_filter(), Some("Books"));
    }

    #[test]
    fn test_price_in_range_is_inclusive() {
        let options = FilterOptions::default().with_price_range(Some(10.0), Some(20.0));
        assert!(options.price_in_range(10.0));
        assert!(options.price_in_range(20.0));
        assert!(!options.price_in_range(9.99));
        assert!(!options.price_in_range(20.01));

        let open = options.with_price_range(None, None);
        assert!(open.price_in_range(1e12));
    }

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let base = FilterOptions::default()
            .with_category("Sports")
            .with_in_stock(true);
        let merged = base.merge(&FilterPatch::new().max_price(Some(50.0)));

        assert_eq!(merged.category.as_deref(), Some("Sports"));
        assert!(merged.in_stock);
        assert_eq!(merged.min_price, Some(0.0));
        assert_eq!(merged.max_price, Some(50.0));
        // The source value is untouched.
        assert_eq!(base.max_price, Some(10_000.0));
    }

    #[test]
    fn test_merge_can_clear_fields() {
        let base = FilterOptions::default().with_category("Toys");
        let merged = base.merge(&FilterPatch::new().category(None).min_price(None));
        assert_eq!(merged.category, None);
        assert_eq!(merged.min_price, None);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let patch = FilterPatch::new();
        assert!(patch.is_empty());
        let options = FilterOptions::default().with_sort(SortOption::Rating);
        assert_eq!(options.merge(&patch), options);
    }

    #[test]
    fn test_active_filters_summary() {
        let options = FilterOptions::default()
            .with_category("Sports")
            .with_max_price(Some(100.0))
            .with_in_stock(true);
        let labels: Vec<String> = options
            .active_filters()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            labels,
            vec!["Category: Sports", "Price: $0 - $100", "In stock only"]
        );
    }

    #[test]
    fn test_cleared_price_bound_renders_as_any() {
        let label = |options: FilterOptions| -> Vec<String> {
            options
                .active_filters()
                .iter()
                .map(ToString::to_string)
                .collect()
        };

        let no_min = FilterOptions::default().with_min_price(None);
        assert_eq!(label(no_min), vec!["Price: any - $10000"]);

        let no_max = FilterOptions::default().with_min_price(Some(25.0)).with_max_price(None);
        assert_eq!(label(no_max), vec!["Price: $25 - any"]);

        assert_eq!(label(FilterOptions::unrestricted()), vec!["Price: any - any"]);
    }

    #[test]
    fn test_options_deserialize_partial() {
        let options: FilterOptions =
            serde_json::from_str(r#"{"category": "Books", "sort": "rating"}"#).unwrap();
        assert_eq!(options.category.as_deref(), Some("Books"));
        assert_eq!(options.sort, SortOption::Rating);
        assert_eq!(options.max_price, Some(10_000.0));
    }
}
