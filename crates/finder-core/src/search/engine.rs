//! Search, filter and sort pipeline.
//!
//! [`apply`] runs the stages in a fixed order: text search, category,
//! price range, stock, then sort. Every stage is a plain predicate over one
//! product, so the pipeline is total: empty catalogs, empty terms and
//! contradictory price bounds all yield a (possibly empty) list.

use std::collections::BTreeSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::Product;
use crate::search::{FilterOptions, PriceBounds, SortOption};

/// Filter and sort `products`, returning a new list.
///
/// The term is matched case-insensitively against name, description and
/// category. It is not trimmed.
pub fn apply(products: &[Product], search_term: &str, options: &FilterOptions) -> Vec<Product> {
    let needle = search_term.to_lowercase();
    let category = options.category_filter();

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| needle.is_empty() || p.matches_lowercase(&needle))
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter(|p| options.price_in_range(p.price))
        .filter(|p| !options.in_stock || p.in_stock)
        .cloned()
        .collect();

    sort_products(&mut filtered, options.sort);
    filtered
}

/// Stable in-place sort; equal keys keep their input order.
pub fn sort_products(products: &mut [Product], sort: SortOption) {
    match sort {
        SortOption::Name => products.sort_by_cached_key(|p| NameKey::new(&p.name)),
        SortOption::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOption::Rating => {
            products.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()))
        }
        SortOption::Unsorted => {}
    }
}

/// Collation key for product names, compared field by field.
///
/// Base letters decide first, ignoring case and accents. Ties fall to
/// accents (unaccented first), then to case (lowercase first), then to the
/// raw string so the order is total.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct NameKey {
    base: String,
    accented: String,
    uppercase: Vec<bool>,
    raw: String,
}

impl NameKey {
    fn new(name: &str) -> Self {
        let decomposed: Vec<char> = name.nfd().collect();
        let letters = || decomposed.iter().copied().filter(|c| !is_combining_mark(*c));

        Self {
            base: letters().flat_map(char::to_lowercase).collect(),
            accented: decomposed.iter().copied().flat_map(char::to_lowercase).collect(),
            uppercase: letters().map(char::is_uppercase).collect(),
            raw: name.to_string(),
        }
    }
}

/// Distinct categories, sorted ascending.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Whole-number price bounds covering every product.
///
/// Returns `(0, 0)` for an empty collection.
pub fn price_bounds(products: &[Product]) -> PriceBounds {
    let mut prices = products.iter().map(|p| p.price);
    let Some(first) = prices.next() else {
        return PriceBounds::default();
    };

    let (min, max) = prices.fold((first, first), |(min, max), price| {
        (min.min(price), max.max(price))
    });

    PriceBounds {
        min: min.floor(),
        max: max.ceil(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reference_catalog;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn unrestricted() -> FilterOptions {
        FilterOptions::unrestricted()
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let catalog = reference_catalog();
        let result = apply(&catalog, "", &unrestricted());
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = reference_catalog();
        let result = apply(&catalog, "KEYBOARD", &unrestricted());
        assert_eq!(names(&result), vec!["Mechanical Gaming Keyboard"]);
    }

    #[test]
    fn test_search_matches_description_and_category() {
        let catalog = reference_catalog();
        let by_description = apply(&catalog, "programming", &unrestricted());
        assert_eq!(
            names(&by_description),
            vec!["Programming Fundamentals", "Educational Robot Kit"]
        );

        let by_category = apply(&catalog, "garden", &unrestricted());
        assert_eq!(names(&by_category), vec!["LED Desk Lamp"]);
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let catalog = reference_catalog();
        assert!(apply(&catalog, " keyboard ", &unrestricted()).is_empty());
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let catalog = reference_catalog();
        let exact = apply(&catalog, "", &unrestricted().with_category("Electronics"));
        assert_eq!(exact.len(), 3);

        let lower = apply(&catalog, "", &unrestricted().with_category("electronics"));
        assert!(lower.is_empty());
    }

    #[test]
    fn test_price_range_inclusive() {
        let catalog = reference_catalog();
        let options = unrestricted().with_price_range(Some(39.99), Some(89.99));
        let result = apply(&catalog, "", &options);
        assert_eq!(
            names(&result),
            vec!["Yoga Mat Premium", "LED Desk Lamp", "Educational Robot Kit"]
        );
    }

    #[test]
    fn test_inverted_price_range_is_empty() {
        let catalog = reference_catalog();
        let options = unrestricted().with_price_range(Some(500.0), Some(10.0));
        assert!(apply(&catalog, "", &options).is_empty());
    }

    #[test]
    fn test_in_stock_only() {
        let catalog = reference_catalog();
        let result = apply(&catalog, "", &unrestricted().with_in_stock(true));
        assert_eq!(result.len(), 6);
        assert!(result.iter().all(|p| p.in_stock));
    }

    #[test]
    fn test_sort_by_name() {
        let catalog = vec![
            Product::new("1", "banana", "Food", 1.0),
            Product::new("2", "Apple", "Food", 1.0),
            Product::new("3", "cherry", "Food", 1.0),
        ];
        let result = apply(&catalog, "", &unrestricted().with_sort(SortOption::Name));
        assert_eq!(names(&result), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_by_name_folds_accents_and_puts_lowercase_first() {
        let catalog = vec![
            Product::new("1", "Zebra Lamp", "Home", 1.0),
            Product::new("2", "Éclair Tin", "Home", 1.0),
            Product::new("3", "Apple", "Food", 1.0),
            Product::new("4", "apple", "Food", 1.0),
        ];
        let result = apply(&catalog, "", &FilterOptions::default());
        assert_eq!(names(&result), vec!["apple", "Apple", "Éclair Tin", "Zebra Lamp"]);
    }

    #[test]
    fn test_sort_by_name_puts_unaccented_first() {
        let catalog = vec![
            Product::new("1", "Résumé Pad", "Office", 1.0),
            Product::new("2", "Resume Pad", "Office", 1.0),
            Product::new("3", "Rest Stool", "Office", 1.0),
        ];
        let result = apply(&catalog, "", &unrestricted().with_sort(SortOption::Name));
        assert_eq!(names(&result), vec!["Rest Stool", "Resume Pad", "Résumé Pad"]);
    }

    #[test]
    fn test_sort_by_price_both_directions() {
        let catalog = reference_catalog();
        let asc = apply(&catalog, "", &unrestricted().with_sort(SortOption::PriceAsc));
        assert_eq!(asc.first().unwrap().price, 24.99);
        assert_eq!(asc.last().unwrap().price, 299.99);

        let desc = apply(&catalog, "", &unrestricted().with_sort(SortOption::PriceDesc));
        assert_eq!(desc.first().unwrap().price, 299.99);
        assert_eq!(desc.last().unwrap().price, 24.99);
    }

    #[test]
    fn test_sort_by_rating_treats_missing_as_zero() {
        let catalog = vec![
            Product::new("1", "Unrated", "Misc", 1.0),
            Product::new("2", "Good", "Misc", 1.0).with_rating(4.0),
            Product::new("3", "Great", "Misc", 1.0).with_rating(5.0),
        ];
        let result = apply(&catalog, "", &unrestricted().with_sort(SortOption::Rating));
        assert_eq!(names(&result), vec!["Great", "Good", "Unrated"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let catalog = vec![
            Product::new("a", "First", "Misc", 10.0),
            Product::new("b", "Second", "Misc", 5.0),
            Product::new("c", "Third", "Misc", 10.0),
            Product::new("d", "Fourth", "Misc", 5.0),
        ];
        let result = apply(&catalog, "", &unrestricted().with_sort(SortOption::PriceAsc));
        assert_eq!(names(&result), vec!["Second", "Fourth", "First", "Third"]);
    }

    #[test]
    fn test_unsorted_keeps_catalog_order() {
        let catalog = reference_catalog();
        let options = unrestricted().with_sort(SortOption::parse("bogus"));
        let result = apply(&catalog, "", &options);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let catalog = reference_catalog();
        let before = catalog.clone();
        let _ = apply(&catalog, "e", &FilterOptions::default().with_sort(SortOption::PriceDesc));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(apply(&[], "anything", &FilterOptions::default()).is_empty());
    }

    #[test]
    fn test_distinct_categories() {
        let categories = distinct_categories(&reference_catalog());
        assert_eq!(
            categories,
            vec!["Books", "Clothing", "Electronics", "Home & Garden", "Sports", "Toys"]
        );
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn test_price_bounds() {
        let bounds = price_bounds(&reference_catalog());
        assert_eq!(bounds, PriceBounds { min: 24.0, max: 300.0 });
        assert_eq!(price_bounds(&[]), PriceBounds { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_price_bounds_single_product() {
        let bounds = price_bounds(&[Product::new("1", "One", "Misc", 12.5)]);
        assert_eq!(bounds, PriceBounds { min: 12.0, max: 13.0 });
    }
}
