//! Built-in demo catalog.

use crate::catalog::Product;

/// The eight-product catalog served by the mock source.
pub fn reference_catalog() -> Vec<Product> {
    vec![
        Product::new("1", "Wireless Bluetooth Headphones", "Electronics", 149.99)
            .with_description("High-quality noise-canceling headphones with 30-hour battery life")
            .with_original_price(199.99)
            .with_rating(4.5)
            .with_discount(25.0),
        Product::new("2", "Smart Fitness Watch", "Electronics", 299.99)
            .with_description("Track your workouts, heart rate, and sleep patterns")
            .with_rating(4.8),
        Product::new("3", "Yoga Mat Premium", "Sports", 39.99)
            .with_description("Non-slip eco-friendly yoga mat with carrying strap")
            .with_original_price(59.99)
            .with_in_stock(false)
            .with_rating(4.3)
            .with_discount(33.0),
        Product::new("4", "Organic Cotton T-Shirt", "Clothing", 24.99)
            .with_description("Comfortable and sustainable everyday wear")
            .with_rating(4.6),
        Product::new("5", "LED Desk Lamp", "Home & Garden", 45.99)
            .with_description("Adjustable brightness with USB charging port")
            .with_rating(4.4),
        Product::new("6", "Programming Fundamentals", "Books", 34.99)
            .with_description("Comprehensive guide to modern software development")
            .with_rating(4.7),
        Product::new("7", "Mechanical Gaming Keyboard", "Electronics", 129.99)
            .with_description("RGB backlit with customizable macros")
            .with_original_price(179.99)
            .with_rating(4.9)
            .with_discount(28.0),
        Product::new("8", "Educational Robot Kit", "Toys", 89.99)
            .with_description("Learn programming through hands-on robotics")
            .with_in_stock(false)
            .with_rating(4.2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ensure_unique_ids;

    #[test]
    fn test_reference_catalog_shape() {
        let catalog = reference_catalog();
        assert_eq!(catalog.len(), 8);
        assert!(ensure_unique_ids(&catalog).is_ok());
        assert_eq!(catalog.iter().filter(|p| !p.in_stock).count(), 2);
        assert_eq!(catalog.iter().filter(|p| p.is_discounted()).count(), 3);
    }
}
