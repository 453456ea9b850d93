//! Output formatting for the CLI.

use console::style;
use finder_core::catalog::Product;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a product card.
    pub fn card(&self, product: &Product) {
        if self.json {
            return;
        }
        println!("{}", render_card(product));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Format a price with two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Render a product as a multi-line card.
pub fn render_card(product: &Product) -> String {
    let mut price_line = style(format_price(product.price)).bold().to_string();
    if let Some(original) = product.original_price.filter(|_| product.is_discounted()) {
        price_line.push_str(&format!(" {}", style(format_price(original)).dim()));
    }
    if let Some(discount) = product.discount {
        price_line.push_str(&format!(" {}", style(format!("-{}%", discount)).red()));
    }
    if let Some(saved) = product.savings() {
        price_line.push_str(&format!(
            " {}",
            style(format!("(save {})", format_price(saved))).green()
        ));
    }

    let mut meta = vec![product.category.clone()];
    if let Some(rating) = product.rating {
        meta.push(format!("★ {:.1}", rating));
    }
    meta.push(stock_badge(product.in_stock));

    let mut card = format!(
        "{}  {}\n  {}",
        style(&product.name).bold(),
        price_line,
        meta.join(" · ")
    );
    if !product.description.is_empty() {
        card.push_str(&format!("\n  {}", style(&product.description).dim()));
    }
    card
}

fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("In stock").green().to_string()
    } else {
        style("Out of stock").red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).into_owned()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(129.99), "$129.99");
        assert_eq!(format_price(5.0), "$5.00");
    }

    #[test]
    fn test_card_for_discounted_product() {
        let product = Product::new("7", "Mechanical Gaming Keyboard", "Electronics", 129.99)
            .with_description("RGB backlit with customizable macros")
            .with_original_price(179.99)
            .with_rating(4.9)
            .with_discount(28.0);

        let card = plain(&render_card(&product));
        assert!(card.contains("Mechanical Gaming Keyboard  $129.99 $179.99 -28% (save $50.00)"));
        assert!(card.contains("Electronics · ★ 4.9 · In stock"));
        assert!(card.ends_with("RGB backlit with customizable macros"));
    }

    #[test]
    fn test_card_for_plain_product() {
        let product = Product::new("8", "Educational Robot Kit", "Toys", 89.99).with_in_stock(false);
        let card = plain(&render_card(&product));
        assert_eq!(card, "Educational Robot Kit  $89.99\n  Toys · Out of stock");
    }
}
