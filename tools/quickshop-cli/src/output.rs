//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use quickshop_commerce::cart::{Cart, CartPricing};
use quickshop_commerce::catalog::{CategoryFilter, Product};

use crate::config::DisplayConfig;

/// Shown when the filtered product list is empty.
pub const EMPTY_RESULTS: &str = "No products found. Try adjusting your search or filters.";

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

    /// Print preformatted lines.
    pub fn block(&self, text: &str) {
        if self.json {
            return;
        }
        println!("{}", text);
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Store header with the cart badge.
pub fn store_header(store_name: &str, item_count: i64) -> String {
    format!("{}  {}", style(store_name).bold(), cart_badge(item_count))
}

/// Cart icon with the item count; the count is hidden at zero.
pub fn cart_badge(item_count: i64) -> String {
    if item_count > 0 {
        format!("🛒 {}", style(item_count).white().on_red().bold())
    } else {
        "🛒".to_string()
    }
}

/// Footer line with the copyright year.
pub fn footer(store_name: &str, year: i32) -> String {
    format!("(c) {} {}. All rights reserved.", year, store_name)
}

/// The category toolbar, with the selection highlighted.
pub fn category_bar(categories: &[CategoryFilter], selected: &CategoryFilter) -> String {
    categories
        .iter()
        .map(|c| {
            if c == selected {
                style(format!("[{}]", c)).cyan().bold().to_string()
            } else {
                format!(" {} ", c)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One product card.
pub fn product_card(product: &Product, display: &DisplayConfig) -> String {
    let mut card = format!(
        "{} {}  {}  {}",
        style(format!("#{}", product.id)).dim(),
        style(&product.name).bold(),
        style(format!("({})", product.category)).cyan(),
        style(product.price.display()).green(),
    );
    let excerpt = product.excerpt(display.excerpt_chars);
    if !excerpt.is_empty() {
        card.push_str(&format!("\n    {}", excerpt));
    }
    card.push_str(&format!(
        "\n    {}",
        style(product.image_or(&display.fallback_image)).dim()
    ));
    card
}

/// The product grid, or the empty-results note.
pub fn product_grid(products: &[&Product], display: &DisplayConfig) -> String {
    if products.is_empty() {
        return EMPTY_RESULTS.to_string();
    }
    products
        .iter()
        .map(|p| product_card(p, display))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Cart lines with quantities and the total.
pub fn cart_table(cart: &Cart, pricing: &CartPricing) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }
    let mut lines: Vec<String> = pricing
        .line_items
        .iter()
        .map(|line| {
            format!(
                "  {} {} x{}  {}",
                style(format!("#{}", line.product_id)).dim(),
                line.name,
                line.quantity,
                line.total.display()
            )
        })
        .collect();
    lines.push(format!(
        "  {} {}",
        style("Total:").bold(),
        style(pricing.grand_total.display()).green().bold()
    ));
    lines.join("\n")
}
