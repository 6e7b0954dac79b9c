//! Output formatting for the CLI.

use console::style;
use stride_commerce::prelude::*;

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

    /// Whether machine-readable JSON output was requested.
    pub fn json(&self) -> bool {
        self.json
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
        eprintln!("{} {}", style("✗").red(), msg);
    }

    /// Print a verbose-only message.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            println!("{} {}", style("·").dim(), msg);
        }
    }

    /// Print a section heading.
    pub fn heading(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold());
    }

    /// Print a one-line product summary.
    pub fn product_line(&self, product: &Product, favorite: bool) {
        if self.json {
            return;
        }

        let mut line = format!(
            "  {:>4}  {:<24} {:<12} {:>8}",
            style(format!("#{}", product.id)).dim(),
            product.name,
            style(&product.brand).dim(),
            style(product.price.display()).green(),
        );

        if let Some(original) = product.original_price {
            if let Some(percent) = product.discount_percent() {
                line.push_str(&format!(
                    "  {} {}",
                    style(original.display()).strikethrough().dim(),
                    style(format!("-{}%", percent)).red(),
                ));
            }
        }

        line.push_str(&format!("  ★{:.1} ({})", product.rating, product.reviews));

        if let Some(badge) = product.badge {
            line.push_str(&format!("  [{}]", style(badge.as_str()).cyan()));
        }
        if product.is_new {
            line.push_str(&format!("  {}", style("new arrival").blue()));
        }
        if favorite {
            line.push_str(&format!("  {}", style("♥").red()));
        }

        println!("{}", line);
    }

    /// Print the empty-state affordance for a result list.
    pub fn empty_state(&self, context: &str) {
        if self.json {
            println!("[]");
            return;
        }
        println!("  {}", style(format!("No products {}.", context)).dim());
        println!(
            "  {}",
            style("Try adjusting your search terms or clearing some filters.").dim()
        );
    }
}
