//! `stride show` - product detail view.

use anyhow::Result;
use clap::Args;
use console::style;

use stride_commerce::prelude::*;

use crate::output::Output;

#[derive(Args)]
pub struct ShowArgs {
    /// Product id
    pub id: u32,
}

pub fn run(args: ShowArgs, catalog: &Catalog, out: &Output) -> Result<()> {
    let id = ProductId::new(args.id);

    // An unknown id is a not-found affordance, not a failure.
    let Some(product) = catalog.by_id(id) else {
        out.error(&format!("Product {} not found", id));
        out.info("Browse the catalog with `stride list` to see available products.");
        return Ok(());
    };

    if out.json() {
        println!("{}", serde_json::to_string_pretty(product)?);
        return Ok(());
    }

    out.heading(&format!("{}  {}", product.name, style(format!("#{}", product.id)).dim()));
    println!("  {} · {} · {}", product.brand, product.category, product.gender.display_name());

    let mut price_line = format!("  {}", style(product.price.display()).green().bold());
    if let (Some(original), Some(percent)) = (product.original_price, product.discount_percent()) {
        price_line.push_str(&format!(
            "  {} {}",
            style(original.display()).strikethrough().dim(),
            style(format!("save {}%", percent)).red(),
        ));
    }
    println!("{}", price_line);

    println!("  ★{:.1} from {} reviews", product.rating, product.reviews);
    if let Some(badge) = product.badge {
        println!("  [{}]", style(badge.as_str()).cyan());
    }

    println!("\n  {}", product.description);

    out.heading("Features");
    for feature in &product.features {
        println!("  - {}", feature);
    }

    out.heading("Sizes");
    println!("  {}", product.sizes.join("  "));

    out.heading("Colors");
    println!("  {}", product.colors.join("  "));

    Ok(())
}
