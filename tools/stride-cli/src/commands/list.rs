//! `stride list` - browse a store page.

use anyhow::{bail, Result};
use clap::Args;

use stride_commerce::prelude::*;

use crate::output::Output;

#[derive(Args)]
pub struct ListArgs {
    /// Page to browse: all, men, women, kids, sports, new, sale
    #[arg(default_value = "all")]
    pub page: String,

    /// Free-text search within the page
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show these categories (repeatable)
    #[arg(short, long)]
    pub category: Vec<String>,

    /// Only show these brands (repeatable)
    #[arg(short, long)]
    pub brand: Vec<String>,

    /// Only show products offering one of these sizes (repeatable)
    #[arg(long)]
    pub size: Vec<String>,

    /// Minimum price in dollars (inclusive)
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price in dollars (inclusive)
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Sort key: featured, price-low, price-high, rating, newest,
    /// discount-high, discount-low
    #[arg(long)]
    pub sort: Option<String>,

    /// Also print the filter options this page offers
    #[arg(long)]
    pub options: bool,
}

pub fn run(args: ListArgs, catalog: &Catalog, out: &Output) -> Result<()> {
    let Some(page) = StorePage::from_str(&args.page) else {
        let pages: Vec<&str> = StorePage::all_pages().iter().map(|p| p.as_str()).collect();
        bail!("unknown page '{}'; expected one of: {}", args.page, pages.join(", "));
    };

    let mut params = page.default_params();
    if let Some(search) = args.search {
        params = params.with_search(search);
    }
    for category in args.category {
        params = params.with_category(category);
    }
    for brand in args.brand {
        params = params.with_brand(brand);
    }
    for size in args.size {
        params = params.with_size(size);
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let min = args.min_price.map(Money::from_decimal).unwrap_or(params.price_min);
        let max = args.max_price.map(Money::from_decimal).unwrap_or(params.price_max);
        params = params.with_price_range(min, max);
    }
    if let Some(sort) = args.sort.as_deref() {
        let Some(sort) = SortKey::from_str(sort) else {
            bail!(
                "unknown sort key '{}'; expected one of: featured, price-low, price-high, \
                 rating, newest, discount-high, discount-low",
                sort
            );
        };
        params = params.with_sort(sort);
    }

    render_results(page, catalog, &params, out)?;

    if args.options {
        render_options(page, catalog, out);
    }

    Ok(())
}

pub fn render_results(
    page: StorePage,
    catalog: &Catalog,
    params: &QueryParameters,
    out: &Output,
) -> Result<()> {
    let results = page.browse(catalog, params);

    out.debug(&format!(
        "page={} sort={} matched={}",
        page.as_str(),
        params.sort.as_str(),
        results.len()
    ));

    if out.json() {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    out.heading(&format!("{} ({})", page.title(), results.len()));

    if results.is_empty() {
        out.empty_state(if params.search.trim().is_empty() {
            "found with the selected filters"
        } else {
            "match your search"
        });
        return Ok(());
    }

    for product in &results {
        out.product_line(product, false);
    }

    Ok(())
}

fn render_options(page: StorePage, catalog: &Catalog, out: &Output) {
    let options = page.filter_options(catalog);

    out.heading("Filter options");
    out.info(&format!("categories: {}", facet_list(&options.categories)));
    out.info(&format!("brands:     {}", facet_list(&options.brands)));
    out.info(&format!("sizes:      {}", facet_list(&options.sizes)));
    if let Some((lo, hi)) = options.price_span {
        out.info(&format!("prices:     {} to {}", lo.display(), hi.display()));
    }
}

fn facet_list(values: &[FacetValue]) -> String {
    values
        .iter()
        .map(|v| format!("{} ({})", v.value, v.count))
        .collect::<Vec<_>>()
        .join(", ")
}
