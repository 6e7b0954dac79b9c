//! `stride search` - search the full catalog.

use anyhow::Result;
use clap::Args;

use stride_commerce::prelude::*;

use crate::commands::list::render_results;
use crate::output::Output;

#[derive(Args)]
pub struct SearchArgs {
    /// Search terms
    #[arg(required = true)]
    pub terms: Vec<String>,
}

pub fn run(args: SearchArgs, catalog: &Catalog, out: &Output) -> Result<()> {
    // Route through the navigation query-string path, the same way the
    // header search box lands on the all-products page.
    let query_string = format!("?search={}", args.terms.join("+"));
    let params = QueryParameters::from_query_string(&query_string);

    out.debug(&format!("query string: {}", query_string));
    render_results(StorePage::AllProducts, catalog, &params, out)
}
