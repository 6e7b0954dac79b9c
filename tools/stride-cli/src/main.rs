//! Stride CLI - Terminal storefront browser.
//!
//! Commands:
//! - `stride list` - Browse a store page with filters and sorting
//! - `stride search` - Search the full catalog
//! - `stride show` - Show a product's detail view
//! - `stride fav` - Manage the persisted favorites list
//! - `stride sale` - Sale overview with an optional live countdown

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{FavArgs, ListArgs, SaleArgs, SearchArgs, ShowArgs};
use stride_commerce::prelude::*;

/// Stride CLI - Browse the Stride storefront catalog
#[derive(Parser)]
#[command(name = "stride")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Path of the favorites store file
    #[arg(long, global = true, default_value = ".stride/favorites.json")]
    store: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a store page with filters and sorting
    List(ListArgs),

    /// Search the full catalog
    Search(SearchArgs),

    /// Show a product's detail view
    Show(ShowArgs),

    /// Manage the persisted favorites list
    Fav(FavArgs),

    /// Sale overview with an optional live countdown
    Sale(SaleArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let catalog = Catalog::seed();

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &catalog, &output),
        Commands::Search(args) => commands::search::run(args, &catalog, &output),
        Commands::Show(args) => commands::show::run(args, &catalog, &output),
        Commands::Fav(args) => commands::fav::run(args, &catalog, &cli.store, &output),
        Commands::Sale(args) => commands::sale::run(args, &catalog, &output).await,
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
