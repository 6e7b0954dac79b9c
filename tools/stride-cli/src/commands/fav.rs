//! `stride fav` - manage the persisted favorites list.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use stride_commerce::prelude::*;
use stride_kv::JsonFileStore;

use crate::output::Output;

#[derive(Args)]
pub struct FavArgs {
    #[command(subcommand)]
    pub action: FavAction,
}

#[derive(Subcommand)]
pub enum FavAction {
    /// Add a product to the favorites
    Add {
        /// Product id
        id: u32,
    },

    /// Remove a product from the favorites
    Remove {
        /// Product id
        id: u32,
    },

    /// Flip a product's favorite status
    Toggle {
        /// Product id
        id: u32,
    },

    /// List the favorites
    List,

    /// Remove all favorites
    Clear,
}

pub fn run(args: FavArgs, catalog: &Catalog, store_path: &str, out: &Output) -> Result<()> {
    let store = JsonFileStore::new(store_path);
    let mut favorites = Favorites::load(store).context("failed to load favorites")?;

    match args.action {
        FavAction::Add { id } => {
            let id = ProductId::new(id);
            // Adding an unknown id would strand a dead entry in the store.
            let product = match catalog.by_id(id) {
                Some(p) => p,
                None => {
                    out.error(&format!("Product {} not found", id));
                    return Ok(());
                }
            };
            favorites.add(id)?;
            out.success(&format!("Added {} to favorites", product.name));
        }
        FavAction::Remove { id } => {
            let id = ProductId::new(id);
            favorites.remove(id)?;
            out.success(&format!("Removed {} from favorites", id));
        }
        FavAction::Toggle { id } => {
            let id = ProductId::new(id);
            if favorites.toggle(id)? {
                out.success(&format!("Product {} is now a favorite", id));
            } else {
                out.success(&format!("Product {} is no longer a favorite", id));
            }
        }
        FavAction::List => {
            if out.json() {
                println!("{}", serde_json::to_string(favorites.list())?);
                return Ok(());
            }

            out.heading(&format!("Favorites ({})", favorites.len()));
            if favorites.is_empty() {
                out.info("No favorites yet. Add one with `stride fav add <ID>`.");
                return Ok(());
            }
            for id in favorites.list() {
                match catalog.by_id(*id) {
                    Some(product) => out.product_line(product, true),
                    // Ids can outlive the catalog entries they point at.
                    None => out.warn(&format!("  #{} (no longer in the catalog)", id)),
                }
            }
        }
        FavAction::Clear => {
            favorites.clear()?;
            out.success("Cleared all favorites");
        }
    }

    Ok(())
}
