//! Storefront domain types and catalog query engine for Stride.
//!
//! This crate provides the logic behind a catalog-browsing storefront:
//!
//! - **Catalog**: the immutable product collection, seeded once at startup
//! - **Search**: the query engine applying free-text search, filters, and
//!   stable sorting over the collection
//! - **Views**: per-page specializations (gender pages, sale, new arrivals)
//!   defined by a fixed pre-filter plus default query parameters
//! - **Favorites**: a persisted set of product ids over an injected store
//!
//! # Example
//!
//! ```rust
//! use stride_commerce::prelude::*;
//!
//! let catalog = Catalog::seed();
//!
//! // Browse the sale page, cheapest first.
//! let params = StorePage::Sale
//!     .default_params()
//!     .with_sort(SortKey::PriceAsc);
//! let results = StorePage::Sale.browse(&catalog, &params);
//! assert!(results.iter().all(|p| p.is_on_sale()));
//!
//! // Keep a favorites list over an in-memory store.
//! let mut favorites = Favorites::load(stride_kv::MemoryStore::new()).unwrap();
//! favorites.add(ProductId::new(1)).unwrap();
//! assert!(favorites.contains(ProductId::new(1)));
//! ```

pub mod catalog;
pub mod countdown;
pub mod error;
pub mod favorites;
pub mod ids;
pub mod money;
pub mod search;
pub mod views;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Badge, Catalog, Gender, Product};

    // Search
    pub use crate::search::{query, FacetValue, FilterOptions, QueryParameters, SortKey};

    // Views
    pub use crate::views::{SaleSummary, StorePage};

    // Favorites
    pub use crate::favorites::Favorites;

    // Countdown
    pub use crate::countdown::Countdown;
}
