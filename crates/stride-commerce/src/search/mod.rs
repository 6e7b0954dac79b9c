//! Catalog query engine: free-text search, filters, and stable sorting.

mod engine;
mod facets;
mod params;

pub use engine::query;
pub(crate) use engine::query_refs;
pub use facets::{FacetValue, FilterOptions};
pub use params::{QueryParameters, SortKey};
