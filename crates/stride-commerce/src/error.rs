//! Storefront error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// The filter/search pipeline is total over its inputs and cannot fail;
/// errors only arise from id lookups and favorites persistence.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Requested product id is not in the collection.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Favorites storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] stride_kv::KvError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
