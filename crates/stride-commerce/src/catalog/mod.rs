//! Product catalog: the immutable product collection and its record types.

mod product;
mod seed;

pub use product::{Badge, Gender, Product};
pub use seed::Catalog;
