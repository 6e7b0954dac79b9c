//! Filter options derived from a view's product subset.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;

/// A single selectable filter value with its product count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetValue {
    /// The value offered in the filter control.
    pub value: String,
    /// Number of products in the subset carrying this value.
    pub count: usize,
}

/// The filter options a view offers.
///
/// Derived from the view's pre-filtered subset rather than the full
/// collection, so controls never offer a value that yields zero results
/// within that view. Values keep first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterOptions {
    /// Distinct categories in the subset.
    pub categories: Vec<FacetValue>,
    /// Distinct brands in the subset.
    pub brands: Vec<FacetValue>,
    /// Distinct sizes across the subset.
    pub sizes: Vec<FacetValue>,
    /// Lowest and highest price in the subset, or `None` when it is empty.
    pub price_span: Option<(Money, Money)>,
}

impl FilterOptions {
    /// Derive options from a product subset.
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let mut categories: Vec<FacetValue> = Vec::new();
        let mut brands: Vec<FacetValue> = Vec::new();
        let mut sizes: Vec<FacetValue> = Vec::new();
        let mut price_span: Option<(Money, Money)> = None;

        for p in products {
            tally(&mut categories, &p.category);
            tally(&mut brands, &p.brand);
            for size in &p.sizes {
                tally(&mut sizes, size);
            }
            price_span = Some(match price_span {
                None => (p.price, p.price),
                Some((lo, hi)) => (lo.min(p.price), hi.max(p.price)),
            });
        }

        Self {
            categories,
            brands,
            sizes,
            price_span,
        }
    }

    /// Check whether the subset offered no products at all.
    pub fn is_empty(&self) -> bool {
        self.price_span.is_none()
    }
}

fn tally(values: &mut Vec<FacetValue>, value: &str) {
    // The option sets are a handful of entries; a linear scan beats a map
    // while keeping first-seen order.
    match values.iter_mut().find(|v| v.value == value) {
        Some(existing) => existing.count += 1,
        None => values.push(FacetValue {
            value: value.to_string(),
            count: 1,
        }),
    }
}
