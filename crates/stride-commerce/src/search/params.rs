//! Query parameters: the user-adjustable search/filter/sort state for a view.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sort keys for catalog results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Keep the collection order (no reordering).
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
    /// New arrivals first.
    Newest,
    /// Highest discount first.
    DiscountDesc,
    /// Lowest discount first.
    DiscountAsc,
}

impl SortKey {
    /// The wire/URL value for this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-low",
            SortKey::PriceDesc => "price-high",
            SortKey::RatingDesc => "rating",
            SortKey::Newest => "newest",
            SortKey::DiscountDesc => "discount-high",
            SortKey::DiscountAsc => "discount-low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "featured" => Some(SortKey::Featured),
            "price-low" => Some(SortKey::PriceAsc),
            "price-high" => Some(SortKey::PriceDesc),
            "rating" => Some(SortKey::RatingDesc),
            "newest" => Some(SortKey::Newest),
            "discount-high" => Some(SortKey::DiscountDesc),
            "discount-low" => Some(SortKey::DiscountAsc),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Highest Rated",
            SortKey::Newest => "Newest",
            SortKey::DiscountDesc => "Highest Discount",
            SortKey::DiscountAsc => "Lowest Discount",
        }
    }
}

/// The user-adjustable query state for one view.
///
/// Reconstructed on every filter change and discarded when the view goes
/// away; empty sets accept everything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryParameters {
    /// Free-text search string (empty = no filtering).
    pub search: String,
    /// Accepted categories (empty = accept all).
    pub categories: Vec<String>,
    /// Accepted brands (empty = accept all).
    pub brands: Vec<String>,
    /// Accepted sizes (empty = accept all; any overlap matches).
    pub sizes: Vec<String>,
    /// Inclusive lower price bound.
    pub price_min: Money,
    /// Inclusive upper price bound.
    pub price_max: Money,
    /// Sort key.
    pub sort: SortKey,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: Vec::new(),
            brands: Vec::new(),
            sizes: Vec::new(),
            // The sidebar's default slider range.
            price_min: Money::zero(),
            price_max: Money::from_dollars(500),
            sort: SortKey::Featured,
        }
    }
}

impl QueryParameters {
    /// Start from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search string.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Add an accepted category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Add an accepted brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.push(brand.into());
        self
    }

    /// Add an accepted size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.sizes.push(size.into());
        self
    }

    /// Set the inclusive price range.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Pre-populate the search field from a navigation query string.
    ///
    /// Reads the `search` parameter out of strings like
    /// `?search=air+max&view=grid`; a missing parameter leaves the search
    /// empty.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let search = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "search")
            .map(|(_, value)| percent_decode(value))
            .unwrap_or_default();
        Self::new().with_search(search.trim())
    }
}

/// Decode a URL query component: `+` as space, `%XX` as the byte value.
fn percent_decode(value: &str) -> String {
    let mut out = Vec::with_capacity(value.len());
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match value.get(i + 1..i + 3).and_then(|h| u8::from_str_radix(h, 16).ok()) {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let params = QueryParameters::new()
            .with_search("air")
            .with_category("running")
            .with_brand("Nike")
            .with_size("42")
            .with_price_range(Money::from_dollars(50), Money::from_dollars(200))
            .with_sort(SortKey::PriceAsc);

        assert_eq!(params.search, "air");
        assert_eq!(params.categories, vec!["running"]);
        assert_eq!(params.brands, vec!["Nike"]);
        assert_eq!(params.sizes, vec!["42"]);
        assert_eq!(params.price_min, Money::from_dollars(50));
        assert_eq!(params.sort, SortKey::PriceAsc);
    }

    #[test]
    fn test_defaults_accept_everything() {
        let params = QueryParameters::default();
        assert!(params.search.is_empty());
        assert!(params.categories.is_empty());
        assert_eq!(params.price_max, Money::from_dollars(500));
        assert_eq!(params.sort, SortKey::Featured);
    }

    #[test]
    fn test_sort_key_roundtrip() {
        for sort in [
            SortKey::Featured,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::RatingDesc,
            SortKey::Newest,
            SortKey::DiscountDesc,
            SortKey::DiscountAsc,
        ] {
            assert_eq!(SortKey::from_str(sort.as_str()), Some(sort));
        }
        assert_eq!(SortKey::from_str("relevance"), None);
    }

    #[test]
    fn test_from_query_string() {
        let params = QueryParameters::from_query_string("?search=air+max");
        assert_eq!(params.search, "air max");

        let params = QueryParameters::from_query_string("view=grid&search=chuck%2070");
        assert_eq!(params.search, "chuck 70");

        let params = QueryParameters::from_query_string("?view=grid");
        assert!(params.search.is_empty());

        let params = QueryParameters::from_query_string("");
        assert!(params.search.is_empty());
    }

    #[test]
    fn test_percent_decode_malformed_sequence() {
        // A dangling percent sign is passed through rather than dropped.
        assert_eq!(percent_decode("50%"), "50%");
        assert_eq!(percent_decode("a%zzb"), "a%zzb");
    }
}
