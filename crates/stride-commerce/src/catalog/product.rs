//! Product record and its enumerated attributes.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Gender tag on a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
    Kids,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
            Gender::Kids => "kids",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "men" => Some(Gender::Men),
            "women" => Some(Gender::Women),
            "kids" => Some(Gender::Kids),
            _ => None,
        }
    }

    /// Display name for page headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
            Gender::Kids => "Kids",
        }
    }
}

/// Promotional badge rendered on a product card.
///
/// A closed set rather than free-form strings, so the badge/accent mapping
/// cannot drift out of sync with the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    Bestseller,
    New,
    TwentyOff,
    Sale,
    Premium,
    Classic,
    Iconic,
}

impl Badge {
    /// The label rendered on the card.
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Bestseller => "BESTSELLER",
            Badge::New => "NEW",
            Badge::TwentyOff => "20% OFF",
            Badge::Sale => "SALE",
            Badge::Premium => "PREMIUM",
            Badge::Classic => "CLASSIC",
            Badge::Iconic => "ICONIC",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "BESTSELLER" => Some(Badge::Bestseller),
            "NEW" => Some(Badge::New),
            "20% OFF" => Some(Badge::TwentyOff),
            "SALE" => Some(Badge::Sale),
            "PREMIUM" => Some(Badge::Premium),
            "CLASSIC" => Some(Badge::Classic),
            "ICONIC" => Some(Badge::Iconic),
            _ => None,
        }
    }

    /// Accent color name used when rendering the badge.
    pub fn accent(&self) -> &'static str {
        match self {
            Badge::Bestseller => "emerald",
            Badge::New => "blue",
            Badge::TwentyOff => "rose",
            Badge::Sale => "orange",
            Badge::Premium => "purple",
            Badge::Classic => "slate",
            Badge::Iconic => "red",
        }
    }
}

/// A product in the catalog.
///
/// Products are loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Current price.
    pub price: Money,
    /// Pre-discount price, present only when the item is discounted.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Average rating in [0, 5].
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Primary image URL.
    pub image: String,
    /// Gallery image URLs (non-empty).
    pub images: Vec<String>,
    /// Promotional badge, if any.
    #[serde(default)]
    pub badge: Option<Badge>,
    /// Color swatch hex values.
    pub colors: Vec<String>,
    /// Available size labels (non-empty, order-preserving).
    pub sizes: Vec<String>,
    /// Category tag (open set: "running", "lifestyle", ...).
    pub category: String,
    /// Gender tag.
    pub gender: Gender,
    /// Free-text description.
    pub description: String,
    /// Ordered feature strings.
    pub features: Vec<String>,
    /// Whether this is a new arrival.
    #[serde(default)]
    pub is_new: bool,
}

impl Product {
    /// Check whether the product is discounted.
    ///
    /// A product whose recorded original price is equal to or below the
    /// current price is treated as not on sale rather than showing a zero
    /// or negative discount.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.map(|op| op > self.price).unwrap_or(false)
    }

    /// Rounded percentage saved, if on sale.
    pub fn discount_percent(&self) -> Option<u8> {
        self.original_price.and_then(|op| {
            if op > self.price {
                let saved = (op - self.price).amount_cents as f64;
                Some(((saved / op.amount_cents as f64) * 100.0).round() as u8)
            } else {
                None
            }
        })
    }

    /// Absolute amount saved, if on sale.
    pub fn savings(&self) -> Option<Money> {
        self.original_price.and_then(|op| {
            if op > self.price {
                Some(op - self.price)
            } else {
                None
            }
        })
    }

    /// Check whether a lowercased search string matches this product.
    ///
    /// The needle matches if it is a substring of the name, brand, category,
    /// or description, each checked independently and case-insensitively.
    pub fn matches_search(&self, lowered_needle: &str) -> bool {
        self.name.to_lowercase().contains(lowered_needle)
            || self.brand.to_lowercase().contains(lowered_needle)
            || self.category.to_lowercase().contains(lowered_needle)
            || self.description.to_lowercase().contains(lowered_needle)
    }

    /// Check whether the product offers any of the given sizes.
    pub fn offers_any_size(&self, sizes: &[String]) -> bool {
        self.sizes.iter().any(|s| sizes.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(price: f64, original: Option<f64>) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Nike Air Max 270".to_string(),
            brand: "Nike".to_string(),
            price: Money::from_decimal(price),
            original_price: original.map(Money::from_decimal),
            rating: 4.8,
            reviews: 234,
            image: "primary.jpg".to_string(),
            images: vec!["primary.jpg".to_string()],
            badge: Some(Badge::Bestseller),
            colors: vec!["#000000".to_string()],
            sizes: vec!["40".to_string(), "41".to_string()],
            category: "running".to_string(),
            gender: Gender::Women,
            description: "Visible comfort with the largest Max Air unit yet.".to_string(),
            features: vec!["Max Air unit in heel".to_string()],
            is_new: false,
        }
    }

    #[test]
    fn test_on_sale_and_discount() {
        let p = sample(159.99, Some(199.99));
        assert!(p.is_on_sale());
        assert_eq!(p.discount_percent(), Some(20));
        assert_eq!(p.savings(), Some(Money::from_decimal(40.00)));
    }

    #[test]
    fn test_no_original_price_means_not_on_sale() {
        let p = sample(159.99, None);
        assert!(!p.is_on_sale());
        assert_eq!(p.discount_percent(), None);
        assert_eq!(p.savings(), None);
    }

    #[test]
    fn test_violated_invariant_treated_as_not_on_sale() {
        // Equal prices: no sale, no zero-percent badge.
        let equal = sample(100.0, Some(100.0));
        assert!(!equal.is_on_sale());
        assert_eq!(equal.discount_percent(), None);

        // Inverted prices: no negative discount.
        let inverted = sample(120.0, Some(100.0));
        assert!(!inverted.is_on_sale());
        assert_eq!(inverted.savings(), None);
    }

    #[test]
    fn test_search_matches_each_field_independently() {
        let p = sample(159.99, None);
        assert!(p.matches_search("air max")); // name
        assert!(p.matches_search("nike")); // brand
        assert!(p.matches_search("running")); // category
        assert!(p.matches_search("comfort")); // description
        assert!(!p.matches_search("basketball"));
    }

    #[test]
    fn test_offers_any_size() {
        let p = sample(159.99, None);
        assert!(p.offers_any_size(&["41".to_string(), "45".to_string()]));
        assert!(!p.offers_any_size(&["36".to_string()]));
    }

    #[test]
    fn test_badge_labels_roundtrip() {
        for badge in [
            Badge::Bestseller,
            Badge::New,
            Badge::TwentyOff,
            Badge::Sale,
            Badge::Premium,
            Badge::Classic,
            Badge::Iconic,
        ] {
            assert_eq!(Badge::from_str(badge.as_str()), Some(badge));
        }
        assert_eq!(Badge::from_str("LIMITED"), None);
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!(Gender::from_str("Women"), Some(Gender::Women));
        assert_eq!(Gender::from_str("unisex"), None);
    }
}
