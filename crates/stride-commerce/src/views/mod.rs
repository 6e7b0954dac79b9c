//! Per-page view specializations.
//!
//! Each store page is the same query engine over a different slice of the
//! catalog: a fixed, non-user-adjustable pre-filter plus a default set of
//! query parameters. Pages derive their filter controls from the
//! pre-filtered subset so no control offers a zero-result value.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Gender, Product};
use crate::money::Money;
use crate::search::{self, FilterOptions, QueryParameters, SortKey};

/// Categories grouped under the sports page.
const SPORTS_CATEGORIES: [&str; 3] = ["running", "training", "basketball"];

/// A browsable store page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StorePage {
    /// The full collection.
    #[default]
    AllProducts,
    /// Men's products.
    Men,
    /// Women's products.
    Women,
    /// Kids' products.
    Kids,
    /// Running, training, and basketball shoes.
    Sports,
    /// New arrivals.
    NewArrivals,
    /// Discounted products.
    Sale,
}

impl StorePage {
    /// The URL/CLI value for this page.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorePage::AllProducts => "all",
            StorePage::Men => "men",
            StorePage::Women => "women",
            StorePage::Kids => "kids",
            StorePage::Sports => "sports",
            StorePage::NewArrivals => "new",
            StorePage::Sale => "sale",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" | "products" => Some(StorePage::AllProducts),
            "men" => Some(StorePage::Men),
            "women" => Some(StorePage::Women),
            "kids" => Some(StorePage::Kids),
            "sports" => Some(StorePage::Sports),
            "new" => Some(StorePage::NewArrivals),
            "sale" => Some(StorePage::Sale),
            _ => None,
        }
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            StorePage::AllProducts => "All Products",
            StorePage::Men => "Men's Collection",
            StorePage::Women => "Women's Collection",
            StorePage::Kids => "Kids' Collection",
            StorePage::Sports => "Sports Shoes",
            StorePage::NewArrivals => "Latest Releases",
            StorePage::Sale => "Sale",
        }
    }

    /// All page values, for help text and option listings.
    pub fn all_pages() -> [StorePage; 7] {
        [
            StorePage::AllProducts,
            StorePage::Men,
            StorePage::Women,
            StorePage::Kids,
            StorePage::Sports,
            StorePage::NewArrivals,
            StorePage::Sale,
        ]
    }

    /// The fixed pre-filter defining this page.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            StorePage::AllProducts => true,
            StorePage::Men => product.gender == Gender::Men,
            StorePage::Women => product.gender == Gender::Women,
            StorePage::Kids => product.gender == Gender::Kids,
            StorePage::Sports => SPORTS_CATEGORIES.contains(&product.category.as_str()),
            StorePage::NewArrivals => product.is_new,
            StorePage::Sale => product.is_on_sale(),
        }
    }

    /// The pre-filtered subset for this page, in collection order.
    pub fn products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.all().iter().filter(|p| self.matches(p)).collect()
    }

    /// Default query parameters for this page.
    ///
    /// New arrivals default to the newest-first sort; every other page keeps
    /// the featured order.
    pub fn default_params(&self) -> QueryParameters {
        let params = QueryParameters::new();
        match self {
            StorePage::NewArrivals => params.with_sort(SortKey::Newest),
            _ => params,
        }
    }

    /// Run the query engine over this page's subset.
    pub fn browse<'a>(&self, catalog: &'a Catalog, params: &QueryParameters) -> Vec<&'a Product> {
        search::query_refs(catalog.all().iter().filter(|p| self.matches(p)), params)
    }

    /// Filter options derived from this page's subset.
    pub fn filter_options(&self, catalog: &Catalog) -> FilterOptions {
        FilterOptions::from_products(catalog.all().iter().filter(|p| self.matches(p)))
    }
}

/// Aggregates shown on the sale page banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleSummary {
    /// Number of discounted products.
    pub product_count: usize,
    /// Sum of savings across all discounted products.
    pub total_savings: Money,
    /// The single largest discount percentage on offer.
    pub max_discount_percent: u8,
}

impl SaleSummary {
    /// Compute the sale banner figures from the catalog.
    pub fn compute(catalog: &Catalog) -> Self {
        let sale = StorePage::Sale.products(catalog);
        let total_savings = sale
            .iter()
            .filter_map(|p| p.savings())
            .fold(Money::zero(), |acc, s| acc + s);
        let max_discount_percent = sale
            .iter()
            .filter_map(|p| p.discount_percent())
            .max()
            .unwrap_or(0);

        Self {
            product_count: sale.len(),
            total_savings,
            max_discount_percent,
        }
    }
}
