//! The seeded product collection.

use crate::catalog::{Badge, Gender, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// The immutable product collection.
///
/// Seeded once at startup and treated as read-only for the life of the
/// application; every page is a filtered view over this one collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in collection order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, surfacing absence as an error.
    pub fn get(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.by_id(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// Products with the given gender tag.
    pub fn by_gender(&self, gender: Gender) -> Vec<&Product> {
        self.products.iter().filter(|p| p.gender == gender).collect()
    }

    /// Products with the given category tag.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Products flagged as new arrivals.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// Products currently discounted.
    pub fn on_sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_on_sale()).collect()
    }

    /// The built-in product collection.
    pub fn seed() -> Self {
        Self::new(seed_products())
    }
}

fn gallery(ids: [u32; 4]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            format!(
                "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=600&h=600&fit=crop"
            )
        })
        .collect()
}

fn thumb(id: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=400&h=400&fit=crop"
    )
}

fn sizes(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Nike Air Max 270".to_string(),
            brand: "Nike".to_string(),
            price: Money::from_decimal(159.99),
            original_price: Some(Money::from_decimal(199.99)),
            rating: 4.8,
            reviews: 234,
            image: thumb(2529148),
            images: gallery([2529148, 1478442, 1456706, 2048548]),
            badge: Some(Badge::Bestseller),
            colors: strings(&["#000000", "#ffffff", "#ff6b6b"]),
            sizes: sizes(&["40", "40.5", "41", "42", "43", "44", "45"]),
            category: "running".to_string(),
            gender: Gender::Women,
            description: "The Nike Air Max 270 delivers visible comfort with the largest \
                          Max Air unit yet. Inspired by the Air Max 93 and Air Max 180, it \
                          features a sleek upper with a bold heel design."
                .to_string(),
            features: strings(&[
                "Max Air unit in heel for superior cushioning",
                "Engineered mesh upper for breathability",
                "Rubber outsole with waffle pattern for traction",
                "Foam midsole for lightweight comfort",
            ]),
            is_new: false,
        },
        Product {
            id: ProductId::new(2),
            name: "Adidas Ultraboost 22".to_string(),
            brand: "Adidas".to_string(),
            price: Money::from_decimal(189.99),
            original_price: Some(Money::from_decimal(220.00)),
            rating: 4.9,
            reviews: 189,
            image: thumb(1478442),
            images: gallery([1478442, 2529148, 1456706, 2048548]),
            badge: Some(Badge::New),
            colors: strings(&["#4a90e2", "#000000", "#ffffff"]),
            sizes: sizes(&["39", "40", "41", "42", "43", "44", "45", "46"]),
            category: "running".to_string(),
            gender: Gender::Men,
            description: "Experience incredible energy return with every step. The \
                          Ultraboost 22 features responsive BOOST midsole technology and a \
                          Primeknit upper for adaptive comfort."
                .to_string(),
            features: strings(&[
                "BOOST midsole for energy return",
                "Primeknit upper adapts to your foot",
                "Continental rubber outsole for grip",
                "Linear Energy Push system for forward motion",
            ]),
            is_new: true,
        },
        Product {
            id: ProductId::new(3),
            name: "Reebok Zig Kinetica 3".to_string(),
            brand: "Reebok".to_string(),
            price: Money::from_decimal(199.00),
            original_price: Some(Money::from_decimal(249.00)),
            rating: 4.7,
            reviews: 127,
            image: thumb(1456706),
            images: gallery([1456706, 2529148, 1478442, 2048548]),
            badge: Some(Badge::TwentyOff),
            colors: strings(&["#ffffff", "#64748b", "#0f172a"]),
            sizes: sizes(&["40", "41", "42", "43", "44", "45"]),
            category: "training".to_string(),
            gender: Gender::Men,
            description: "The Zig Kinetica 3 features innovative ZigTech sole technology \
                          that returns energy with every step. Perfect for high-intensity \
                          training and everyday wear."
                .to_string(),
            features: strings(&[
                "ZigTech sole for energy return",
                "Floatride Fuel foam for cushioning",
                "Breathable mesh upper",
                "Durable rubber outsole",
            ]),
            is_new: false,
        },
        Product {
            id: ProductId::new(4),
            name: "Puma RS-X3".to_string(),
            brand: "Puma".to_string(),
            price: Money::from_decimal(129.99),
            original_price: Some(Money::from_decimal(159.99)),
            rating: 4.6,
            reviews: 98,
            image: thumb(2048548),
            images: gallery([2048548, 1456706, 2529148, 1478442]),
            badge: Some(Badge::Sale),
            colors: strings(&["#ff6b6b", "#4ecdc4", "#45b7d1"]),
            sizes: sizes(&["36", "37", "38", "39", "40", "41"]),
            category: "lifestyle".to_string(),
            gender: Gender::Kids,
            description: "The RS-X3 brings retro-futuristic style with modern comfort. \
                          Features bold colorways and premium materials for standout \
                          street style."
                .to_string(),
            features: strings(&[
                "RS foam for lightweight cushioning",
                "Synthetic leather and mesh upper",
                "Rubber outsole for durability",
                "Bold colorway options",
            ]),
            is_new: false,
        },
        Product {
            id: ProductId::new(5),
            name: "New Balance 990v5".to_string(),
            brand: "New Balance".to_string(),
            price: Money::from_decimal(174.99),
            original_price: None,
            rating: 4.8,
            reviews: 156,
            image: thumb(1240892),
            images: gallery([1240892, 2048548, 1456706, 2529148]),
            badge: Some(Badge::Premium),
            colors: strings(&["#8b5a3c", "#2c3e50", "#ffffff"]),
            sizes: sizes(&["40", "41", "42", "43", "44", "45", "46"]),
            category: "lifestyle".to_string(),
            gender: Gender::Men,
            description: "The 990v5 represents the pinnacle of New Balance craftsmanship. \
                          Made in USA with premium materials and superior comfort \
                          technology."
                .to_string(),
            features: strings(&[
                "ENCAP midsole technology",
                "Premium pigskin and mesh upper",
                "Blown rubber outsole",
                "Made in USA craftsmanship",
            ]),
            is_new: false,
        },
        Product {
            id: ProductId::new(6),
            name: "Converse Chuck 70".to_string(),
            brand: "Converse".to_string(),
            price: Money::from_decimal(89.99),
            original_price: Some(Money::from_decimal(109.99)),
            rating: 4.5,
            reviews: 203,
            image: thumb(1598505),
            images: gallery([1598505, 1240892, 2048548, 1456706]),
            badge: Some(Badge::Classic),
            colors: strings(&["#000000", "#ffffff", "#ff6b6b"]),
            sizes: sizes(&["36", "37", "38", "39", "40", "41", "42"]),
            category: "lifestyle".to_string(),
            gender: Gender::Women,
            description: "The Chuck 70 is built off the original 1970s design with premium \
                          materials and enhanced comfort. A timeless classic with modern \
                          updates."
                .to_string(),
            features: strings(&[
                "Premium canvas upper",
                "OrthoLite insole for comfort",
                "Vintage rubber toe cap",
                "Classic All Star styling",
            ]),
            is_new: false,
        },
        Product {
            id: ProductId::new(7),
            name: "Jordan Air Jordan 1".to_string(),
            brand: "Jordan".to_string(),
            price: Money::from_decimal(169.99),
            original_price: None,
            rating: 4.9,
            reviews: 312,
            image: thumb(1456706),
            images: gallery([1456706, 2529148, 1478442, 2048548]),
            badge: Some(Badge::Iconic),
            colors: strings(&["#000000", "#ffffff", "#dc2626"]),
            sizes: sizes(&["40", "41", "42", "43", "44", "45", "46"]),
            category: "basketball".to_string(),
            gender: Gender::Men,
            description: "The shoe that started it all. The Air Jordan 1 retains its \
                          classic appeal with premium leather construction and iconic \
                          colorways."
                .to_string(),
            features: strings(&[
                "Premium leather upper",
                "Air-Sole unit in heel",
                "Rubber cupsole",
                "Classic Jordan Wings logo",
            ]),
            is_new: true,
        },
        Product {
            id: ProductId::new(8),
            name: "Vans Old Skool".to_string(),
            brand: "Vans".to_string(),
            price: Money::from_decimal(64.99),
            original_price: None,
            rating: 4.4,
            reviews: 189,
            image: thumb(1598505),
            images: gallery([1598505, 1240892, 2048548, 1456706]),
            badge: None,
            colors: strings(&["#000000", "#ffffff", "#8b5a3c"]),
            sizes: sizes(&["35", "36", "37", "38", "39", "40"]),
            category: "lifestyle".to_string(),
            gender: Gender::Kids,
            description: "The Vans Old Skool is a classic skate shoe featuring the iconic \
                          side stripe. Durable construction meets timeless style."
                .to_string(),
            features: strings(&[
                "Canvas and suede upper",
                "Signature rubber waffle outsole",
                "Padded collar for comfort",
                "Iconic side stripe design",
            ]),
            is_new: false,
        },
    ]
}
