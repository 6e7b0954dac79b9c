//! The catalog query pipeline.

use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::Product;
use crate::search::QueryParameters;
use crate::search::SortKey;

/// Run the query pipeline over a product collection.
///
/// Stages apply in order: free-text search, category, brand, size, price
/// range, then a stable sort. Each stage narrows the set from the previous
/// one; an empty result is a valid outcome, not an error. Pure function of
/// its inputs.
pub fn query<'a>(collection: &'a [Product], params: &QueryParameters) -> Vec<&'a Product> {
    query_refs(collection.iter(), params)
}

/// Pipeline over an already-narrowed iterator, used by view pre-filters.
pub(crate) fn query_refs<'a>(
    collection: impl Iterator<Item = &'a Product>,
    params: &QueryParameters,
) -> Vec<&'a Product> {
    let needle = params.search.trim().to_lowercase();

    let mut results: Vec<&Product> = collection
        .filter(|p| needle.is_empty() || p.matches_search(&needle))
        .filter(|p| params.categories.is_empty() || params.categories.contains(&p.category))
        .filter(|p| params.brands.is_empty() || params.brands.contains(&p.brand))
        .filter(|p| params.sizes.is_empty() || p.offers_any_size(&params.sizes))
        .filter(|p| p.price >= params.price_min && p.price <= params.price_max)
        .collect();

    sort_results(&mut results, params.sort);

    debug!(
        matched = results.len(),
        sort = params.sort.as_str(),
        search = %params.search,
        "catalog query"
    );

    results
}

/// Apply the comparator for a sort key.
///
/// `sort_by` is stable, so products equal under the comparator keep their
/// relative order from the previous stage. `Featured` leaves the collection
/// order untouched.
fn sort_results(results: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::Featured => {}
        SortKey::PriceAsc => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => results.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::RatingDesc => results.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
        SortKey::Newest => results.sort_by(|a, b| b.is_new.cmp(&a.is_new)),
        SortKey::DiscountDesc => results.sort_by(|a, b| {
            b.discount_percent()
                .unwrap_or(0)
                .cmp(&a.discount_percent().unwrap_or(0))
        }),
        SortKey::DiscountAsc => results.sort_by(|a, b| {
            a.discount_percent()
                .unwrap_or(0)
                .cmp(&b.discount_percent().unwrap_or(0))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Gender, Product};
    use crate::ids::ProductId;
    use crate::money::Money;
    use crate::search::SortKey;

    fn product(id: u32, name: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            brand: "Brand".to_string(),
            price: Money::from_decimal(price),
            original_price: None,
            rating: 4.0,
            reviews: 10,
            image: "img.jpg".to_string(),
            images: vec!["img.jpg".to_string()],
            badge: None,
            colors: vec![],
            sizes: vec!["42".to_string()],
            category: "running".to_string(),
            gender: Gender::Men,
            description: "A shoe.".to_string(),
            features: vec![],
            is_new: false,
        }
    }

    /// The spec's example collection: ids 1-8 priced
    /// [60, 130, 160, 175, 190, 90, 170, 65].
    fn example_collection() -> Vec<Product> {
        [60.0, 130.0, 160.0, 175.0, 190.0, 90.0, 170.0, 65.0]
            .iter()
            .enumerate()
            .map(|(i, price)| product(i as u32 + 1, &format!("Shoe {}", i + 1), *price))
            .collect()
    }

    fn ids(results: &[&Product]) -> Vec<u32> {
        results.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_identity_case() {
        // Empty parameters with the featured sort return the collection
        // unchanged in content and order.
        let collection = example_collection();
        let results = query(&collection, &QueryParameters::default());
        assert_eq!(ids(&results), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_price_range_inclusive_with_sort() {
        // Range [60, 130] sorted low-to-high picks exactly the products
        // priced 60, 65, 90, 130 in ascending order; both bounds included.
        let collection = example_collection();
        let params = QueryParameters::new()
            .with_price_range(Money::from_dollars(60), Money::from_dollars(130))
            .with_sort(SortKey::PriceAsc);

        let results = query(&collection, &params);
        assert_eq!(ids(&results), vec![1, 8, 6, 2]);
        let prices: Vec<f64> = results.iter().map(|p| p.price.to_decimal()).collect();
        assert_eq!(prices, vec![60.0, 65.0, 90.0, 130.0]);
    }

    #[test]
    fn test_price_sorts_reverse_each_other() {
        let collection = example_collection();
        let asc = query(
            &collection,
            &QueryParameters::new().with_sort(SortKey::PriceAsc),
        );
        let desc = query(
            &collection,
            &QueryParameters::new().with_sort(SortKey::PriceDesc),
        );

        // All prices distinct, so descending is exactly ascending reversed.
        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn test_sort_stability_for_equal_prices() {
        let mut collection = example_collection();
        collection[2].price = Money::from_dollars(60); // id 3 ties with id 1
        collection[6].price = Money::from_dollars(60); // id 7 ties too

        let asc = query(
            &collection,
            &QueryParameters::new().with_sort(SortKey::PriceAsc),
        );
        let desc = query(
            &collection,
            &QueryParameters::new().with_sort(SortKey::PriceDesc),
        );

        // The tied group keeps collection order in both directions.
        assert_eq!(ids(&asc)[..3], [1, 3, 7]);
        let desc_ids = ids(&desc);
        assert_eq!(desc_ids[desc_ids.len() - 3..], [1, 3, 7]);
    }

    #[test]
    fn test_newest_groups_new_before_old() {
        let mut collection = example_collection();
        collection[1].is_new = true; // id 2
        collection[4].is_new = true; // id 5
        collection[6].is_new = true; // id 7

        let results = query(
            &collection,
            &QueryParameters::new().with_sort(SortKey::Newest),
        );

        // New products first, each group in original relative order.
        assert_eq!(ids(&results), vec![2, 5, 7, 1, 3, 4, 6, 8]);
    }

    #[test]
    fn test_rating_sort_descending() {
        let mut collection = example_collection();
        collection[0].rating = 3.1;
        collection[3].rating = 4.9;
        collection[5].rating = 4.5;

        let results = query(
            &collection,
            &QueryParameters::new().with_sort(SortKey::RatingDesc),
        );
        assert_eq!(results[0].id.get(), 4);
        assert_eq!(results.last().unwrap().id.get(), 1);
    }

    #[test]
    fn test_discount_sort() {
        let mut collection = example_collection();
        collection[0].original_price = Some(Money::from_dollars(120)); // id 1: 50%
        collection[1].original_price = Some(Money::from_dollars(140)); // id 2: 7%
        collection[2].original_price = Some(Money::from_dollars(200)); // id 3: 20%

        let results = query(
            &collection,
            &QueryParameters::new().with_sort(SortKey::DiscountDesc),
        );
        assert_eq!(ids(&results)[..3], [1, 3, 2]);

        let results = query(
            &collection,
            &QueryParameters::new().with_sort(SortKey::DiscountAsc),
        );
        // Undiscounted products (0%) come first, in collection order.
        assert_eq!(ids(&results)[..5], [4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_search_property() {
        // Every product the query includes actually contains the needle in
        // one of the four searched fields.
        let mut collection = example_collection();
        collection[3].brand = "Nike".to_string();
        collection[5].description = "nike-inspired design".to_string();

        let params = QueryParameters::new().with_search("NIKE");
        let results = query(&collection, &params);
        assert_eq!(ids(&results), vec![4, 6]);
        for p in &results {
            let needle = "nike";
            assert!(
                p.name.to_lowercase().contains(needle)
                    || p.brand.to_lowercase().contains(needle)
                    || p.category.to_lowercase().contains(needle)
                    || p.description.to_lowercase().contains(needle)
            );
        }
    }

    #[test]
    fn test_category_filter_excludes_everything_else() {
        let mut collection = example_collection();
        collection[2].category = "basketball".to_string();
        collection[5].category = "training".to_string();

        let params = QueryParameters::new()
            .with_category("basketball")
            .with_category("training");
        let results = query(&collection, &params);
        assert_eq!(ids(&results), vec![3, 6]);
        assert!(results.iter().all(|p| p.category == "basketball" || p.category == "training"));
    }

    #[test]
    fn test_brand_and_size_filters() {
        let mut collection = example_collection();
        collection[0].brand = "Nike".to_string();
        collection[0].sizes = vec!["40".to_string(), "41".to_string()];
        collection[1].brand = "Nike".to_string();
        collection[1].sizes = vec!["44".to_string()];

        let params = QueryParameters::new().with_brand("Nike").with_size("41");
        let results = query(&collection, &params);
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn test_empty_search_result_then_filters_are_harmless() {
        let collection = example_collection();
        let params = QueryParameters::new()
            .with_search("no such shoe anywhere")
            .with_category("running")
            .with_price_range(Money::zero(), Money::from_dollars(500))
            .with_sort(SortKey::PriceAsc);

        let results = query(&collection, &params);
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let results = query(&[], &QueryParameters::default());
        assert!(results.is_empty());
    }
}
