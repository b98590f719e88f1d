//! Listing query engine
//!
//! Pure functions over a borrowed listing collection. Nothing here holds
//! state or performs I/O, so every call is safe to run concurrently against
//! the same slice.

use indexmap::IndexSet;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::core::filters::apply_filters;
use crate::core::listing::Listing;
use crate::core::query::{ListingPage, ListingQuery, PaginationMeta, SortOrder};

/// Filter, sort and paginate a listing collection
///
/// Ties on price keep their collection order in both directions.
pub fn search(listings: &[Listing], query: &ListingQuery) -> ListingPage {
    let mut matched = apply_filters(listings, query);

    // sort_by_key is stable
    match query.sort_order {
        SortOrder::Asc => matched.sort_by_key(|l| l.list_price),
        SortOrder::Desc => matched.sort_by_key(|l| Reverse(l.list_price)),
    }

    let meta = PaginationMeta::new(query.page, query.limit, matched.len());
    let page: Vec<Listing> = matched
        .into_iter()
        .skip(query.offset())
        .take(query.limit)
        .cloned()
        .collect();

    ListingPage::new(page, &meta)
}

/// Exact lookup on the listing key
pub fn find_by_key<'a>(listings: &'a [Listing], listing_key: &str) -> Option<&'a Listing> {
    listings.iter().find(|l| l.listing_key == listing_key)
}

/// Distinct cities across the whole collection, sorted
pub fn cities(listings: &[Listing]) -> Vec<String> {
    listings
        .iter()
        .map(|l| l.city.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Aggregate figures over the whole collection, every status included
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingStatistics {
    pub total_listings: usize,

    /// Mean price rounded to the nearest unit, `None` for an empty store
    pub average_price: Option<i64>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,

    pub cities_count: usize,

    /// Distinct property subtypes in first-seen order
    pub property_types: Vec<String>,
}

pub fn statistics(listings: &[Listing]) -> ListingStatistics {
    let prices = listings.iter().map(|l| l.list_price);
    let sum: i128 = prices.clone().map(i128::from).sum();

    let average_price = if listings.is_empty() {
        None
    } else {
        let mean = sum as f64 / listings.len() as f64;
        Some(mean.round() as i64)
    };

    let cities: IndexSet<&str> = listings.iter().map(|l| l.city.as_str()).collect();
    let property_types: IndexSet<&str> = listings
        .iter()
        .map(|l| l.property_sub_type.as_str())
        .collect();

    ListingStatistics {
        total_listings: listings.len(),
        average_price,
        min_price: prices.clone().min(),
        max_price: prices.max(),
        cities_count: cities.len(),
        property_types: property_types.into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filters::matches;
    use crate::core::query::QueryParams;
    use crate::core::test_support::listing;

    fn toronto_fixture() -> Vec<Listing> {
        vec![
            listing("T1", 500_000, "Toronto", "Active"),
            listing("T2", 700_000, "Toronto", "Sold"),
            listing("T3", 900_000, "Toronto", "Active"),
        ]
    }

    fn mixed_fixture() -> Vec<Listing> {
        let mut listings = vec![
            listing("A", 650_000, "Ottawa", "Active"),
            listing("B", 1_200_000, "Vancouver", "Active"),
            listing("C", 650_000, "Toronto", "Active"),
            listing("D", 425_000, "Toronto", "Active"),
            listing("E", 650_000, "North Vancouver", "Active"),
            listing("F", 980_000, "Toronto", "Sold"),
            listing("G", 330_000, "Halifax", "Active"),
        ];
        listings[1].property_sub_type = "Condo".to_string();
        listings[3].property_sub_type = "Condo".to_string();
        listings[0].bedrooms_total = 4;
        listings[2].bathroom_total = 2.5;
        listings
    }

    fn keys(page: &ListingPage) -> Vec<&str> {
        page.listings.iter().map(|l| l.listing_key.as_str()).collect()
    }

    fn query(pairs: &[(&str, &str)]) -> ListingQuery {
        let params =
            QueryParams::from_pairs(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        ListingQuery::from(params)
    }

    #[test]
    fn test_city_search_defaults_to_active_sorted_desc() {
        let listings = toronto_fixture();
        let page = search(&listings, &query(&[("city", "toronto")]));

        assert_eq!(keys(&page), vec!["T3", "T1"]);
        assert_eq!(page.total, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_explicit_status_override() {
        let listings = toronto_fixture();
        let page = search(&listings, &query(&[("status", "Sold")]));
        assert_eq!(keys(&page), vec!["T2"]);
    }

    #[test]
    fn test_second_page_of_one() {
        let listings = toronto_fixture();
        let mut all_active = listings.clone();
        for l in &mut all_active {
            l.status = "Active".to_string();
        }

        let page = search(&all_active, &query(&[("page", "2"), ("limit", "1")]));
        assert_eq!(keys(&page), vec!["T2"]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_non_numeric_min_price_is_ignored() {
        let listings = mixed_fixture();
        let with_garbage = search(&listings, &query(&[("minPrice", "abc")]));
        let without = search(&listings, &ListingQuery::default());
        assert_eq!(with_garbage, without);
    }

    #[test]
    fn test_ascending_sort_and_stable_ties() {
        let listings = mixed_fixture();

        let asc = search(&listings, &query(&[("sortOrder", "asc")]));
        assert_eq!(keys(&asc), vec!["G", "D", "A", "C", "E", "B"]);

        let desc = search(&listings, &ListingQuery::default());
        assert_eq!(keys(&desc), vec!["B", "A", "C", "E", "D", "G"]);
    }

    #[test]
    fn test_sort_adjacent_prices_are_ordered() {
        let listings = mixed_fixture();

        let desc = search(&listings, &ListingQuery::default());
        assert!(
            desc.listings
                .windows(2)
                .all(|w| w[0].list_price >= w[1].list_price)
        );

        let asc = search(&listings, &query(&[("sortOrder", "asc")]));
        assert!(
            asc.listings
                .windows(2)
                .all(|w| w[0].list_price <= w[1].list_price)
        );
    }

    #[test]
    fn test_every_result_satisfies_every_predicate() {
        let listings = mixed_fixture();
        let queries = [
            query(&[("minPrice", "400000"), ("maxPrice", "700000")]),
            query(&[("city", "vancouver")]),
            query(&[("beds", "3")]),
            query(&[("baths", "2.5")]),
            query(&[("propertyType", "condo")]),
            query(&[("status", "Sold"), ("city", "TOR")]),
            query(&[("minPrice", "1"), ("propertyType", "single family"), ("beds", "2")]),
        ];

        for q in &queries {
            let page = search(&listings, q);
            let expected = listings.iter().filter(|l| matches(q, l)).count();
            assert_eq!(page.total, expected, "total mismatch for {q:?}");
            assert!(page.listings.iter().all(|l| matches(q, l)), "stray result for {q:?}");
        }
    }

    #[test]
    fn test_total_is_independent_of_pagination() {
        let listings = mixed_fixture();
        let totals: Vec<usize> = [("1", "1"), ("2", "2"), ("1", "50"), ("9", "3")]
            .iter()
            .map(|&(page, limit)| search(&listings, &query(&[("page", page), ("limit", limit)])).total)
            .collect();
        assert!(totals.iter().all(|t| *t == 6));
    }

    #[test]
    fn test_page_beyond_last_is_empty_with_accurate_total() {
        let listings = mixed_fixture();
        let page = search(&listings, &query(&[("page", "5"), ("limit", "2")]));

        assert!(page.listings.is_empty());
        assert_eq!(page.total, 6);
        assert_eq!(page.page, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_oversized_numbers_are_bounds_not_noise() {
        let listings = mixed_fixture();

        let floor = search(&listings, &query(&[("minPrice", "99999999999999999999")]));
        assert_eq!(floor.total, 0);

        let ceiling = search(&listings, &query(&[("maxPrice", "-99999999999999999999")]));
        assert_eq!(ceiling.total, 0);

        let far_page = search(&listings, &query(&[("page", "99999999999999999999")]));
        assert!(far_page.listings.is_empty());
        assert_eq!(far_page.total, 6);
        assert!(far_page.page > far_page.total_pages);
    }

    #[test]
    fn test_no_matches_gives_zero_pages() {
        let listings = mixed_fixture();
        let page = search(&listings, &query(&[("city", "Yellowknife")]));

        assert!(page.listings.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_search_is_idempotent() {
        let listings = mixed_fixture();
        let q = query(&[("minPrice", "400000"), ("sortOrder", "asc"), ("limit", "2")]);
        assert_eq!(search(&listings, &q), search(&listings, &q));
    }

    #[test]
    fn test_find_by_key() {
        let listings = mixed_fixture();
        for l in &listings {
            assert_eq!(find_by_key(&listings, &l.listing_key), Some(l));
        }
        assert_eq!(find_by_key(&listings, "missing"), None);
    }

    #[test]
    fn test_cities_are_distinct_sorted_and_unfiltered() {
        let listings = mixed_fixture();
        assert_eq!(
            cities(&listings),
            vec!["Halifax", "North Vancouver", "Ottawa", "Toronto", "Vancouver"]
        );
    }

    #[test]
    fn test_statistics_cover_all_statuses() {
        let listings = toronto_fixture();
        let stats = statistics(&listings);

        assert_eq!(stats.total_listings, 3);
        assert_eq!(stats.average_price, Some(700_000));
        assert_eq!(stats.min_price, Some(500_000));
        assert_eq!(stats.max_price, Some(900_000));
        assert_eq!(stats.cities_count, 1);
        assert_eq!(stats.property_types, vec!["Single Family"]);
    }

    #[test]
    fn test_statistics_round_average_and_keep_type_order() {
        let mut listings = vec![
            listing("A", 1, "Ottawa", "Active"),
            listing("B", 2, "Toronto", "Active"),
        ];
        listings[0].property_sub_type = "Townhouse".to_string();
        listings[1].property_sub_type = "Condo".to_string();

        let stats = statistics(&listings);
        assert_eq!(stats.average_price, Some(2));
        assert_eq!(stats.property_types, vec!["Townhouse", "Condo"]);
        assert_eq!(stats.cities_count, 2);
    }

    #[test]
    fn test_statistics_empty_store() {
        let stats = statistics(&[]);
        assert_eq!(stats.total_listings, 0);
        assert_eq!(stats.average_price, None);
        assert_eq!(stats.min_price, None);
        assert_eq!(stats.max_price, None);
        assert!(stats.property_types.is_empty());
    }

    #[test]
    fn test_statistics_wire_names() {
        let value = serde_json::to_value(statistics(&toronto_fixture())).unwrap();
        for field in [
            "totalListings",
            "averagePrice",
            "minPrice",
            "maxPrice",
            "citiesCount",
            "propertyTypes",
        ] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
    }
}
