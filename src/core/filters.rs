//! Listing search predicates
//!
//! Each predicate answers for a single listing and is independent of the
//! others, so the order they run in changes nothing but cost.

use crate::core::listing::Listing;
use crate::core::query::ListingQuery;

/// Price floor, inclusive
pub fn min_price(min: Option<i64>) -> impl Fn(&Listing) -> bool {
    move |listing| min.is_none_or(|min| listing.list_price >= min)
}

/// Price ceiling, inclusive
pub fn max_price(max: Option<i64>) -> impl Fn(&Listing) -> bool {
    move |listing| max.is_none_or(|max| listing.list_price <= max)
}

/// Case-insensitive substring match on the city
pub fn city_contains(city: Option<&str>) -> impl Fn(&Listing) -> bool {
    let needle = city.map(str::to_lowercase);
    move |listing| {
        needle
            .as_deref()
            .is_none_or(|needle| listing.city.to_lowercase().contains(needle))
    }
}

/// Minimum bedroom count
pub fn min_beds(min: Option<i64>) -> impl Fn(&Listing) -> bool {
    move |listing| min.is_none_or(|min| i64::from(listing.bedrooms_total) >= min)
}

/// Minimum bathroom count, half baths included
pub fn min_baths(min: Option<f64>) -> impl Fn(&Listing) -> bool {
    move |listing| min.is_none_or(|min| listing.bathroom_total >= min)
}

/// Case-insensitive equality on the property subtype
pub fn property_type_is(property_type: Option<&str>) -> impl Fn(&Listing) -> bool {
    let wanted = property_type.map(str::to_lowercase);
    move |listing| {
        wanted
            .as_deref()
            .is_none_or(|wanted| listing.property_sub_type.to_lowercase() == wanted)
    }
}

/// Exact status match; never skipped
pub fn status_is(status: &str) -> impl Fn(&Listing) -> bool + '_ {
    move |listing| listing.status == status
}

/// Whether a listing passes every predicate of the query
pub fn matches(query: &ListingQuery, listing: &Listing) -> bool {
    min_price(query.min_price)(listing)
        && max_price(query.max_price)(listing)
        && city_contains(query.city.as_deref())(listing)
        && min_beds(query.min_beds)(listing)
        && min_baths(query.min_baths)(listing)
        && property_type_is(query.property_type.as_deref())(listing)
        && status_is(&query.status)(listing)
}

/// Apply the full predicate chain, keeping collection order
pub fn apply_filters<'a>(listings: &'a [Listing], query: &ListingQuery) -> Vec<&'a Listing> {
    listings.iter().filter(|l| matches(query, l)).collect()
}
