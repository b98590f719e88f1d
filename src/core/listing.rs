//! Listing data model
//!
//! Field names follow the CREA DDF payload the frontend consumes, so a
//! listing read from the fixture serializes back out unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status a search falls back to when the caller does not ask for one
pub const DEFAULT_STATUS: &str = "Active";

/// Latitude/longitude pair of a listing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// One property record available for sale
///
/// Listings are immutable once loaded. The only identity is `listing_key`,
/// which is unique across the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Listing {
    /// Unique, globally stable identifier
    pub listing_key: String,

    /// Asking price in whole currency units
    pub list_price: i64,

    pub street_address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,

    pub bedrooms_total: u32,

    /// Bathroom count, half baths included (e.g. 2.5)
    pub bathroom_total: f64,

    /// Property subtype such as "Single Family" or "Condo"
    pub property_sub_type: String,

    /// Lifecycle label, e.g. "Active" or "Sold"
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_footage: Option<u32>,

    #[serde(default)]
    pub parking_spaces: u32,

    #[serde(flatten)]
    pub location: GeoPoint,

    /// Photo URIs in display order
    #[serde(default)]
    pub photos: Vec<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,

    pub listing_date: NaiveDate,

    pub agent_name: String,
    pub brokerage_name: String,
}

impl Listing {
    /// Whether the listing is in the default searchable state
    pub fn is_active(&self) -> bool {
        self.status == DEFAULT_STATUS
    }
}
