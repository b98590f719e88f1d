//! Listing builders shared by unit tests

use chrono::NaiveDate;

use crate::core::listing::{GeoPoint, Listing};

pub fn listing(key: &str, price: i64, city: &str, status: &str) -> Listing {
    Listing {
        listing_key: key.to_string(),
        list_price: price,
        street_address: format!("{key} Test St"),
        city: city.to_string(),
        province: "Ontario".to_string(),
        postal_code: "A1A 1A1".to_string(),
        bedrooms_total: 2,
        bathroom_total: 1.0,
        property_sub_type: "Single Family".to_string(),
        status: status.to_string(),
        square_footage: Some(1200),
        parking_spaces: 1,
        location: GeoPoint {
            latitude: 43.65,
            longitude: -79.38,
        },
        photos: Vec::new(),
        description: String::new(),
        year_built: None,
        listing_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        agent_name: "Test Agent".to_string(),
        brokerage_name: "Test Realty".to_string(),
    }
}
