//! Listing fixture loading
//!
//! The fixture is a JSON document with a top-level `listings` array. It is
//! read once at startup and validated against the store invariants before
//! any request is served.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::core::{DataError, Listing};

#[derive(Deserialize)]
struct FixtureDocument {
    listings: Vec<Listing>,
}

/// Read and validate a fixture file
pub async fn load_listings(path: impl AsRef<Path>) -> Result<Vec<Listing>, DataError> {
    let path = path.as_ref();
    let content =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DataError::Unreadable {
                path: path.display().to_string(),
                source,
            })?;

    let listings = parse_listings(&content)?;
    tracing::info!(
        path = %path.display(),
        count = listings.len(),
        "Loaded listing fixture"
    );
    Ok(listings)
}

/// Parse and validate a fixture document held in memory
pub fn parse_listings(json: &str) -> Result<Vec<Listing>, DataError> {
    let document: FixtureDocument = serde_json::from_str(json)?;
    validate(&document.listings)?;
    Ok(document.listings)
}

fn validate(listings: &[Listing]) -> Result<(), DataError> {
    let mut seen = HashSet::with_capacity(listings.len());

    for listing in listings {
        if !seen.insert(listing.listing_key.as_str()) {
            return Err(DataError::DuplicateKey {
                listing_key: listing.listing_key.clone(),
            });
        }

        let invalid = |field: &'static str, reason: &str| DataError::InvalidField {
            listing_key: listing.listing_key.clone(),
            field,
            reason: reason.to_string(),
        };

        if listing.list_price < 0 {
            return Err(invalid("ListPrice", "must not be negative"));
        }
        if !listing.bathroom_total.is_finite() || listing.bathroom_total < 0.0 {
            return Err(invalid("BathroomTotal", "must be a non-negative number"));
        }
        if listing.square_footage == Some(0) {
            return Err(invalid("SquareFootage", "must be positive when present"));
        }
    }

    Ok(())
}
