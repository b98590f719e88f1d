//! Listing storage: fixture loading and the in-memory store

pub mod fixture;
pub mod in_memory;

pub use fixture::{load_listings, parse_listings};
pub use in_memory::InMemoryListingService;
