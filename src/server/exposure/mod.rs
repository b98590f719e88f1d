//! API exposure modules
//!
//! Each exposure consumes the shared handler state and produces a Router for
//! its protocol. REST is the only one the listing service speaks.

pub mod rest;

pub use rest::RestExposure;
