//! Query parameters and pagination utilities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::listing::{DEFAULT_STATUS, Listing};

/// Page used when the request has none (or an unusable one)
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the request has none (or an unusable one)
pub const DEFAULT_LIMIT: usize = 20;

/// Raw listing search parameters as they arrive on the URL
///
/// Every field is kept as an untyped string so that no value can make the
/// extractor reject the request. Interpretation happens in
/// [`ListingQuery::from_params`], which ignores anything it cannot parse.
///
/// # Example
/// ```text
/// GET /api/listings?city=toronto&minPrice=500000&beds=3
/// GET /api/listings?page=2&limit=10&sortOrder=asc
/// GET /api/listings?status=Sold&propertyType=condo
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub city: Option<String>,
    pub beds: Option<String>,
    pub baths: Option<String>,
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_order: Option<String>,
}

impl QueryParams {
    /// Build from decoded `key=value` pairs; a repeated key keeps its last value
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let object: Map<String, Value> = pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();
        serde_json::from_value(Value::Object(object)).unwrap_or_default()
    }
}

/// Price sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    /// Highest price first
    #[default]
    Desc,
}

impl SortOrder {
    /// Only the exact value `asc` selects ascending order
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// A fully resolved listing search
///
/// Optional filters that were missing or malformed are `None` and do not
/// restrict the result. `status` always has a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub city: Option<String>,
    pub min_beds: Option<i64>,
    pub min_baths: Option<f64>,
    pub property_type: Option<String>,
    pub status: String,
    pub sort_order: SortOrder,
    pub page: usize,
    pub limit: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            min_price: None,
            max_price: None,
            city: None,
            min_beds: None,
            min_baths: None,
            property_type: None,
            status: DEFAULT_STATUS.to_string(),
            sort_order: SortOrder::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListingQuery {
    /// Resolve raw URL parameters, degrading bad input to "not set"
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            min_price: params.min_price.as_deref().and_then(parse_int),
            max_price: params.max_price.as_deref().and_then(parse_int),
            city: non_empty(params.city.as_deref()),
            min_beds: params.beds.as_deref().and_then(parse_int),
            min_baths: params.baths.as_deref().and_then(parse_decimal),
            property_type: non_empty(params.property_type.as_deref()),
            status: non_empty(params.status.as_deref())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            sort_order: SortOrder::parse(params.sort_order.as_deref()),
            page: positive_or(params.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or(params.limit.as_deref(), DEFAULT_LIMIT),
        }
    }

    /// Index of the first listing on the requested page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl From<QueryParams> for ListingQuery {
    fn from(params: QueryParams) -> Self {
        Self::from_params(&params)
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_string)
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(parse_int)
        .filter(|n| *n >= 1)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(default)
}

/// Parse the leading integer of a string
///
/// Surrounding whitespace and trailing garbage are ignored (`"12abc"` is 12).
/// Returns `None` when no digit follows the optional sign. Values beyond
/// the `i64` range saturate.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, rest) = split_sign(s);
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }

    // A digit run too long for i64 still bounds the filter, so saturate
    let parsed = if negative {
        format!("-{}", digits).parse::<i64>().unwrap_or(i64::MIN)
    } else {
        digits.parse::<i64>().unwrap_or(i64::MAX)
    };
    Some(parsed)
}

/// Parse the leading decimal number of a string
///
/// Accepts an integer part, a fractional part or both (`"2"`, `"2.5"`, `".5"`).
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let (negative, rest) = split_sign(s);
    let int_part = leading_digits(rest);
    let after_int = &rest[int_part.len()..];

    let frac_part = after_int
        .strip_prefix('.')
        .map(leading_digits)
        .unwrap_or("");

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let number = format!(
        "{}.{}",
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part }
    );
    let value: f64 = number.parse().ok()?;
    Some(if negative { -value } else { value })
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    &s[..end]
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    /// Listings on the requested page
    pub listings: Vec<Listing>,

    /// Number of matches before pagination
    pub total: usize,

    /// Requested page number (starts at 1)
    pub page: usize,

    /// Number of pages at the requested page size
    pub total_pages: usize,
}

impl ListingPage {
    pub fn new(listings: Vec<Listing>, meta: &PaginationMeta) -> Self {
        Self {
            listings,
            total: meta.total,
            page: meta.page,
            total_pages: meta.total_pages,
        }
    }
}

/// Page position of a search over `total` matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationMeta {
    /// Requested page, never below 1
    pub page: usize,

    /// Matches before slicing
    pub total: usize,

    /// `ceil(total / limit)`, 0 when nothing matched
    pub total_pages: usize,
}

impl PaginationMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        Self {
            page: page.max(1),
            total,
            total_pages: total.div_ceil(limit.max(1)),
        }
    }
}
