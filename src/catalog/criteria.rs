use serde::{Deserialize, Serialize};

/// Sales stage that the default ordering promotes to the front.
pub const ON_SALE: &str = "On sale";

/// Reserved UI token meaning "no constraint" for categorical selects.
const ALL_TOKEN: &str = "all";

/// One categorical filter dimension.
///
/// The "no constraint" sentinel is a distinct variant rather than a magic
/// string, so a real category that happens to be named "all" is still
/// expressible as `Exactly("all")`. [`CategoryFilter::from_token`] is where
/// the UI's reserved token gets mapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    Any,
    Exactly(String),
}

impl CategoryFilter {
    /// Interpret a raw select value: empty string and the reserved "all"
    /// token mean no constraint.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() || token == ALL_TOKEN {
            CategoryFilter::Any
        } else {
            CategoryFilter::Exactly(token.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Exactly(want) => want == value,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::Any
    }
}

/// Price constraint over a record's minimum price.
///
/// A record with no price is compared as 0, so it falls inside any range
/// whose lower bound is 0. That mirrors the listing pages' behavior; see
/// DESIGN.md for the open question around excluding unpriced records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRange {
    Any,
    /// Open upper bound: `[min, ∞)`.
    AtLeast(i64),
    /// Closed interval `[min, max]`.
    Between(i64, i64),
}

impl PriceRange {
    /// Parse the UI's `"min-max"` / `"min"` tokens. An unparsable bound is
    /// treated as absent rather than an error (caller contract violation,
    /// tolerated): a missing lower bound degrades to 0, a fully unparsable
    /// token to no constraint.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() || token == ALL_TOKEN {
            return PriceRange::Any;
        }
        let (min, max) = match token.split_once('-') {
            Some((lo, hi)) => (lo.trim().parse::<i64>().ok(), hi.trim().parse::<i64>().ok()),
            None => (token.parse::<i64>().ok(), None),
        };
        match (min, max) {
            (Some(min), Some(max)) => PriceRange::Between(min, max),
            (Some(min), None) => PriceRange::AtLeast(min),
            (None, Some(max)) => PriceRange::Between(0, max),
            (None, None) => PriceRange::Any,
        }
    }

    pub fn contains(&self, price: Option<i64>) -> bool {
        let price = price.unwrap_or(0);
        match *self {
            PriceRange::Any => true,
            PriceRange::AtLeast(min) => price >= min,
            PriceRange::Between(min, max) => price >= min && price <= max,
        }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceRange::Any
    }
}

/// Ordering selected in the listing pages' sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    AreaAsc,
    AreaDesc,
    NameAsc,
    NameDesc,
    /// Default order: "On sale" records first (stable partition), then
    /// ascending minimum price within each partition.
    Featured,
}

impl SortKey {
    /// Unrecognized tokens fall back to the default order.
    pub fn from_token(token: &str) -> Self {
        match token {
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "area_asc" => SortKey::AreaAsc,
            "area_desc" => SortKey::AreaDesc,
            "name_asc" => SortKey::NameAsc,
            "name_desc" => SortKey::NameDesc,
            _ => SortKey::Featured,
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Featured
    }
}

/// Everything a listing page's filter bar can constrain, in one place.
/// All dimensions default to "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text search over property, area, and developer names
    /// (case-insensitive substring, OR across the three fields).
    pub search_term: Option<String>,
    pub area: CategoryFilter,
    pub unit_type: CategoryFilter,
    pub developer: CategoryFilter,
    pub status: CategoryFilter,
    pub price_range: PriceRange,
    pub sort_key: SortKey,
}
