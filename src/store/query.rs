use serde::{Deserialize, Serialize};

use crate::store::premium;

/// Row cap for catalog fetches. No pagination cursor; client-side filtering
/// works over whatever fits under this cap.
pub const CATALOG_ROW_LIMIT: usize = 1000;

/// Fixed projection of the property table used by listing pages.
pub const PROPERTY_COLUMNS: &[&str] = &[
    "row_id",
    "property_id",
    "property_name",
    "area_name",
    "developer_name",
    "normalized_type",
    "furnishing",
    "status",
    "sale_status",
    "readiness",
    "min_price_aed",
    "max_price_aed",
    "units_area_from_m2",
    "units_area_to_m2",
    "property_cover_image_url",
    "interior_images",
    "lobby_images",
    "architecture_images",
    "has_escrow",
    "is_partner_project",
];

/// Constraints for a catalog fetch against the property table.
///
/// The not-null predicates are the upstream guarantee the filter/sort core
/// relies on: rows without a cover image or a minimum price never reach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyQuery {
    pub require_cover_image: bool,
    pub require_min_price: bool,
    /// When set, only rows from these developers are returned.
    pub developer_allowlist: Option<Vec<String>>,
    /// When set, only rows from these areas are returned.
    pub area_allowlist: Option<Vec<String>>,
    pub limit: usize,
}

impl PropertyQuery {
    /// Standard listing-page query: displayable rows only, capped.
    pub fn catalog() -> Self {
        Self {
            require_cover_image: true,
            require_min_price: true,
            developer_allowlist: None,
            area_allowlist: None,
            limit: CATALOG_ROW_LIMIT,
        }
    }

    /// Catalog query restricted to the curated premium developers and
    /// areas. This is the allow-list the top-projects and hottest-deals
    /// pages apply before any user-facing filtering.
    pub fn premium() -> Self {
        Self {
            developer_allowlist: Some(premium::developers()),
            area_allowlist: Some(premium::areas()),
            ..Self::catalog()
        }
    }

    /// Render the query as PostgREST query-string pairs (unencoded; the
    /// HTTP client percent-encodes on send).
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), PROPERTY_COLUMNS.join(","))];
        if self.require_cover_image {
            pairs.push((
                "property_cover_image_url".to_string(),
                "not.is.null".to_string(),
            ));
        }
        if self.require_min_price {
            pairs.push(("min_price_aed".to_string(), "not.is.null".to_string()));
        }
        if let Some(developers) = &self.developer_allowlist {
            pairs.push(("developer_name".to_string(), in_list(developers)));
        }
        if let Some(areas) = &self.area_allowlist {
            pairs.push(("area_name".to_string(), in_list(areas)));
        }
        pairs.push(("limit".to_string(), self.limit.to_string()));
        pairs
    }
}

/// PostgREST `in.(...)` membership predicate. Values are double-quoted so
/// embedded commas and spaces survive; embedded quotes are escaped.
fn in_list(values: &[String]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|v| format!("\"{}\"", v.replace('"', "\\\"")))
        .collect();
    format!("in.({})", quoted.join(","))
}
