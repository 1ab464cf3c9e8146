use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Context label used for leads submitted from pages that are not tied to a
/// specific listing (home page contact form, services page, etc.).
pub const GENERAL_INQUIRY: &str = "General inquiry";

/// One denormalized row of the remote property table: a project joined with
/// one of its unit blocks. Read-only on our side; the store owns the data.
///
/// Nullable numeric columns stay `Option` — a missing `min_price_aed` means
/// "price on request", not zero, everywhere except the catalog comparators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Surrogate key for the row (project + unit block).
    pub row_id: String,
    /// Upstream project id. Not unique across unit blocks of one project.
    pub property_id: i64,
    pub property_name: String,
    pub area_name: String,
    pub developer_name: String,
    /// Normalized unit type used for grouping (e.g. "Apartments").
    #[serde(default)]
    pub normalized_type: String,
    #[serde(default)]
    pub furnishing: String,
    /// Project construction status (e.g. "Under construction").
    #[serde(default)]
    pub status: String,
    /// Sales stage (e.g. "Presale(EOI)", "On sale").
    #[serde(default)]
    pub sale_status: String,
    #[serde(default)]
    pub readiness: String,
    pub min_price_aed: Option<i64>,
    pub max_price_aed: Option<i64>,
    pub units_area_from_m2: Option<f64>,
    pub units_area_to_m2: Option<f64>,
    /// Cover image reference; historically either a bare URL or a
    /// JSON-encoded wrapper. Resolve with [`crate::images::resolve_image_url`].
    #[serde(default)]
    pub property_cover_image_url: String,
    /// JSON-encoded string arrays, when present.
    pub interior_images: Option<String>,
    pub lobby_images: Option<String>,
    pub architecture_images: Option<String>,
    #[serde(default)]
    pub has_escrow: bool,
    #[serde(default)]
    pub is_partner_project: bool,
}

impl PropertyRecord {
    /// All image references for the record, cover first, resolved to plain
    /// URLs. Unusable entries are dropped rather than surfaced as errors.
    pub fn all_image_urls(&self) -> Vec<String> {
        let mut urls = Vec::new();
        let cover = crate::images::resolve_image_url(&self.property_cover_image_url);
        if !cover.is_empty() {
            urls.push(cover);
        }
        for field in [
            &self.interior_images,
            &self.lobby_images,
            &self.architecture_images,
        ] {
            urls.extend(crate::images::resolve_image_list(field.as_deref()));
        }
        urls
    }
}

/// Contact-form submission. Write-only: inserted into the store's `leads`
/// collection and never read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRecord {
    pub name: String,
    pub email: Option<String>,
    pub phone_number: String,
    /// Listing the inquiry came from, or [`GENERAL_INQUIRY`].
    pub property_name: String,
}

impl LeadRecord {
    pub fn new(
        name: impl Into<String>,
        email: Option<String>,
        phone_number: impl Into<String>,
        property_name: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.filter(|e| !e.trim().is_empty()),
            phone_number: phone_number.into(),
            property_name: property_name
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| GENERAL_INQUIRY.to_string()),
        }
    }
}

/// Viewing-request submission for a specific listing. Write-only, like
/// [`LeadRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewingRequestRecord {
    pub name: String,
    pub phone_number: String,
    pub property_name: String,
    /// Combined timestamp built from the form's separate date and time
    /// fields; serialized as an RFC 3339 UTC timestamp.
    pub viewing_datetime: DateTime<Utc>,
}

impl ViewingRequestRecord {
    /// Build a request from the form's split date (`YYYY-MM-DD`) and time
    /// (`HH:MM`) inputs. Fails on an unparsable date or time rather than
    /// storing a garbage timestamp.
    pub fn from_parts(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        property_name: impl Into<String>,
        date: &str,
        time: &str,
    ) -> Result<Self> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("invalid viewing date: {date}"))?;
        let time = NaiveTime::parse_from_str(time, "%H:%M")
            .with_context(|| format!("invalid viewing time: {time}"))?;
        Ok(Self {
            name: name.into(),
            phone_number: phone_number.into(),
            property_name: property_name.into(),
            viewing_datetime: date.and_time(time).and_utc(),
        })
    }
}

/// Price display fallback: nulls render as a call-to-action, large values
/// are compacted ("1.2M AED", "750K AED").
pub fn format_price(price: Option<i64>) -> String {
    match price {
        None | Some(0) => "Please call for the price".to_string(),
        Some(p) if p >= 1_000_000 => format!("{:.1}M AED", p as f64 / 1_000_000.0),
        Some(p) if p >= 1_000 => format!("{:.0}K AED", p as f64 / 1_000.0),
        Some(p) => format!("{p} AED"),
    }
}

/// Unit-size display fallback; null renders as "unspecified".
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(a) => format!("{a:.0} m²"),
        None => "Unspecified".to_string(),
    }
}

/// Square meters to square feet, rounded to the nearest foot.
pub fn m2_to_sqft(m2: f64) -> i64 {
    (m2 * 10.764).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_defaults_to_general_inquiry() {
        let lead = LeadRecord::new("Sara", None, "+971501234567", None);
        assert_eq!(lead.property_name, GENERAL_INQUIRY);

        let lead = LeadRecord::new("Sara", None, "+971501234567", Some("  ".to_string()));
        assert_eq!(lead.property_name, GENERAL_INQUIRY);

        let lead = LeadRecord::new(
            "Sara",
            Some(String::new()),
            "+971501234567",
            Some("Creek Vista".to_string()),
        );
        assert_eq!(lead.property_name, "Creek Vista");
        assert_eq!(lead.email, None);
    }

    #[test]
    fn viewing_datetime_combines_date_and_time() {
        let req = ViewingRequestRecord::from_parts(
            "Omid",
            "+971501234567",
            "Creek Vista",
            "2026-09-14",
            "15:30",
        )
        .unwrap();
        assert_eq!(
            req.viewing_datetime
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "2026-09-14T15:30:00.000Z"
        );
    }

    #[test]
    fn viewing_datetime_rejects_garbage() {
        assert!(ViewingRequestRecord::from_parts("x", "y", "z", "tomorrow", "15:30").is_err());
        assert!(ViewingRequestRecord::from_parts("x", "y", "z", "2026-09-14", "late").is_err());
    }

    #[test]
    fn price_formatting_fallbacks() {
        assert_eq!(format_price(None), "Please call for the price");
        assert_eq!(format_price(Some(1_200_000)), "1.2M AED");
        assert_eq!(format_price(Some(750_000)), "750K AED");
        assert_eq!(format_price(Some(950)), "950 AED");
    }

    #[test]
    fn sqft_conversion_rounds() {
        assert_eq!(m2_to_sqft(100.0), 1076);
        assert_eq!(m2_to_sqft(46.5), 501);
    }
}
