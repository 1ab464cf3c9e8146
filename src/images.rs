//! Image-reference normalization.
//!
//! Image columns in the property table carry a mix of encodings for
//! historical reasons: a bare URL, a JSON string, a JSON object with a
//! `url` key, or a JSON array of either. These helpers flatten all of them
//! into plain URLs and never fail — a bad value degrades to an empty
//! result, which callers render as a placeholder.

use serde_json::Value;

/// Resolve a single image reference to a URL.
///
/// Direct URLs pass through unchanged. Anything else is decoded as JSON;
/// arrays yield their first usable entry. On decode failure the raw input
/// is returned as-is (best effort), and falsy input yields `""`.
pub fn resolve_image_url(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if is_direct_url(raw) {
        return raw.to_string();
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => url_from_value(&value).unwrap_or_default(),
        Err(_) => raw.to_string(),
    }
}

/// Resolve an image reference to an ordered list of URLs.
///
/// Same encodings as [`resolve_image_url`], list-shaped: a direct URL or a
/// single wrapper becomes a one-element list, unusable entries are dropped,
/// and an empty list signals "no usable image".
pub fn resolve_image_list(raw: Option<&str>) -> Vec<String> {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return Vec::new(),
    };
    if is_direct_url(raw) {
        return vec![raw.to_string()];
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .iter()
            .filter_map(url_from_value)
            .collect(),
        Ok(value) => url_from_value(&value).into_iter().collect(),
        Err(_) => Vec::new(),
    }
}

fn is_direct_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// A usable URL out of a decoded wrapper: a non-empty string, an object's
/// `url` key, or the first usable element of an array.
fn url_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => match map.get("url") {
            Some(Value::String(url)) if !url.is_empty() => Some(url.clone()),
            _ => None,
        },
        Value::Array(items) => items.iter().filter_map(url_from_value).next(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_url_passes_through() {
        assert_eq!(resolve_image_url("https://x/y.jpg"), "https://x/y.jpg");
        assert_eq!(resolve_image_list(Some("https://x/y.jpg")), vec!["https://x/y.jpg"]);
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(resolve_image_url(""), "");
        assert!(resolve_image_list(None).is_empty());
        assert!(resolve_image_list(Some("")).is_empty());
    }

    #[test]
    fn json_object_wrapper() {
        assert_eq!(
            resolve_image_url(r#"{"url":"https://x/y.jpg"}"#),
            "https://x/y.jpg"
        );
        assert_eq!(
            resolve_image_list(Some(r#"{"url":"https://x/y.jpg"}"#)),
            vec!["https://x/y.jpg"]
        );
    }

    #[test]
    fn json_string_and_array_wrappers() {
        assert_eq!(resolve_image_url(r#""https://x/a.jpg""#), "https://x/a.jpg");
        assert_eq!(
            resolve_image_url(r#"["https://x/a.jpg","https://x/b.jpg"]"#),
            "https://x/a.jpg"
        );
        assert_eq!(
            resolve_image_list(Some(r#"["https://x/a.jpg",{"url":"https://x/b.jpg"}]"#)),
            vec!["https://x/a.jpg", "https://x/b.jpg"]
        );
    }

    #[test]
    fn array_entries_without_urls_are_dropped() {
        assert_eq!(
            resolve_image_list(Some(r#"[{"width":400},"https://x/b.jpg",""]"#)),
            vec!["https://x/b.jpg"]
        );
    }

    #[test]
    fn decode_failure_falls_back_to_raw() {
        // Not valid JSON and not a recognized scheme: treated as a literal
        // reference for the single-URL case, dropped for the list case.
        assert_eq!(resolve_image_url("cdn/y.jpg"), "cdn/y.jpg");
        assert!(resolve_image_list(Some("{not json")).is_empty());
    }
}
