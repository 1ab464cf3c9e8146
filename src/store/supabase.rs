use crate::models::{LeadRecord, PropertyRecord, ViewingRequestRecord};
use crate::store::query::PropertyQuery;
use crate::store::traits::ListingStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const PROPERTY_TABLE: &str = "reelly_units_property_flat";
const LEADS_TABLE: &str = "leads";
const VIEWING_REQUESTS_TABLE: &str = "viewing_requests";

/// Supabase (PostgREST) implementation of the listing store.
///
/// Constructed explicitly with its endpoint and API key and passed to
/// whatever issues queries and inserts. No process-wide client handle.
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn fetch_rows(&self, pairs: &[(String, String)]) -> Result<Vec<PropertyRecord>> {
        let url = self.table_url(PROPERTY_TABLE);
        debug!("Fetching {url} with {} predicates", pairs.len());

        let response = self
            .client
            .get(&url)
            .query(pairs)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .context("Failed to query property table")?;

        if !response.status().is_success() {
            warn!("Property query returned status: {}", response.status());
            anyhow::bail!("Property query failed: {}", response.status());
        }

        response
            .json::<Vec<PropertyRecord>>()
            .await
            .context("Failed to decode property rows")
    }

    /// PostgREST inserts take a JSON array of rows; we always send one.
    async fn insert_row<T: Serialize + Sync>(&self, table: &str, row: &T) -> Result<()> {
        let url = self.table_url(table);
        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await
            .with_context(|| format!("Failed to insert into {table}"))?;

        if !response.status().is_success() {
            warn!("Insert into {table} returned status: {}", response.status());
            anyhow::bail!("Insert into {table} failed: {}", response.status());
        }
        Ok(())
    }
}

#[async_trait]
impl ListingStore for SupabaseStore {
    async fn fetch_properties(&self, query: &PropertyQuery) -> Result<Vec<PropertyRecord>> {
        let rows = self.fetch_rows(&query.to_query_pairs()).await?;
        info!("Fetched {} property rows", rows.len());
        Ok(rows)
    }

    async fn fetch_property(&self, property_id: i64) -> Result<Option<PropertyRecord>> {
        let pairs = vec![
            ("select".to_string(), "*".to_string()),
            ("property_id".to_string(), format!("eq.{property_id}")),
            ("limit".to_string(), "1".to_string()),
        ];
        let rows = self.fetch_rows(&pairs).await?;
        Ok(rows.into_iter().next())
    }

    async fn insert_lead(&self, lead: &LeadRecord) -> Result<()> {
        self.insert_row(LEADS_TABLE, lead).await?;
        info!("Recorded lead for {}", lead.property_name);
        Ok(())
    }

    async fn insert_viewing_request(&self, request: &ViewingRequestRecord) -> Result<()> {
        self.insert_row(VIEWING_REQUESTS_TABLE, request).await?;
        info!(
            "Recorded viewing request for {} at {}",
            request.property_name, request.viewing_datetime
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_urls_normalize_trailing_slash() {
        let store = SupabaseStore::new("https://xyz.supabase.co/", "anon-key").unwrap();
        assert_eq!(
            store.table_url(PROPERTY_TABLE),
            "https://xyz.supabase.co/rest/v1/reelly_units_property_flat"
        );
        assert_eq!(
            store.table_url(LEADS_TABLE),
            "https://xyz.supabase.co/rest/v1/leads"
        );
    }
}
