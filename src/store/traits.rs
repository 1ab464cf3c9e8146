use crate::models::{LeadRecord, PropertyRecord, ViewingRequestRecord};
use crate::store::query::PropertyQuery;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for the remote listing store.
/// Keeps pages and tests decoupled from the hosted backend; a fake store
/// drops in wherever this trait is accepted.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Fetch catalog rows under the given query constraints.
    async fn fetch_properties(&self, query: &PropertyQuery) -> Result<Vec<PropertyRecord>>;

    /// Fetch a single property by its upstream project id, used by the
    /// detail page. `None` when no row matches.
    async fn fetch_property(&self, property_id: i64) -> Result<Option<PropertyRecord>>;

    /// Insert a contact-form lead. Write-only; never read back.
    async fn insert_lead(&self, lead: &LeadRecord) -> Result<()>;

    /// Insert a viewing request for a listing.
    async fn insert_viewing_request(&self, request: &ViewingRequestRecord) -> Result<()>;
}
