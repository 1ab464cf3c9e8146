use anyhow::{Context, Result};
use tracing::{info, warn, Level};

use melkiq_listings::catalog::{self, FilterCriteria, FilterOptions, SortKey};
use melkiq_listings::images::resolve_image_url;
use melkiq_listings::models::{format_area, format_price};
use melkiq_listings::store::{ListingStore, PropertyQuery, SupabaseStore};

/// Store connection settings, from the environment.
struct Config {
    supabase_url: String,
    supabase_anon_key: String,
}

impl Config {
    fn from_env() -> Result<Self> {
        Ok(Self {
            supabase_url: std::env::var("SUPABASE_URL").context("SUPABASE_URL is not set")?,
            supabase_anon_key: std::env::var("SUPABASE_ANON_KEY")
                .context("SUPABASE_ANON_KEY is not set")?,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏙️ MelkIQ Listings - Dubai property catalog");
    info!("============================================");
    info!("");

    let config = Config::from_env()?;
    let store = SupabaseStore::new(&config.supabase_url, &config.supabase_anon_key)?;

    // Optional free-text search from the command line
    let search_term = std::env::args().nth(1);
    let sort_key = std::env::args()
        .nth(2)
        .map(|t| SortKey::from_token(&t))
        .unwrap_or_default();

    info!("Fetching premium catalog (curated developers and areas)...");
    let mut records = match store.fetch_properties(&PropertyQuery::premium()).await {
        Ok(records) => records,
        Err(err) => {
            // Remote failure degrades to an empty listing, never a crash.
            warn!("Catalog fetch failed: {err:#}");
            Vec::new()
        }
    };

    // Fresh arrangement per run; must happen before the deterministic sort.
    catalog::shuffle(&mut records);

    let options = FilterOptions::derive(&records);
    info!(
        "Filter vocabulary: {} areas, {} unit types, {} developers",
        options.areas.len(),
        options.unit_types.len(),
        options.developers.len()
    );

    let criteria = FilterCriteria {
        search_term,
        sort_key,
        ..Default::default()
    };
    let listings = catalog::filter_and_sort(&records, &criteria);

    info!("\n✅ {} listings\n", listings.len());

    for (i, listing) in listings.iter().enumerate() {
        println!(
            "{}. {} ({})",
            i + 1,
            listing.property_name,
            format_price(listing.min_price_aed)
        );
        println!("   {} · {}", listing.area_name, listing.developer_name);
        println!(
            "   {} · from {} · {}",
            listing.normalized_type,
            format_area(listing.units_area_from_m2),
            listing.sale_status
        );
        let cover = resolve_image_url(&listing.property_cover_image_url);
        if !cover.is_empty() {
            println!("   Cover: {cover}");
        }
        println!("   ID: {}", listing.property_id);
        println!();
    }

    // Save the rendered catalog for inspection
    let json = serde_json::to_string_pretty(&listings)?;
    tokio::fs::write("catalog_snapshot.json", json).await?;
    info!("💾 Saved catalog snapshot to catalog_snapshot.json");

    Ok(())
}
