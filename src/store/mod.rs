pub mod premium;
pub mod query;
pub mod supabase;
pub mod traits;

pub use query::PropertyQuery;
pub use supabase::SupabaseStore;
pub use traits::ListingStore;
