pub mod criteria;
pub mod filter;
pub mod options;

pub use criteria::{CategoryFilter, FilterCriteria, PriceRange, SortKey};
pub use filter::{filter_and_sort, shuffle};
pub use options::FilterOptions;
