pub mod engine;
pub mod filter;
pub mod source;

pub use engine::{CatalogPage, query, sort_products};
pub use filter::{
    Availability, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, FilterSpec, ITEMS_PER_PAGE, MAX_RATING,
    PageRequest, SortOption,
};
pub use source::{MockCatalog, ProductSource};
