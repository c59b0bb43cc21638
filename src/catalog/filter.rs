use std::collections::BTreeSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Product;

/// Catalog page size. Fixed by the storefront grid, not client-settable.
pub const ITEMS_PER_PAGE: usize = 12;

pub const DEFAULT_PRICE_MIN: Decimal = dec!(0);
pub const DEFAULT_PRICE_MAX: Decimal = dec!(1000);

pub const MAX_RATING: Decimal = dec!(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    All,
    InStock,
    OutOfStock,
}

impl Availability {
    /// Lenient query-string parse; unknown spellings fall back to `All`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("in_stock" | "in-stock" | "instock") => Availability::InStock,
            Some("out_of_stock" | "out-of-stock" | "outofstock") => Availability::OutOfStock,
            _ => Availability::All,
        }
    }

    pub(crate) fn matches(self, product: &Product) -> bool {
        match self {
            Availability::All => true,
            Availability::InStock => product.in_stock,
            Availability::OutOfStock => !product.in_stock,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Curated input order; no comparator is applied.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Rating,
    Popularity,
    Newest,
}

impl SortOption {
    /// Lenient query-string parse accepting snake, kebab and camel
    /// spellings; unknown or absent values keep the featured ordering.
    pub fn from_param(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return SortOption::Featured;
        };
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "price_low_to_high" | "price_asc" | "pricelowtohigh" => SortOption::PriceLowToHigh,
            "price_high_to_low" | "price_desc" | "pricehightolow" => SortOption::PriceHighToLow,
            "rating" => SortOption::Rating,
            "popularity" => SortOption::Popularity,
            "newest" => SortOption::Newest,
            _ => SortOption::Featured,
        }
    }
}

/// The complete set of active catalog-narrowing criteria.
///
/// Replaced wholesale on every change: the engine only ever sees a complete
/// value, never a partial patch.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    /// Exact, case-sensitive category match; empty selects everything.
    pub category: String,
    /// Inclusive bounds, major currency units.
    pub price_range: (Decimal, Decimal),
    /// Union semantics; an empty set selects everything.
    pub brands: BTreeSet<String>,
    /// Minimum rating threshold; 0 passes everything.
    pub rating: Decimal,
    pub availability: Availability,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            category: String::new(),
            price_range: (DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX),
            brands: BTreeSet::new(),
            rating: Decimal::ZERO,
            availability: Availability::All,
        }
    }
}

impl FilterSpec {
    /// Ordered filter pipeline: category, price, brand, rating, availability.
    pub fn matches(&self, product: &Product) -> bool {
        (self.category.is_empty() || self.category == product.category)
            && product.price >= self.price_range.0
            && product.price <= self.price_range.1
            && (self.brands.is_empty() || self.brands.contains(&product.brand))
            && self.rating <= product.rating
            && self.availability.matches(product)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
}

impl PageRequest {
    /// Page indexes start at 1; anything below normalizes up.
    pub fn new(page: usize) -> Self {
        Self { page: page.max(1) }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}
