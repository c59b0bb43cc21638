use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::catalog::{
    Availability, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, FilterSpec, MAX_RATING, PageRequest,
    SortOption,
};

/// Product-list query string. Every field arrives as text and parses
/// leniently: malformed values fall back to the filter defaults instead of
/// failing the request.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductQuery {
    pub category: Option<String>,
    /// Comma-separated brand names.
    pub brands: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub rating: Option<String>,
    pub availability: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl ProductQuery {
    pub fn filter(&self) -> FilterSpec {
        let min_price = parse_price(self.min_price.as_deref()).unwrap_or(DEFAULT_PRICE_MIN);
        let max_price = parse_price(self.max_price.as_deref()).unwrap_or(DEFAULT_PRICE_MAX);
        let rating = parse_decimal(self.rating.as_deref())
            .map(|rating| rating.clamp(Decimal::ZERO, MAX_RATING))
            .unwrap_or(Decimal::ZERO);

        FilterSpec {
            category: self.category.clone().unwrap_or_default(),
            price_range: (min_price, max_price),
            brands: parse_brands(self.brands.as_deref()),
            rating,
            availability: Availability::from_param(self.availability.as_deref()),
        }
    }

    pub fn sort(&self) -> SortOption {
        SortOption::from_param(self.sort.as_deref())
    }

    pub fn page(&self) -> PageRequest {
        let page = self
            .page
            .as_deref()
            .and_then(|page| page.trim().parse::<usize>().ok())
            .unwrap_or(1);
        PageRequest::new(page)
    }
}

fn parse_decimal(value: Option<&str>) -> Option<Decimal> {
    value.and_then(|v| v.trim().parse::<Decimal>().ok())
}

/// Negative bounds clamp to zero rather than erroring.
fn parse_price(value: Option<&str>) -> Option<Decimal> {
    parse_decimal(value).map(|price| price.max(Decimal::ZERO))
}

fn parse_brands(value: Option<&str>) -> BTreeSet<String> {
    value
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|brand| !brand.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
