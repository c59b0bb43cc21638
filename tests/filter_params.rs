use rust_decimal_macros::dec;

use axum_storefront_api::catalog::{Availability, FilterSpec, SortOption};
use axum_storefront_api::routes::params::ProductQuery;

#[test]
fn blank_query_yields_the_default_filter() {
    let query = ProductQuery::default();

    assert_eq!(query.filter(), FilterSpec::default());
    assert_eq!(query.sort(), SortOption::Featured);
    assert_eq!(query.page().page, 1);
}

#[test]
fn garbage_numeric_input_falls_back_to_defaults() {
    let query = ProductQuery {
        min_price: Some("abc".into()),
        max_price: Some("10,00".into()),
        rating: Some("lots".into()),
        page: Some("first".into()),
        ..ProductQuery::default()
    };

    let filter = query.filter();
    assert_eq!(filter.price_range, (dec!(0), dec!(1000)));
    assert_eq!(filter.rating, dec!(0));
    assert_eq!(query.page().page, 1);
}

#[test]
fn negative_bounds_clamp_to_zero() {
    let query = ProductQuery {
        min_price: Some("-5".into()),
        max_price: Some("-1".into()),
        ..ProductQuery::default()
    };

    assert_eq!(query.filter().price_range, (dec!(0), dec!(0)));
}

#[test]
fn explicit_bounds_override_the_defaults() {
    let query = ProductQuery {
        min_price: Some("250".into()),
        max_price: Some("1500".into()),
        ..ProductQuery::default()
    };

    assert_eq!(query.filter().price_range, (dec!(250), dec!(1500)));
}

#[test]
fn rating_clamps_into_the_star_scale() {
    let query = ProductQuery {
        rating: Some("7.5".into()),
        ..ProductQuery::default()
    };
    assert_eq!(query.filter().rating, dec!(5));

    let query = ProductQuery {
        rating: Some("-2".into()),
        ..ProductQuery::default()
    };
    assert_eq!(query.filter().rating, dec!(0));
}

#[test]
fn unknown_enum_spellings_fall_back() {
    let query = ProductQuery {
        availability: Some("backordered".into()),
        sort: Some("cheapest".into()),
        ..ProductQuery::default()
    };

    assert_eq!(query.filter().availability, Availability::All);
    assert_eq!(query.sort(), SortOption::Featured);
}

#[test]
fn sort_accepts_kebab_and_camel_spellings() {
    assert_eq!(
        SortOption::from_param(Some("price-low-to-high")),
        SortOption::PriceLowToHigh
    );
    assert_eq!(
        SortOption::from_param(Some("priceHighToLow")),
        SortOption::PriceHighToLow
    );
    assert_eq!(SortOption::from_param(Some("newest")), SortOption::Newest);
    assert_eq!(SortOption::from_param(None), SortOption::Featured);
}

#[test]
fn availability_accepts_common_spellings() {
    assert_eq!(
        Availability::from_param(Some("in_stock")),
        Availability::InStock
    );
    assert_eq!(
        Availability::from_param(Some("inStock")),
        Availability::InStock
    );
    assert_eq!(
        Availability::from_param(Some("out-of-stock")),
        Availability::OutOfStock
    );
    assert_eq!(Availability::from_param(Some("all")), Availability::All);
}

#[test]
fn brand_list_splits_on_commas_and_trims() {
    let query = ProductQuery {
        brands: Some(" Sony, Apple ,,Bose ".into()),
        ..ProductQuery::default()
    };

    let filter = query.filter();
    assert_eq!(filter.brands.len(), 3);
    assert!(filter.brands.contains("Sony"));
    assert!(filter.brands.contains("Apple"));
    assert!(filter.brands.contains("Bose"));
}

#[test]
fn page_zero_normalizes_to_one() {
    let query = ProductQuery {
        page: Some("0".into()),
        ..ProductQuery::default()
    };

    assert_eq!(query.page().page, 1);
}
