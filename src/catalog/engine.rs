use crate::catalog::filter::{FilterSpec, ITEMS_PER_PAGE, PageRequest, SortOption};
use crate::models::Product;

/// One window of query results plus the counts the paginator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub page: usize,
    pub per_page: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Runs the filter, sort and paginate pipeline over a product collection.
///
/// Pure and synchronous: the input slice is never mutated and identical
/// inputs produce identical pages. An empty result is a valid terminal
/// value, not an error.
pub fn query(
    products: &[Product],
    filter: &FilterSpec,
    sort: SortOption,
    page: &PageRequest,
) -> CatalogPage {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect();
    sort_products(&mut filtered, sort);
    paginate(filtered, page)
}

/// Stable sort; ties keep their input order. Descending orders reverse the
/// comparator rather than the sorted vector, which would flip ties.
pub fn sort_products(products: &mut [Product], sort: SortOption) {
    match sort {
        SortOption::Featured => {}
        SortOption::PriceLowToHigh => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceHighToLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortOption::Popularity => products.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        // Higher ids were added later; id order stands in for recency.
        SortOption::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}

fn paginate(items: Vec<Product>, request: &PageRequest) -> CatalogPage {
    let total_count = items.len();
    let total_pages = total_count.div_ceil(ITEMS_PER_PAGE);
    // Filters can shrink the set under an existing page index; clamping keeps
    // a non-empty result set from ever yielding an empty window.
    let page = request.page.clamp(1, total_pages.max(1));
    let items = items
        .into_iter()
        .skip((page - 1) * ITEMS_PER_PAGE)
        .take(ITEMS_PER_PAGE)
        .collect();

    CatalogPage {
        items,
        page,
        per_page: ITEMS_PER_PAGE,
        total_count,
        total_pages,
    }
}
