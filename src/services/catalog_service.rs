use crate::{
    catalog,
    error::{AppError, AppResult},
    models::Product,
    response::PageMeta,
    routes::{params::ProductQuery, products::ProductListResponse},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ProductListResponse> {
    let products = state.catalog.fetch_products().await?;
    let page = catalog::query(&products, &query.filter(), query.sort(), &query.page());

    let meta = PageMeta::from(&page);
    Ok(ProductListResponse {
        items: page.items,
        meta,
    })
}

pub async fn get_product(state: &AppState, id: u32) -> AppResult<Product> {
    let products = state.catalog.fetch_products().await?;
    products
        .into_iter()
        .find(|product| product.id == id)
        .ok_or(AppError::NotFound)
}
