use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorBody},
    models::Product,
    response::PageMeta,
    routes::params::ProductQuery,
    services::catalog_service,
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub items: Vec<Product>,
    pub meta: PageMeta,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("category" = Option<String>, Query, description = "Exact category name; empty selects all"),
        ("brands" = Option<String>, Query, description = "Comma-separated brand names; any match keeps a product"),
        ("min_price" = Option<String>, Query, description = "Lower price bound in major units, default 0"),
        ("max_price" = Option<String>, Query, description = "Upper price bound in major units, default 1000"),
        ("rating" = Option<String>, Query, description = "Minimum rating, 0-5"),
        ("availability" = Option<String>, Query, description = "all | in_stock | out_of_stock"),
        ("sort" = Option<String>, Query, description = "featured | price_low_to_high | price_high_to_low | rating | popularity | newest"),
        ("page" = Option<String>, Query, description = "Page number, default 1; 12 items per page"),
    ),
    responses(
        (status = 200, description = "One page of matching products", body = ProductListResponse)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ProductListResponse>> {
    let page = catalog_service::list_products(&state, query).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<Product>> {
    let product = catalog_service::get_product(&state, id).await?;
    Ok(Json(product))
}
