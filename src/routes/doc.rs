use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    checkout::CheckoutItem,
    error::ErrorBody,
    models::{Badge, Product},
    response::PageMeta,
    routes::{checkout, health, params, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        checkout::create_checkout_session,
    ),
    components(
        schemas(
            Product,
            Badge,
            CheckoutItem,
            PageMeta,
            ErrorBody,
            health::HealthData,
            params::ProductQuery,
            products::ProductListResponse,
            checkout::CreateCheckoutSessionRequest,
            checkout::CheckoutSessionResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog query endpoints"),
        (name = "Checkout", description = "Hosted checkout session endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
