use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    checkout::CheckoutItem,
    error::{AppResult, ErrorBody},
    services::checkout_service,
    state::AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCheckoutSessionRequest {
    pub items: Vec<CheckoutItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutSessionResponse {
    pub id: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/create-checkout-session", post(create_checkout_session))
}

#[utoipa::path(
    post,
    path = "/api/create-checkout-session",
    request_body = CreateCheckoutSessionRequest,
    responses(
        (status = 200, description = "Hosted checkout session created", body = CheckoutSessionResponse),
        (status = 500, description = "Session construction or submission failed", body = ErrorBody),
    ),
    tag = "Checkout"
)]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(payload): Json<CreateCheckoutSessionRequest>,
) -> AppResult<Json<CheckoutSessionResponse>> {
    let session = checkout_service::create_session(&state, payload).await?;
    Ok(Json(CheckoutSessionResponse { id: session.id }))
}
