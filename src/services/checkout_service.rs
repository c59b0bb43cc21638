use crate::{
    checkout::{self, SessionSpec},
    error::AppResult,
    payments::CheckoutSession,
    routes::checkout::CreateCheckoutSessionRequest,
    state::AppState,
};

/// Builds the hosted-session request from the submitted items and delegates
/// to the gateway. Every construction or submission failure surfaces to the
/// caller; there is no partial success.
pub async fn create_session(
    state: &AppState,
    payload: CreateCheckoutSessionRequest,
) -> AppResult<CheckoutSession> {
    let line_items = checkout::line_items(&payload.items);
    let spec = SessionSpec::new(&state.client_origin, line_items);
    let amount = spec.amount_total();

    let session = state.gateway.create_session(&spec).await?;

    tracing::info!(
        session_id = %session.id,
        amount_minor = amount,
        lines = spec.line_items.len(),
        "checkout session created"
    );

    Ok(session)
}
