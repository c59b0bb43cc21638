use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::checkout::SessionSpec;

const SESSIONS_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("payment gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The processor rejected the session request; carries its message.
    #[error("{0}")]
    Api(String),
}

/// Opaque redirect handle minted by the processor. The client sends the
/// browser to the processor's hosted page with it.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
}

/// Seam to the external payment processor. One in-flight request per
/// checkout, no retries; a failure is terminal for that user action.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_session(&self, spec: &SessionSpec) -> Result<CheckoutSession, GatewayError>;
}

/// Live processor client: form-encoded, bearer-authenticated session create.
pub struct StripeGateway {
    client: Client,
    secret_key: String,
}

impl StripeGateway {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            secret_key: secret_key.into(),
        }
    }
}

impl std::fmt::Debug for StripeGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeGateway").finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_session(&self, spec: &SessionSpec) -> Result<CheckoutSession, GatewayError> {
        let response = self
            .client
            .post(SESSIONS_URL)
            .bearer_auth(&self.secret_key)
            .form(&spec.to_form_params())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body
                    .error
                    .message
                    .unwrap_or_else(|| format!("checkout session rejected with status {status}")),
                Err(_) => format!("checkout session rejected with status {status}"),
            };
            return Err(GatewayError::Api(message));
        }

        Ok(response.json::<CheckoutSession>().await?)
    }
}

/// Dev and test stand-in, selected when no secret key is configured.
/// Applies the same basic validation the processor would and mints
/// `cs_test_` identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockGateway;

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_session(&self, spec: &SessionSpec) -> Result<CheckoutSession, GatewayError> {
        if spec.line_items.is_empty() {
            return Err(GatewayError::Api("line_items must not be empty".to_string()));
        }
        for (index, line) in spec.line_items.iter().enumerate() {
            if line.quantity == 0 {
                return Err(GatewayError::Api(format!(
                    "line_items[{index}] quantity must be at least 1"
                )));
            }
            if line.unit_amount <= 0 {
                return Err(GatewayError::Api(format!(
                    "line_items[{index}] unit_amount must be positive"
                )));
            }
        }

        Ok(CheckoutSession {
            id: format!("cs_test_{}", Uuid::new_v4().simple()),
        })
    }
}
