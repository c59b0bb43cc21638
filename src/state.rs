use std::sync::Arc;

use crate::catalog::{MockCatalog, ProductSource};
use crate::config::AppConfig;
use crate::payments::{MockGateway, PaymentGateway, StripeGateway};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn ProductSource>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub client_origin: String,
}

impl AppState {
    /// Wires the bundled catalog and picks the gateway: the live processor
    /// when a secret key is configured, the mock otherwise.
    pub fn from_config(config: &AppConfig) -> Self {
        let gateway: Arc<dyn PaymentGateway> = match &config.stripe_secret_key {
            Some(key) => Arc::new(StripeGateway::new(key.clone())),
            None => {
                tracing::info!("STRIPE_SECRET_KEY not set, using the mock payment gateway");
                Arc::new(MockGateway)
            }
        };

        Self {
            catalog: Arc::new(MockCatalog::new()),
            gateway,
            client_origin: config.client_origin.clone(),
        }
    }
}
