use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Origin of the storefront SPA; redirect URLs are templated on it.
    pub client_origin: String,
    /// Absent selects the mock payment gateway.
    pub stripe_secret_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let client_origin =
            env::var("CLIENT_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let stripe_secret_key = env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        Ok(Self {
            port,
            host,
            client_origin,
            stripe_secret_key,
        })
    }
}
