use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Promotional label rendered on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Badge {
    #[serde(rename = "Sale")]
    Sale,
    #[serde(rename = "New")]
    New,
    #[serde(rename = "Best Seller")]
    BestSeller,
    #[serde(rename = "Limited")]
    Limited,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Major currency units. Invariant: `original_price >= price`.
    pub price: Decimal,
    pub original_price: Decimal,
    pub category: String,
    pub brand: String,
    pub rating: Decimal,
    pub reviews: u32,
    pub image: String,
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    pub description: String,
}
