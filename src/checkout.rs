use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minor units charged when an incoming item carries no usable price.
/// Mirrors the storefront client, which substitutes this amount for an
/// absent or zero price instead of rejecting the item.
pub const DEFAULT_UNIT_AMOUNT: i64 = 2999;

pub const CURRENCY: &str = "usd";

pub const ALLOWED_SHIPPING_COUNTRIES: [&str; 2] = ["US", "CA"];

/// Converts a major-unit price to integer minor units, rounding half away
/// from zero the way the storefront's `Math.round` does for amounts >= 0.
pub fn to_minor_units(price: Decimal) -> i64 {
    (price * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        // out-of-range values collapse to 0 and take the fallback downstream
        .unwrap_or(0)
}

/// One cart line as submitted by the storefront client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckoutItem {
    pub id: u32,
    pub name: String,
    /// Unit price in integer minor units; absent or zero takes the fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    pub quantity: u32,
}

/// One line of the hosted-session request. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineItem {
    pub name: String,
    pub unit_amount: i64,
    pub quantity: u32,
}

/// Derives processor line items: the default amount replaces an absent or
/// zero price, quantities carry through unchanged.
pub fn line_items(items: &[CheckoutItem]) -> Vec<CheckoutLineItem> {
    items
        .iter()
        .map(|item| CheckoutLineItem {
            name: item.name.clone(),
            unit_amount: match item.price {
                Some(price) if price != 0 => price,
                _ => DEFAULT_UNIT_AMOUNT,
            },
            quantity: item.quantity,
        })
        .collect()
}

/// The hosted-payment-session request handed to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSpec {
    pub mode: &'static str,
    pub payment_method_types: &'static [&'static str],
    pub line_items: Vec<CheckoutLineItem>,
    pub success_url: String,
    pub cancel_url: String,
    pub automatic_tax: bool,
    pub allowed_shipping_countries: &'static [&'static str],
}

impl SessionSpec {
    /// One-time card payment with redirect URLs templated on the client
    /// origin. The `{CHECKOUT_SESSION_ID}` placeholder in the success URL is
    /// filled in by the processor.
    pub fn new(client_origin: &str, line_items: Vec<CheckoutLineItem>) -> Self {
        let origin = client_origin.trim_end_matches('/');
        Self {
            mode: "payment",
            payment_method_types: &["card"],
            line_items,
            success_url: format!("{origin}/checkout-success?session_id={{CHECKOUT_SESSION_ID}}"),
            cancel_url: format!("{origin}/shopping-cart"),
            automatic_tax: true,
            allowed_shipping_countries: &ALLOWED_SHIPPING_COUNTRIES,
        }
    }

    /// Total amount submitted to the processor, in minor units.
    pub fn amount_total(&self) -> i64 {
        self.line_items
            .iter()
            .map(|line| line.unit_amount * i64::from(line.quantity))
            .sum()
    }

    /// Flattens the request into the processor's bracketed form encoding.
    pub fn to_form_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("mode".to_string(), self.mode.to_string())];
        for (i, method) in self.payment_method_types.iter().enumerate() {
            params.push((format!("payment_method_types[{i}]"), (*method).to_string()));
        }
        for (i, item) in self.line_items.iter().enumerate() {
            params.push((
                format!("line_items[{i}][price_data][currency]"),
                CURRENCY.to_string(),
            ));
            params.push((
                format!("line_items[{i}][price_data][product_data][name]"),
                item.name.clone(),
            ));
            params.push((
                format!("line_items[{i}][price_data][unit_amount]"),
                item.unit_amount.to_string(),
            ));
            params.push((format!("line_items[{i}][quantity]"), item.quantity.to_string()));
        }
        params.push(("success_url".to_string(), self.success_url.clone()));
        params.push(("cancel_url".to_string(), self.cancel_url.clone()));
        params.push((
            "automatic_tax[enabled]".to_string(),
            self.automatic_tax.to_string(),
        ));
        for (i, country) in self.allowed_shipping_countries.iter().enumerate() {
            params.push((
                format!("shipping_address_collection[allowed_countries][{i}]"),
                (*country).to_string(),
            ));
        }
        params
    }
}
