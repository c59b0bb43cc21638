use rust_decimal::Decimal;

use crate::checkout::{self, CheckoutItem};
use crate::models::Product;

/// One cart line. Identity within the store is `product_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    /// Major currency units.
    pub unit_price: Decimal,
    pub original_unit_price: Decimal,
    pub image: String,
    /// Display variant; falls back to the product category, then "Standard".
    pub variant: String,
    pub quantity: u32,
    /// Maximum quantity when stock counts are tracked.
    pub stock_limit: Option<u32>,
}

impl CartLine {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        let variant = if product.category.is_empty() {
            "Standard".to_string()
        } else {
            product.category.clone()
        };
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            original_unit_price: product.original_price,
            image: product.image.clone(),
            variant,
            quantity,
            stock_limit: None,
        }
    }
}

/// In-memory cart, owned by a single execution context. Every method takes
/// `&mut self` and completes synchronously; there is no interior locking.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of `product`, merging into an existing line for the
    /// same product rather than duplicating it.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        self.add_line(CartLine::from_product(product, quantity));
    }

    /// Merge contract: an existing line gains the incoming quantity, clamped
    /// to its stock limit when one is tracked; an unseen product inserts a
    /// new line. A resulting quantity of zero removes the line instead.
    pub fn add_line(&mut self, line: CartLine) {
        if let Some(index) = self
            .lines
            .iter()
            .position(|l| l.product_id == line.product_id)
        {
            let merged = self.lines[index].quantity.saturating_add(line.quantity);
            let clamped = clamp_to_limit(merged, self.lines[index].stock_limit);
            if clamped == 0 {
                self.lines.remove(index);
            } else {
                self.lines[index].quantity = clamped;
            }
        } else {
            let mut line = line;
            line.quantity = clamp_to_limit(line.quantity, line.stock_limit);
            if line.quantity > 0 {
                self.lines.push(line);
            }
        }
    }

    /// Sets the quantity outright; zero removes the line. Unknown ids are a
    /// no-op.
    pub fn update_quantity(&mut self, product_id: u32, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Deletes the line if present; an absent id is a no-op, not an error.
    pub fn remove(&mut self, product_id: u32) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `unit_price * quantity` across all lines, in major units.
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.unit_price * Decimal::from(line.quantity))
            .sum()
    }

    /// The ordered wire items for `POST /api/create-checkout-session`.
    pub fn checkout_items(&self) -> Vec<CheckoutItem> {
        self.lines
            .iter()
            .map(|line| CheckoutItem {
                id: line.product_id,
                name: line.name.clone(),
                price: Some(checkout::to_minor_units(line.unit_price)),
                quantity: line.quantity,
            })
            .collect()
    }
}

fn clamp_to_limit(quantity: u32, limit: Option<u32>) -> u32 {
    match limit {
        Some(limit) => quantity.min(limit),
        None => quantity,
    }
}
