use async_trait::async_trait;
use rust_decimal_macros::dec;

use crate::models::{Badge, Product};

/// Read interface the query pipeline sits behind, so the bundled mock
/// collection can be swapped for a real catalog service without touching
/// the engine.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> anyhow::Result<Vec<Product>>;
}

/// Hard-coded catalog standing in for a real product service.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<Product>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            products: sample_products(),
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductSource for MockCatalog {
    async fn fetch_products(&self) -> anyhow::Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Wireless Noise-Cancelling Headphones".to_string(),
            price: dec!(279.99),
            original_price: dec!(349.99),
            category: "Electronics".to_string(),
            brand: "Sony".to_string(),
            rating: dec!(4.7),
            reviews: 2341,
            image: "/images/products/wireless-headphones.jpg".to_string(),
            in_stock: true,
            badge: Some(Badge::Sale),
            description: "Over-ear headphones with adaptive noise cancelling and 30-hour battery life.".to_string(),
        },
        Product {
            id: 2,
            name: "Smart Watch Series 9".to_string(),
            price: dec!(399.00),
            original_price: dec!(429.00),
            category: "Electronics".to_string(),
            brand: "Apple".to_string(),
            rating: dec!(4.8),
            reviews: 5123,
            image: "/images/products/smart-watch.jpg".to_string(),
            in_stock: true,
            badge: Some(Badge::BestSeller),
            description: "Always-on display, crash detection and a week of battery in low-power mode.".to_string(),
        },
        Product {
            id: 3,
            name: "Portable Bluetooth Speaker".to_string(),
            price: dec!(129.95),
            original_price: dec!(129.95),
            category: "Electronics".to_string(),
            brand: "Bose".to_string(),
            rating: dec!(4.5),
            reviews: 876,
            image: "/images/products/bluetooth-speaker.jpg".to_string(),
            in_stock: true,
            badge: None,
            description: "Waterproof speaker with 12 hours of playtime and a built-in microphone.".to_string(),
        },
        Product {
            id: 4,
            name: "65W GaN Fast Charger".to_string(),
            price: dec!(45.99),
            original_price: dec!(59.99),
            category: "Electronics".to_string(),
            brand: "Anker".to_string(),
            rating: dec!(4.6),
            reviews: 1432,
            image: "/images/products/gan-charger.jpg".to_string(),
            in_stock: true,
            badge: Some(Badge::Sale),
            description: "Three-port compact charger that tops up a laptop, tablet and phone at once.".to_string(),
        },
        Product {
            id: 5,
            name: "Mechanical Gaming Keyboard".to_string(),
            price: dec!(149.99),
            original_price: dec!(149.99),
            category: "Electronics".to_string(),
            brand: "Logitech".to_string(),
            rating: dec!(4.4),
            reviews: 689,
            image: "/images/products/gaming-keyboard.jpg".to_string(),
            in_stock: false,
            badge: None,
            description: "Low-profile tactile switches with per-key lighting and onboard profiles.".to_string(),
        },
        Product {
            id: 6,
            name: "Air Max Running Shoes".to_string(),
            price: dec!(139.99),
            original_price: dec!(179.99),
            category: "Footwear".to_string(),
            brand: "Nike".to_string(),
            rating: dec!(4.5),
            reviews: 3210,
            image: "/images/products/air-max.jpg".to_string(),
            in_stock: true,
            badge: Some(Badge::BestSeller),
            description: "Visible air cushioning and a breathable mesh upper for daily miles.".to_string(),
        },
        Product {
            id: 7,
            name: "Ultraboost Trainers".to_string(),
            price: dec!(159.99),
            original_price: dec!(159.99),
            category: "Footwear".to_string(),
            brand: "Adidas".to_string(),
            rating: dec!(4.6),
            reviews: 2087,
            image: "/images/products/ultraboost.jpg".to_string(),
            in_stock: true,
            badge: None,
            description: "Responsive foam midsole with a knit upper that adapts to your stride.".to_string(),
        },
        Product {
            id: 8,
            name: "Leather Weekender Bag".to_string(),
            price: dec!(189.00),
            original_price: dec!(240.00),
            category: "Accessories".to_string(),
            brand: "Herschel".to_string(),
            rating: dec!(4.2),
            reviews: 312,
            image: "/images/products/weekender-bag.jpg".to_string(),
            in_stock: true,
            badge: Some(Badge::Sale),
            description: "Full-grain leather duffel with a padded laptop sleeve and shoe compartment.".to_string(),
        },
        Product {
            id: 9,
            name: "Polarized Sunglasses".to_string(),
            price: dec!(154.00),
            original_price: dec!(154.00),
            category: "Accessories".to_string(),
            brand: "Ray-Ban".to_string(),
            rating: dec!(4.4),
            reviews: 1120,
            image: "/images/products/sunglasses.jpg".to_string(),
            in_stock: false,
            badge: None,
            description: "Classic frame with polarized glass lenses and 100% UV protection.".to_string(),
        },
        Product {
            id: 10,
            name: "Barista Espresso Machine".to_string(),
            price: dec!(599.95),
            original_price: dec!(699.95),
            category: "Home".to_string(),
            brand: "Breville".to_string(),
            rating: dec!(4.7),
            reviews: 845,
            image: "/images/products/espresso-machine.jpg".to_string(),
            in_stock: true,
            badge: Some(Badge::Limited),
            description: "Built-in conical burr grinder and precise espresso extraction at home.".to_string(),
        },
        Product {
            id: 11,
            name: "Robot Vacuum Cleaner".to_string(),
            price: dec!(449.00),
            original_price: dec!(549.00),
            category: "Home".to_string(),
            brand: "iRobot".to_string(),
            rating: dec!(4.1),
            reviews: 1764,
            image: "/images/products/robot-vacuum.jpg".to_string(),
            in_stock: true,
            badge: None,
            description: "Maps your home, empties itself and keeps clear of cables and pet bowls.".to_string(),
        },
        Product {
            id: 12,
            name: "Smart LED Bulb 4-Pack".to_string(),
            price: dec!(49.99),
            original_price: dec!(59.99),
            category: "Home".to_string(),
            brand: "Philips".to_string(),
            rating: dec!(4.3),
            reviews: 2931,
            image: "/images/products/smart-bulbs.jpg".to_string(),
            in_stock: true,
            badge: Some(Badge::New),
            description: "Sixteen million colors, schedules and voice control over Wi-Fi.".to_string(),
        },
    ]
}
