//! Featured product catalog.

use serde::{Deserialize, Serialize};

/// A product shown in the featured grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Price in whole dollars.
    pub price: u32,
    pub color: Option<String>,
    /// Optional badge like "Trending" or "New".
    pub badge: Option<String>,
    pub image: Option<String>,
}

impl Product {
    pub fn new(id: u32, name: &str, category: &str, price: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            color: None,
            badge: None,
            image: None,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn with_badge(mut self, badge: &str) -> Self {
        self.badge = Some(badge.to_string());
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    /// Product detail page link.
    pub fn href(&self) -> String {
        format!("/product/{}", self.id)
    }

    /// Price formatted for display.
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

/// The six products in the featured grid.
pub fn featured_products() -> Vec<Product> {
    vec![
        Product::new(1, "Leveling Revolution 7", "Running Shoes", 70)
            .with_color("Black")
            .with_badge("Trending")
            .with_image("/images/products/revolution-7.jpg"),
        Product::new(2, "Leveling Air Max 270", "Lifestyle", 150)
            .with_color("White")
            .with_badge("Top Selling")
            .with_image("/images/products/air-max-270.jpg"),
        Product::new(3, "Leveling Blazer Mid 77", "Basketball", 100)
            .with_color("Navy")
            .with_image("/images/products/blazer-mid-77.jpg"),
        Product::new(4, "Leveling Court Legacy", "Tennis", 95)
            .with_color("Gray")
            .with_badge("New")
            .with_image("/images/products/court-legacy.jpg"),
        Product::new(5, "Leveling Dunk High", "Streetwear", 125)
            .with_color("Red")
            .with_badge("Top Selling")
            .with_image("/images/products/dunk-high.jpg"),
        Product::new(6, "Leveling React Infinity", "Running", 160)
            .with_color("Blue")
            .with_image("/images/products/react-infinity.jpg"),
    ]
}
