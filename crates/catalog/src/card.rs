//! Product card view-model: the values a renderer needs for one tile.

use serde::Serialize;

use alyomi_core::ProductId;

use crate::numeric::NumericValue;
use crate::product::Product;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub image_url: Option<String>,
    /// Sale price as published.
    pub display_price: Option<String>,
    /// Original price as published; only set when a discount badge is shown.
    pub original_price: Option<String>,
    /// Whole-percent discount, only when positive.
    pub discount_badge: Option<u32>,
    /// Rating on a five-star scale, one decimal, only when positive.
    pub rating_on_five: Option<f64>,
    /// Units sold as published; only set alongside a rating.
    pub units_sold: Option<String>,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        let negative = product.discount.as_ref().is_some_and(NumericValue::is_negative);
        let discount = product.discount_percent().trunc();
        let discount_badge =
            (!negative && discount >= 1.0).then(|| discount.min(u32::MAX as f64) as u32);

        let rating = product.rating_percent();
        let rating_on_five = (rating > 0.0).then(|| (rating / 100.0 * 5.0 * 10.0).round() / 10.0);

        Self {
            id: product.id.clone(),
            title: product.title().to_string(),
            image_url: product.image_url.clone(),
            display_price: product.sale_price_value().map(|v| v.display()),
            original_price: discount_badge
                .and(product.original_price_value())
                .map(|v| v.display()),
            discount_badge,
            rating_on_five,
            units_sold: rating_on_five.and(product.volume.as_ref()).map(|v| v.display()),
        }
    }
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self::from_product(product)
    }
}
