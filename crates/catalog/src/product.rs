use serde::{Deserialize, Deserializer, Serialize};

use alyomi_core::{Entity, ProductId};

use crate::numeric::{NumericValue, normalize_opt};

/// A catalog product as published in the static snapshot.
///
/// Field names follow the affiliate feed (`product_title`, `lastest_volume`,
/// ...); the camelCase names used by hand-written fixtures are accepted as
/// aliases. Every field except the id may be absent or malformed; accessors
/// degrade to empty strings and zeros. The catalog never mutates a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "product_id", alias = "id")]
    pub id: ProductId,

    #[serde(rename = "product_title", alias = "title", default)]
    pub title: Option<String>,

    #[serde(rename = "first_level_category_name", alias = "category", default)]
    pub category: Option<String>,

    #[serde(alias = "salePrice", default)]
    pub target_sale_price: Option<NumericValue>,

    #[serde(default)]
    pub sale_price: Option<NumericValue>,

    #[serde(alias = "originalPrice", default)]
    pub target_original_price: Option<NumericValue>,

    #[serde(default)]
    pub original_price: Option<NumericValue>,

    #[serde(alias = "discountPercent", default)]
    pub discount: Option<NumericValue>,

    // Feed spelling.
    #[serde(rename = "lastest_volume", alias = "volumeSold", default)]
    pub volume: Option<NumericValue>,

    #[serde(rename = "evaluate_rate", alias = "ratingPercent", default)]
    pub rating: Option<NumericValue>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,

    #[serde(rename = "product_main_image_url", alias = "imageUrl", default)]
    pub image_url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// A product with only an id and a title; everything else absent.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            category: None,
            target_sale_price: None,
            sale_price: None,
            target_original_price: None,
            original_price: None,
            discount: None,
            volume: None,
            rating: None,
            keywords: Vec::new(),
            image_url: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_sale_price(mut self, price: impl Into<NumericValue>) -> Self {
        self.target_sale_price = Some(price.into());
        self
    }

    pub fn with_original_price(mut self, price: impl Into<NumericValue>) -> Self {
        self.target_original_price = Some(price.into());
        self
    }

    pub fn with_discount(mut self, discount: impl Into<NumericValue>) -> Self {
        self.discount = Some(discount.into());
        self
    }

    pub fn with_volume(mut self, volume: impl Into<NumericValue>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    pub fn with_rating(mut self, rating: impl Into<NumericValue>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Localised sale price, falling back to the base sale price when the
    /// localised one is absent or blank.
    pub fn sale_price_value(&self) -> Option<&NumericValue> {
        first_filled(self.target_sale_price.as_ref(), self.sale_price.as_ref())
    }

    /// Localised original price, falling back to the base original price.
    pub fn original_price_value(&self) -> Option<&NumericValue> {
        first_filled(
            self.target_original_price.as_ref(),
            self.original_price.as_ref(),
        )
    }

    pub fn sale_price(&self) -> f64 {
        normalize_opt(self.sale_price_value())
    }

    pub fn original_price(&self) -> f64 {
        normalize_opt(self.original_price_value())
    }

    pub fn discount_percent(&self) -> f64 {
        normalize_opt(self.discount.as_ref())
    }

    pub fn volume_sold(&self) -> f64 {
        normalize_opt(self.volume.as_ref())
    }

    /// Rating in `[0, 100]`: a five-star rating scaled by 20.
    pub fn rating_percent(&self) -> f64 {
        normalize_opt(self.rating.as_ref())
    }
}

fn first_filled<'a>(
    preferred: Option<&'a NumericValue>,
    fallback: Option<&'a NumericValue>,
) -> Option<&'a NumericValue> {
    match preferred {
        Some(value) if !value.is_blank() => Some(value),
        _ => fallback.or(preferred),
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
