//! Static product snapshot loading.
//!
//! The storefront has no backend: the whole catalog is one JSON array written
//! ahead of time by an offline job. This module reads that array into
//! [`Product`]s for a `CatalogSession`.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemorySource;
pub use json_file::JsonFileSource;
pub use r#trait::{ProductSource, SnapshotError};

use std::collections::HashSet;

use serde_json::Value as JsonValue;

use alyomi_catalog::Product;

/// Parse a snapshot document.
///
/// The root must be a JSON array. Records that are not valid products (for
/// instance missing a `product_id`) are skipped with a warning, and a repeated
/// id keeps its first record, so one bad entry never costs the whole catalog.
pub fn parse_snapshot(json: &str) -> Result<Vec<Product>, SnapshotError> {
    let root: JsonValue = serde_json::from_str(json)?;
    let kind = json_kind(&root);
    let JsonValue::Array(records) = root else {
        return Err(SnapshotError::NotAnArray(kind));
    };

    let mut seen = HashSet::with_capacity(records.len());
    let mut products = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let product: Product = match serde_json::from_value(record) {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping malformed product record");
                continue;
            }
        };

        if !seen.insert(product.id.clone()) {
            tracing::warn!(index, product_id = %product.id, "skipping duplicate product id");
            continue;
        }
        products.push(product);
    }

    Ok(products)
}

/// Load from `source`, degrading to an empty catalog on any failure.
///
/// Callers render an empty catalog as "could not load products"; the failure
/// itself is only logged.
pub fn load_or_empty<S: ProductSource + ?Sized>(source: &S) -> Vec<Product> {
    match source.load() {
        Ok(products) => {
            tracing::info!(
                source = %source.describe(),
                products = products.len(),
                "product snapshot loaded"
            );
            products
        }
        Err(err) => {
            tracing::warn!(source = %source.describe(), error = %err, "product snapshot unavailable");
            Vec::new()
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
