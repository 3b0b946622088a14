//! Filter engine.
//!
//! Every function borrows from the caller's collection and returns a new
//! sequence of references; the collection itself is never reordered.

use crate::intent::{NavigationIntent, SpecialView};
use crate::product::Product;

/// Narrow `products` to what `intent` asks for.
///
/// The hot-deal view is a re-ordering rather than a filter: every product is
/// returned, highest discount first. Detail, info and home intents do not
/// filter; detail and info return nothing because they are not listings.
pub fn filter<'a>(products: &'a [Product], intent: &NavigationIntent) -> Vec<&'a Product> {
    match intent {
        NavigationIntent::Category(name) => by_category(products, name.as_deref()),
        NavigationIntent::Search(term) => search(products, term),
        NavigationIntent::Special(SpecialView::PriceCeiling { max }) => {
            under_price(products, *max as f64)
        }
        NavigationIntent::Special(SpecialView::HotDeal) => by_discount(products),
        NavigationIntent::All | NavigationIntent::Home => products.iter().collect(),
        NavigationIntent::Detail(_) | NavigationIntent::Info(_) => Vec::new(),
    }
}

/// Exact, case-sensitive category match. `None` keeps everything.
pub fn by_category<'a>(products: &'a [Product], category: Option<&str>) -> Vec<&'a Product> {
    match category {
        None => products.iter().collect(),
        Some(name) => products
            .iter()
            .filter(|p| p.category.as_deref() == Some(name))
            .collect(),
    }
}

/// Case-insensitive substring search over title, category and keywords.
pub fn search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| matches_search(p, &needle))
        .collect()
}

fn matches_search(product: &Product, needle: &str) -> bool {
    product.title().to_lowercase().contains(needle)
        || product.category().to_lowercase().contains(needle)
        || product.keywords.join(" ").to_lowercase().contains(needle)
}

/// Products whose normalized sale price is at most `ceiling`.
pub fn under_price<'a>(products: &'a [Product], ceiling: f64) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.sale_price() <= ceiling)
        .collect()
}

/// Every product ordered by descending discount; ties keep input order.
pub fn by_discount(products: &[Product]) -> Vec<&Product> {
    let mut ordered: Vec<&Product> = products.iter().collect();
    ordered.sort_by(|a, b| b.discount_percent().total_cmp(&a.discount_percent()));
    ordered
}

/// Distinct, non-empty category labels in first-seen order.
pub fn categories(products: &[Product]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for category in products.iter().filter_map(|p| p.category.as_deref()) {
        if !category.is_empty() && !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}
