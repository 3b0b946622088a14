//! Performance ranking.
//!
//! `score = ln(volume_sold + 1) + rating_percent / 100`
//!
//! Scores are returned next to the product they belong to; products are never
//! annotated in place, so one collection can be ranked from many call sites at
//! once.

use serde::Serialize;

use crate::product::Product;

/// A product paired with the score it was ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ranked<'a> {
    pub product: &'a Product,
    pub score: f64,
}

/// Performance score of a single product.
///
/// Negative sales volumes are treated as zero so the logarithm stays defined.
pub fn performance_score(product: &Product) -> f64 {
    (product.volume_sold().max(0.0) + 1.0).ln() + product.rating_percent() / 100.0
}

/// Order products by descending performance score.
///
/// The sort is stable: equal scores keep their input order.
pub fn rank<'a, I>(products: I) -> Vec<Ranked<'a>>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut ranked: Vec<Ranked<'a>> = products
        .into_iter()
        .map(|product| Ranked {
            product,
            score: performance_score(product),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// [`rank`], keeping only the products.
pub fn rank_products<'a, I>(products: I) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    rank(products).into_iter().map(|r| r.product).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ranked: &[Ranked<'_>]) -> Vec<String> {
        ranked.iter().map(|r| r.product.id.to_string()).collect()
    }

    #[test]
    fn empty_input_ranks_to_empty_output() {
        let products: Vec<Product> = Vec::new();
        assert!(rank(&products).is_empty());
    }

    #[test]
    fn score_matches_formula() {
        let product = Product::new(1, "a").with_volume(99).with_rating(100);
        let score = performance_score(&product);
        assert!((score - (100f64.ln() + 1.0)).abs() < 1e-12);
        assert!((score - 5.6052).abs() < 1e-4);
    }

    #[test]
    fn all_zero_fields_score_zero() {
        let product = Product::new(1, "a");
        assert_eq!(performance_score(&product), 0.0);
    }

    #[test]
    fn formatted_fields_are_normalized() {
        let product = Product::new(1, "a").with_volume("1,000").with_rating("90%");
        let expected = 1001f64.ln() + 0.9;
        assert!((performance_score(&product) - expected).abs() < 1e-12);
    }

    #[test]
    fn negative_volume_does_not_poison_score() {
        let product = Product::new(1, "a").with_volume(-5);
        assert_eq!(performance_score(&product), 0.0);
    }

    #[test]
    fn orders_by_descending_score() {
        let products = vec![
            Product::new(1, "low").with_volume(1),
            Product::new(2, "high").with_volume(10_000),
            Product::new(3, "mid").with_volume(100).with_rating(90),
        ];

        let ranked = rank(&products);
        assert_eq!(ids(&ranked), vec!["2", "3", "1"]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ties_keep_input_order() {
        let products = vec![
            Product::new(1, "a").with_volume(5).with_rating(80),
            Product::new(2, "b"),
            Product::new(3, "c").with_volume(5).with_rating(80),
            Product::new(4, "d").with_volume(5).with_rating(80),
        ];

        let ranked = rank(&products);
        assert_eq!(ids(&ranked), vec!["1", "3", "4", "2"]);
    }

    #[test]
    fn ranking_does_not_touch_input() {
        let products = vec![Product::new(1, "a"), Product::new(2, "b").with_volume(10)];
        let before = products.clone();

        let _ = rank(&products);
        assert_eq!(products, before);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            // Small value ranges force plenty of ties.
            prop::collection::vec((0i64..4, 0i64..3), 0..60).prop_map(|fields| {
                fields
                    .into_iter()
                    .enumerate()
                    .map(|(i, (volume, rating))| {
                        Product::new(i as i64, format!("p{i}"))
                            .with_volume(volume * 10)
                            .with_rating(rating * 50)
                    })
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: ranking an already ranked sequence changes nothing.
            #[test]
            fn rank_is_idempotent(products in arb_products()) {
                let once = rank_products(&products);
                let twice = rank_products(once.iter().copied());
                prop_assert_eq!(once, twice);
            }

            /// Property: equal scores keep their relative input order.
            #[test]
            fn rank_is_stable(products in arb_products()) {
                let ranked = rank(&products);
                for w in ranked.windows(2) {
                    if w[0].score == w[1].score {
                        let a = products.iter().position(|p| p.id == w[0].product.id);
                        let b = products.iter().position(|p| p.id == w[1].product.id);
                        prop_assert!(a < b);
                    }
                }
            }

            /// Property: ranking is a permutation of the input.
            #[test]
            fn rank_preserves_membership(products in arb_products()) {
                let ranked = rank(&products);
                prop_assert_eq!(ranked.len(), products.len());
                for p in &products {
                    prop_assert!(ranked.iter().any(|r| r.product.id == p.id));
                }
            }
        }
    }
}
