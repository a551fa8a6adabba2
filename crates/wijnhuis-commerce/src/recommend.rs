//! Product recommendations.
//!
//! Two entry points: suggestions scored against the wines already in
//! the cart, and a fallback for an empty cart based on recently viewed
//! or featured wines. Scoring is additive and deliberately simple; ties
//! keep catalog order so the result is stable between renders.

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;

/// Score a candidate against the wines already in the cart.
fn affinity(candidate: &Product, in_cart: &[&Product]) -> i32 {
    let mut score = 0;
    if in_cart.iter().any(|p| p.region == candidate.region) {
        score += 3;
    }
    if in_cart.iter().any(|p| p.wine_type == candidate.wine_type) {
        score += 2;
    }
    if candidate.is_featured {
        score += 2;
    }
    if candidate.is_on_sale() {
        score += 1;
    }
    if candidate.rating.is_some_and(|r| r >= 4.5) {
        score += 1;
    }
    score
}

/// Wines to suggest next to a non-empty cart.
///
/// In-stock wines not already in the cart, ranked by affinity with the
/// cart's contents. Stable: equal scores keep catalog order.
pub fn suggested_products(
    catalog: &Catalog,
    cart_product_ids: &[ProductId],
    limit: usize,
) -> Vec<Product> {
    let in_cart: Vec<&Product> = catalog
        .iter()
        .filter(|p| cart_product_ids.contains(&p.id))
        .collect();

    let mut scored: Vec<(i32, &Product)> = catalog
        .iter()
        .filter(|p| p.in_stock && !cart_product_ids.contains(&p.id))
        .map(|p| (affinity(p, &in_cart), p))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, p)| p.clone()).collect()
}

/// Suggestions for an empty cart.
///
/// With at least two in-stock recently viewed wines, show those (most
/// recent first); otherwise fall back to featured wines ranked by
/// review count.
pub fn empty_cart_suggestions(
    catalog: &Catalog,
    recently_viewed: &[ProductId],
    limit: usize,
) -> Vec<Product> {
    let viewed: Vec<Product> = recently_viewed
        .iter()
        .rev()
        .filter_map(|id| catalog.by_id(id))
        .filter(|p| p.in_stock)
        .cloned()
        .collect();

    if viewed.len() >= 2 {
        return viewed.into_iter().take(limit).collect();
    }

    let mut featured: Vec<&Product> = catalog
        .iter()
        .filter(|p| p.in_stock && p.is_featured)
        .collect();
    featured.sort_by(|a, b| b.review_count.cmp(&a.review_count));
    featured.into_iter().take(limit).map(Product::clone).collect()
}
