//! Weight-bounded shipping groups (first-fit-decreasing).

use std::sync::Arc;

use rust_decimal::Decimal;

use warehouse_core::{DomainError, DomainResult, checked_sum};
use warehouse_inventory::SharedProduct;

/// A batch of shippable products sent together.
#[derive(Debug, Clone)]
pub struct ShippingGroup {
    products: Vec<SharedProduct>,
    total_weight: Decimal,
    total_shipping_cost: Decimal,
}

impl ShippingGroup {
    /// Build a group and compute its totals. Unknown weights are skipped.
    pub fn new(products: Vec<SharedProduct>) -> DomainResult<Self> {
        let total_weight = checked_sum(
            products
                .iter()
                .filter_map(|p| p.as_shippable().and_then(|s| s.weight())),
            "Group weight",
        )?;
        let total_shipping_cost = total_shipping_cost(&products)?;

        Ok(Self {
            products,
            total_weight,
            total_shipping_cost,
        })
    }

    pub fn products(&self) -> &[SharedProduct] {
        &self.products
    }

    pub fn total_weight(&self) -> Decimal {
        self.total_weight
    }

    pub fn total_shipping_cost(&self) -> Decimal {
        self.total_shipping_cost
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Sum of every shippable product's own shipping quote.
pub fn total_shipping_cost(products: &[SharedProduct]) -> DomainResult<Decimal> {
    checked_sum(
        products
            .iter()
            .filter_map(|p| p.as_shippable().map(|s| s.shipping_cost())),
        "Shipping cost",
    )
}

/// Pack the shippable products into groups of at most `max_weight_per_group`.
///
/// Items are sorted by weight, heaviest first (stable, so equal weights keep
/// snapshot order), then each goes into the first group it fits in, or opens a
/// new one. An item heavier than the cap ends up alone in its own group.
/// Unknown weights count as zero.
pub fn pack_shipping_groups(
    products: &[SharedProduct],
    max_weight_per_group: Decimal,
) -> DomainResult<Vec<ShippingGroup>> {
    if max_weight_per_group <= Decimal::ZERO {
        return Err(DomainError::invalid_argument(
            "Max weight per group must be positive.",
        ));
    }

    let mut items: Vec<(&SharedProduct, Decimal)> = products
        .iter()
        .filter_map(|p| {
            p.as_shippable()
                .map(|s| (p, s.weight().unwrap_or(Decimal::ZERO)))
        })
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));

    let mut bins: Vec<(Vec<SharedProduct>, Decimal)> = Vec::new();
    for (product, weight) in items {
        match bins
            .iter_mut()
            .find(|(_, load)| {
                load.checked_add(weight)
                    .is_some_and(|total| total <= max_weight_per_group)
            })
        {
            Some((members, load)) => {
                members.push(Arc::clone(product));
                *load += weight; // fits: checked by `find`
            }
            None => bins.push((vec![Arc::clone(product)], weight)),
        }
    }

    bins.into_iter()
        .map(|(members, _)| ShippingGroup::new(members))
        .collect()
}
