//! Price aggregation and expiration-based discounting.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use warehouse_core::{DomainResult, ProductId, checked_product, checked_sum, round_currency};
use warehouse_inventory::SharedProduct;
use warehouse_products::{Category, Product};

const EXPIRES_TODAY: Decimal = Decimal::from_parts(50, 0, 0, false, 2);
const EXPIRES_TOMORROW: Decimal = Decimal::from_parts(70, 0, 0, false, 2);
const EXPIRES_SOON: Decimal = Decimal::from_parts(85, 0, 0, false, 2);

/// Weighted average price per category.
///
/// Within a category, Shippable members with a strictly positive weight
/// contribute `price × weight`; the sum is divided by their total weight. A
/// category without any such member falls back to the plain mean price of all
/// its members. Both paths round to two decimals, half-up.
///
/// Fails when an intermediate sum or `price × weight` leaves the decimal range.
pub fn weighted_average_price_by_category(
    products: &[SharedProduct],
) -> DomainResult<HashMap<Category, Decimal>> {
    let mut by_category: HashMap<&Category, Vec<&SharedProduct>> = HashMap::new();
    for product in products {
        by_category.entry(product.category()).or_default().push(product);
    }

    by_category
        .into_iter()
        .map(|(category, items)| Ok((category.clone(), category_average(&items)?)))
        .collect()
}

fn category_average(items: &[&SharedProduct]) -> DomainResult<Decimal> {
    let weighted: Vec<(Decimal, Decimal)> = items
        .iter()
        .filter_map(|p| {
            let weight = p.as_shippable().and_then(|s| s.weight())?;
            (weight > Decimal::ZERO).then_some((p.price(), weight))
        })
        .collect();

    if !weighted.is_empty() {
        let weighted_sum = checked_sum(
            weighted
                .iter()
                .map(|(price, weight)| checked_product(*price, *weight, "Weighted price"))
                .collect::<DomainResult<Vec<_>>>()?,
            "Weighted price sum",
        )?;
        let weight_sum = checked_sum(weighted.iter().map(|(_, weight)| *weight), "Category weight")?;
        return Ok(round_currency(weighted_sum / weight_sum));
    }

    // Groups are built from at least one product, so `len` is never zero.
    let total = checked_sum(items.iter().map(|p| p.price()), "Category price sum")?;
    Ok(round_currency(total / Decimal::from(items.len())))
}

/// Price multiplier for an item expiring in `days_until_expiry` days.
///
/// `None` means no discount (already expired, or four days or more away).
pub fn discount_multiplier(days_until_expiry: i64) -> Option<Decimal> {
    match days_until_expiry {
        0 => Some(EXPIRES_TODAY),
        1 => Some(EXPIRES_TOMORROW),
        2..=3 => Some(EXPIRES_SOON),
        _ => None,
    }
}

/// Discounted price for every product in the snapshot.
///
/// Only items that are both perishable and shippable (the food kind's
/// capability signature) are eligible. Discounted prices are rounded to two
/// decimals; everything else keeps its current price untouched.
pub fn expiration_discounts(
    products: &[SharedProduct],
    today: NaiveDate,
) -> HashMap<ProductId, Decimal> {
    products
        .iter()
        .map(|product| (product.id(), discounted_price(product.as_ref(), today)))
        .collect()
}

fn discounted_price(product: &dyn Product, today: NaiveDate) -> Decimal {
    let multiplier = discount_eligible_expiry(product)
        .map(|expires| (expires - today).num_days())
        .and_then(discount_multiplier);

    match multiplier {
        Some(multiplier) => round_currency(product.price() * multiplier),
        None => product.price(),
    }
}

fn discount_eligible_expiry(product: &dyn Product) -> Option<NaiveDate> {
    product.as_shippable()?;
    product.as_perishable()?.expiration_date()
}
