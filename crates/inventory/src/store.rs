use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use warehouse_core::{DomainError, DomainResult, ProductId};
use warehouse_products::{Category, Product};

/// Immutable, shareable handle to a stored product.
///
/// Stored products are never mutated in place: a price update swaps in a new
/// `Arc`, so handles already given out keep the values they were read with.
pub type SharedProduct = Arc<dyn Product>;

/// In-memory warehouse: the authoritative id → product mapping.
///
/// The map sits behind an `RwLock`; each mutation is atomic and every read
/// returns an owned snapshot. Snapshots iterate in ascending `ProductId` order.
#[derive(Debug)]
pub struct Warehouse {
    name: String,
    products: RwLock<BTreeMap<ProductId, SharedProduct>>,
}

impl Warehouse {
    pub const DEFAULT_NAME: &'static str = "DefaultWarehouse";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a product, replacing any existing entry with the same id.
    pub fn add<P: Product + 'static>(&self, product: P) {
        self.add_shared(Arc::new(product));
    }

    /// Like [`add`](Self::add), for products that are already shared.
    pub fn add_shared(&self, product: SharedProduct) {
        let id = product.id();
        let replaced = self.write().insert(id, product).is_some();
        tracing::debug!(warehouse = %self.name, product_id = %id, replaced, "product added");
    }

    /// Remove a product. Removing an unknown id is a no-op and returns `None`.
    pub fn remove(&self, id: ProductId) -> Option<SharedProduct> {
        let removed = self.write().remove(&id);
        tracing::debug!(
            warehouse = %self.name,
            product_id = %id,
            found = removed.is_some(),
            "product removed"
        );
        removed
    }

    pub fn get(&self, id: ProductId) -> Option<SharedProduct> {
        self.read().get(&id).cloned()
    }

    /// Point-in-time snapshot of every product.
    pub fn all(&self) -> Vec<SharedProduct> {
        self.read().values().cloned().collect()
    }

    /// Change the price of an existing product.
    ///
    /// Fails with `NotFound` for an unknown id and with `InvalidArgument` for a
    /// negative price; in both cases the store is left unchanged.
    pub fn update_price(&self, id: ProductId, new_price: Decimal) -> DomainResult<()> {
        let mut products = self.write();
        let current = products
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("Product not found with id: {id}")))?;

        let old_price = current.price();
        let mut updated = current.boxed_clone();
        updated.set_price(new_price)?;
        products.insert(id, Arc::from(updated));

        tracing::debug!(
            warehouse = %self.name,
            product_id = %id,
            %old_price,
            %new_price,
            "product price updated"
        );
        Ok(())
    }

    /// Products grouped by category. Empty store yields an empty map.
    pub fn grouped_by_category(&self) -> HashMap<Category, Vec<SharedProduct>> {
        let mut groups: HashMap<Category, Vec<SharedProduct>> = HashMap::new();
        for product in self.read().values() {
            groups
                .entry(product.category().clone())
                .or_default()
                .push(Arc::clone(product));
        }
        groups
    }

    /// Perishable products whose expiration date is strictly before `today`.
    pub fn expired_products(&self, today: NaiveDate) -> Vec<SharedProduct> {
        self.read()
            .values()
            .filter(|p| p.as_perishable().is_some_and(|per| per.is_expired(today)))
            .cloned()
            .collect()
    }

    pub fn shippable_products(&self) -> Vec<SharedProduct> {
        self.read()
            .values()
            .filter(|p| p.as_shippable().is_some())
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.write().clear();
        tracing::debug!(warehouse = %self.name, "warehouse cleared");
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    // No critical section panics half-way, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<ProductId, SharedProduct>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<ProductId, SharedProduct>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Warehouse {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;
    use warehouse_products::{ElectronicsProduct, FoodProduct};

    fn id(n: u128) -> ProductId {
        ProductId::from_uuid(Uuid::from_u128(n))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 10)
    }

    fn food(n: u128, name: &str, price: Decimal, expires: NaiveDate) -> FoodProduct {
        FoodProduct::new(id(n), name, Category::of("Dairy").unwrap(), price, expires, dec!(1.0))
            .unwrap()
    }

    fn laptop(n: u128, price: Decimal) -> ElectronicsProduct {
        ElectronicsProduct::new(
            id(n),
            "Laptop",
            Category::of("Electronics").unwrap(),
            price,
            24,
            dec!(2.5),
        )
        .unwrap()
    }

    #[test]
    fn new_warehouse_is_empty() {
        let warehouse = Warehouse::new("TestWarehouse");
        assert!(warehouse.is_empty());
        assert_eq!(warehouse.len(), 0);
        assert_eq!(warehouse.name(), "TestWarehouse");
        assert_eq!(Warehouse::default().name(), Warehouse::DEFAULT_NAME);
    }

    #[test]
    fn add_then_get_returns_the_product() {
        let warehouse = Warehouse::default();
        warehouse.add(food(1, "Milk", dec!(10), today()));

        let stored = warehouse.get(id(1)).unwrap();
        assert_eq!(stored.name(), "Milk");
        assert_eq!(stored.price(), dec!(10));
    }

    #[test]
    fn add_with_existing_id_overwrites() {
        let warehouse = Warehouse::default();
        warehouse.add(food(1, "Milk", dec!(10), today()));
        warehouse.add(food(1, "Oat milk", dec!(12), today()));

        assert_eq!(warehouse.len(), 1);
        assert_eq!(warehouse.get(id(1)).unwrap().name(), "Oat milk");
    }

    #[test]
    fn remove_existing_product() {
        let warehouse = Warehouse::default();
        warehouse.add(food(1, "Milk", dec!(10), today()));

        let removed = warehouse.remove(id(1));
        assert_eq!(removed.map(|p| p.id()), Some(id(1)));
        assert!(warehouse.is_empty());
        assert!(warehouse.get(id(1)).is_none());
    }

    /// Removing an unknown id is deliberately silent, unlike `update_price`.
    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let warehouse = Warehouse::default();
        warehouse.add(food(1, "Milk", dec!(10), today()));

        assert!(warehouse.remove(id(99)).is_none());
        assert_eq!(warehouse.len(), 1);
    }

    #[test]
    fn get_unknown_id_is_none() {
        assert!(Warehouse::default().get(id(5)).is_none());
    }

    #[test]
    fn snapshot_is_ordered_by_id() {
        let warehouse = Warehouse::default();
        warehouse.add(laptop(3, dec!(3)));
        warehouse.add(laptop(1, dec!(1)));
        warehouse.add(laptop(2, dec!(2)));

        let ids: Vec<_> = warehouse.all().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![id(1), id(2), id(3)]);
    }

    #[test]
    fn mutating_a_snapshot_does_not_touch_the_store() {
        let warehouse = Warehouse::default();
        warehouse.add(laptop(1, dec!(1)));

        let mut snapshot = warehouse.all();
        snapshot.clear();
        assert_eq!(warehouse.len(), 1);
    }

    #[test]
    fn snapshot_keeps_prices_it_was_taken_with() {
        let warehouse = Warehouse::default();
        warehouse.add(laptop(1, dec!(100)));

        let snapshot = warehouse.all();
        warehouse.update_price(id(1), dec!(80)).unwrap();

        assert_eq!(snapshot[0].price(), dec!(100));
        assert_eq!(warehouse.get(id(1)).unwrap().price(), dec!(80));
    }

    #[test]
    fn update_price_on_unknown_id_is_not_found() {
        let warehouse = Warehouse::default();
        let err = warehouse.update_price(id(7), dec!(99.99)).unwrap_err();
        match err {
            DomainError::NotFound(msg) => assert!(msg.contains("Product not found with id:")),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn update_price_only_touches_the_target() {
        let warehouse = Warehouse::default();
        warehouse.add(laptop(1, dec!(100)));
        warehouse.add(laptop(2, dec!(200)));

        warehouse.update_price(id(1), dec!(150)).unwrap();

        assert_eq!(warehouse.get(id(1)).unwrap().price(), dec!(150));
        assert_eq!(warehouse.get(id(2)).unwrap().price(), dec!(200));
    }

    #[test]
    fn negative_price_update_leaves_store_unchanged() {
        let warehouse = Warehouse::default();
        warehouse.add(laptop(1, dec!(100)));

        let err = warehouse.update_price(id(1), dec!(-1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(warehouse.get(id(1)).unwrap().price(), dec!(100));
    }

    #[test]
    fn grouping_an_empty_store_yields_an_empty_map() {
        assert!(Warehouse::default().grouped_by_category().is_empty());
    }

    #[test]
    fn groups_products_by_category() {
        let warehouse = Warehouse::default();
        warehouse.add(food(1, "Milk", dec!(10), today()));
        warehouse.add(food(2, "Cheese", dec!(30), today()));
        warehouse.add(laptop(3, dec!(999)));

        let groups = warehouse.grouped_by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&Category::of("dairy").unwrap()].len(), 2);
        assert_eq!(groups[&Category::of("electronics").unwrap()].len(), 1);
    }

    #[test]
    fn finds_expired_perishables() {
        let warehouse = Warehouse::default();
        warehouse.add(food(1, "Fresh milk", dec!(15), date(2025, 6, 15)));
        warehouse.add(food(2, "Old milk", dec!(10), date(2025, 6, 8)));
        warehouse.add(food(3, "Today milk", dec!(10), today()));
        warehouse.add(laptop(4, dec!(9999)));

        let expired = warehouse.expired_products(today());
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].name(), "Old milk");
    }

    #[test]
    fn lists_shippable_products() {
        let warehouse = Warehouse::default();
        warehouse.add(food(1, "Milk", dec!(15), today()));
        warehouse.add(laptop(2, dec!(15000)));

        let total: Decimal = warehouse
            .shippable_products()
            .iter()
            .filter_map(|p| p.as_shippable().map(|s| s.shipping_cost()))
            .sum();
        assert_eq!(warehouse.shippable_products().len(), 2);
        assert_eq!(total, dec!(50.0) + dec!(79));
    }

    #[test]
    fn clear_empties_the_store() {
        let warehouse = Warehouse::default();
        warehouse.add(laptop(1, dec!(1)));
        warehouse.clear();
        assert!(warehouse.is_empty());
    }

    #[test]
    fn concurrent_writers_do_not_lose_products() {
        let warehouse = Arc::new(Warehouse::default());
        let handles: Vec<_> = (0..8u128)
            .map(|t| {
                let warehouse = Arc::clone(&warehouse);
                std::thread::spawn(move || {
                    for n in 0..50u128 {
                        warehouse.add(laptop(t * 1000 + n + 1, dec!(10)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(warehouse.len(), 400);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: add → get finds it; remove → get is empty.
            #[test]
            fn add_get_remove_round_trip(n in 1u128..u128::MAX, cents in 0i64..10_000_000) {
                let warehouse = Warehouse::default();
                let price = Decimal::new(cents, 2);
                warehouse.add(laptop(n, price));

                let stored = warehouse.get(id(n));
                prop_assert_eq!(stored.map(|p| p.price()), Some(price));

                warehouse.remove(id(n));
                prop_assert!(warehouse.get(id(n)).is_none());
            }

            /// Property: update on a missing id is always NotFound.
            #[test]
            fn update_on_missing_id_is_not_found(present in 1u128..1000, missing in 1000u128..2000) {
                let warehouse = Warehouse::default();
                warehouse.add(laptop(present, dec!(5)));

                let result = warehouse.update_price(id(missing), dec!(1));
                prop_assert!(matches!(result, Err(DomainError::NotFound(_))));
            }
        }
    }
}
