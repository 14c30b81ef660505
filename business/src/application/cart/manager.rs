use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartLine, QuantityChange};
use crate::domain::cart::repository::CartStore;
use crate::domain::catalog::model::Product;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
enum SnapshotError {
    #[error("{0}")]
    Unreadable(#[from] RepositoryError),
    #[error("{0}")]
    Invalid(#[from] CartError),
}

/// Owns the shopping cart for one running instance.
///
/// Every mutation is written through to the [`CartStore`]. Storage failures
/// never reach the caller: a bad snapshot yields an empty cart and a failed
/// write leaves the cart working in memory.
pub struct CartManager {
    cart: Cart,
    store: Arc<dyn CartStore>,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Logger>,
}

impl CartManager {
    /// Rehydrates the cart from the store, or starts empty.
    pub fn load(
        store: Arc<dyn CartStore>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let cart = match Self::read_snapshot(store.as_ref()) {
            Ok(cart) => cart,
            Err(e) => {
                logger.warn(&format!("Discarding saved cart, starting empty: {}", e));
                Cart::new()
            }
        };

        logger.info(&format!(
            "Cart loaded with {} lines ({} items)",
            cart.lines().len(),
            cart.item_count()
        ));

        Self {
            cart,
            store,
            notifier,
            logger,
        }
    }

    fn read_snapshot(store: &dyn CartStore) -> Result<Cart, SnapshotError> {
        match store.load()? {
            Some(lines) => Ok(Cart::from_lines(lines)?),
            None => Ok(Cart::new()),
        }
    }

    pub fn add_item(&mut self, product: &Product) {
        let quantity = self.cart.add(product).quantity;
        self.logger
            .debug(&format!("Cart line {} now at quantity {}", product.id, quantity));

        self.persist();
        self.notifier
            .success(&format!("{} added to cart", product.name));
    }

    pub fn remove_item(&mut self, id: &ProductId) {
        if self.cart.remove(id) {
            self.logger.debug(&format!("Cart line {} removed", id));
        }
        self.persist();
    }

    /// Quantities below 1 behave exactly like [`CartManager::remove_item`].
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity < 1 {
            self.remove_item(id);
            return;
        }

        if self.cart.set_quantity(id, quantity) == QuantityChange::Updated {
            self.logger
                .debug(&format!("Cart line {} set to quantity {}", id, quantity));
        }
        self.persist();
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.logger.info("Cart cleared");
        self.persist();
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.cart.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(self.cart.lines()) {
            self.logger
                .error(&format!("Failed to persist cart, keeping it in memory: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use mockall::mock;

    mock! {
        pub Store {}

        impl CartStore for Store {
            fn load(&self) -> Result<Option<Vec<CartLine>>, RepositoryError>;
            fn save(&self, lines: &[CartLine]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Notify {}

        impl Notifier for Notify {
            fn success(&self, message: &str);
            fn error(&self, message: &str);
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn debug(&self, message: &str);
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
        }
    }

    fn quiet_logger() -> MockLog {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger
    }

    fn mock_notifier() -> Arc<dyn Notifier> {
        let mut notifier = MockNotify::new();
        notifier.expect_success().returning(|_| ());
        notifier.expect_error().returning(|_| ());
        Arc::new(notifier)
    }

    fn empty_store() -> MockStore {
        let mut store = MockStore::new();
        store.expect_load().returning(|| Ok(None));
        store
    }

    /// Keeps the snapshot as JSON text, the way the device store does.
    #[derive(Default)]
    struct MemoryStore {
        snapshot: Mutex<Option<String>>,
    }

    impl CartStore for MemoryStore {
        fn load(&self) -> Result<Option<Vec<CartLine>>, RepositoryError> {
            let snapshot = self.snapshot.lock().unwrap();
            match snapshot.as_deref() {
                Some(json) => serde_json::from_str(json)
                    .map(Some)
                    .map_err(|_| RepositoryError::Corrupted),
                None => Ok(None),
            }
        }

        fn save(&self, lines: &[CartLine]) -> Result<(), RepositoryError> {
            let json = serde_json::to_string(lines).map_err(|_| RepositoryError::Persistence)?;
            *self.snapshot.lock().unwrap() = Some(json);
            Ok(())
        }
    }

    fn product(id: &str, name: &str, cents: i64) -> Product {
        Product {
            id: ProductId::from(id),
            name: name.to_string(),
            description: format!("{} description", name),
            price: Decimal::new(cents, 2),
            original_price: Some(Decimal::new(cents + 100, 2)),
            image: format!("/img/{}.png", id),
            category: "dairy".to_string(),
            in_stock: true,
            rating: 4.2,
            review_count: 17,
        }
    }

    #[test]
    fn should_start_empty_when_nothing_saved() {
        let manager = CartManager::load(
            Arc::new(empty_store()),
            mock_notifier(),
            Arc::new(quiet_logger()),
        );

        assert!(manager.is_empty());
        assert_eq!(manager.item_count(), 0);
        assert_eq!(manager.total(), Decimal::ZERO);
    }

    #[test]
    fn should_rehydrate_saved_lines() {
        let saved = {
            let mut cart = Cart::new();
            cart.add(&product("milk", "Milk", 120));
            cart.add(&product("milk", "Milk", 120));
            cart.lines().to_vec()
        };
        let mut store = MockStore::new();
        store.expect_load().returning(move || Ok(Some(saved.clone())));

        let manager = CartManager::load(Arc::new(store), mock_notifier(), Arc::new(quiet_logger()));

        assert_eq!(manager.item_count(), 2);
        assert_eq!(manager.total(), Decimal::new(240, 2));
    }

    #[test]
    fn should_fall_back_to_empty_and_warn_when_snapshot_corrupted() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|| Err(RepositoryError::Corrupted));
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().times(1).returning(|_| ());

        let manager = CartManager::load(Arc::new(store), mock_notifier(), Arc::new(logger));

        assert!(manager.is_empty());
    }

    #[test]
    fn should_fall_back_to_empty_when_snapshot_breaks_invariants() {
        let line = {
            let mut cart = Cart::new();
            cart.add(&product("a", "A", 100));
            cart.lines()[0].clone()
        };
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(move || Ok(Some(vec![line.clone(), line.clone()])));

        let manager = CartManager::load(Arc::new(store), mock_notifier(), Arc::new(quiet_logger()));

        assert!(manager.is_empty());
    }

    #[test]
    fn should_persist_and_notify_when_adding() {
        let mut store = empty_store();
        store
            .expect_save()
            .withf(|lines| lines.len() == 1 && lines[0].quantity == 1)
            .times(1)
            .returning(|_| Ok(()));
        let mut notifier = MockNotify::new();
        notifier
            .expect_success()
            .withf(|message| message.contains("Greek Yogurt added to cart"))
            .times(1)
            .returning(|_| ());

        let mut manager =
            CartManager::load(Arc::new(store), Arc::new(notifier), Arc::new(quiet_logger()));
        manager.add_item(&product("yog", "Greek Yogurt", 349));

        assert_eq!(manager.item_count(), 1);
    }

    #[test]
    fn should_keep_working_in_memory_when_save_fails() {
        let mut store = empty_store();
        store
            .expect_save()
            .returning(|_| Err(RepositoryError::Persistence));
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger.expect_error().times(2).returning(|_| ());

        let mut manager = CartManager::load(Arc::new(store), mock_notifier(), Arc::new(logger));
        manager.add_item(&product("a", "A", 100));
        manager.add_item(&product("a", "A", 100));

        assert_eq!(manager.item_count(), 2);
    }

    #[test]
    fn should_write_after_every_mutation() {
        let mut store = empty_store();
        store.expect_save().times(5).returning(|_| Ok(()));

        let mut manager =
            CartManager::load(Arc::new(store), mock_notifier(), Arc::new(quiet_logger()));
        manager.add_item(&product("a", "A", 100));
        manager.update_quantity(&ProductId::from("a"), 3);
        manager.remove_item(&ProductId::from("missing"));
        manager.update_quantity(&ProductId::from("a"), 0);
        manager.clear_cart();

        assert!(manager.is_empty());
    }

    #[test]
    fn should_treat_non_positive_quantity_as_removal() {
        for quantity in [0, -5] {
            let store = Arc::new(MemoryStore::default());
            let mut manager =
                CartManager::load(store.clone(), mock_notifier(), Arc::new(quiet_logger()));
            manager.add_item(&product("a", "A", 100));
            manager.add_item(&product("b", "B", 200));

            manager.update_quantity(&ProductId::from("a"), quantity);

            assert!(manager.get(&ProductId::from("a")).is_none());
            assert_eq!(manager.lines().len(), 1);
            assert_eq!(store.load().unwrap().unwrap().len(), 1);
        }
    }

    #[test]
    fn should_update_quantity_and_totals() {
        let mut manager = CartManager::load(
            Arc::new(MemoryStore::default()),
            mock_notifier(),
            Arc::new(quiet_logger()),
        );
        manager.add_item(&product("a", "A", 250));
        manager.add_item(&product("b", "B", 100));

        manager.update_quantity(&ProductId::from("a"), 4);

        assert_eq!(manager.item_count(), 5);
        assert_eq!(manager.total(), Decimal::new(1100, 2));
    }

    #[test]
    fn should_ignore_update_of_absent_product() {
        let mut manager = CartManager::load(
            Arc::new(MemoryStore::default()),
            mock_notifier(),
            Arc::new(quiet_logger()),
        );
        manager.add_item(&product("a", "A", 250));

        manager.update_quantity(&ProductId::from("zzz"), 7);

        assert_eq!(manager.item_count(), 1);
    }

    #[test]
    fn should_reload_identical_lines_from_same_store() {
        let store = Arc::new(MemoryStore::default());
        let mut first =
            CartManager::load(store.clone(), mock_notifier(), Arc::new(quiet_logger()));
        first.add_item(&product("a", "A", 250));
        first.add_item(&product("b", "B", 1999));
        first.add_item(&product("a", "A", 250));

        let second = CartManager::load(store, mock_notifier(), Arc::new(quiet_logger()));

        assert_eq!(second.lines(), first.lines());
        assert_eq!(second.total(), first.total());
    }

    #[test]
    fn should_start_empty_when_saved_json_is_garbage() {
        let store = Arc::new(MemoryStore::default());
        *store.snapshot.lock().unwrap() = Some("{not json".to_string());

        let manager = CartManager::load(store, mock_notifier(), Arc::new(quiet_logger()));

        assert!(manager.is_empty());
    }

    #[test]
    fn should_persist_empty_list_when_cleared() {
        let store = Arc::new(MemoryStore::default());
        let mut manager =
            CartManager::load(store.clone(), mock_notifier(), Arc::new(quiet_logger()));
        manager.add_item(&product("a", "A", 250));

        manager.clear_cart();

        assert_eq!(store.load().unwrap(), Some(vec![]));
    }
}
