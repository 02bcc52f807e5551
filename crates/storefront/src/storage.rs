//! Cart Persistence
//!
//! The cart is stored as a JSON array under a single local-storage key.

use crate::cart::Cart;
use crate::config::CART_KEY;
use crate::error::{StoreError, StoreResult};
use crate::models::CartLine;

/// Raw string storage for the cart JSON
pub trait CartStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// The browser's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StoreResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| StoreError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Storage("localStorage disabled".to_string()))
    }
}

impl CartStorage for LocalStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }
}

/// Missing, unreadable or corrupt data reads as an empty cart
pub fn load_cart(storage: &impl CartStorage) -> Cart {
    let raw = match storage.read(CART_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::default(),
        Err(e) => {
            log::warn!("cart read failed: {}", e);
            return Cart::default();
        }
    };
    match serde_json::from_str::<Vec<CartLine>>(&raw) {
        Ok(lines) => Cart::from_lines(lines),
        Err(e) => {
            log::warn!("discarding corrupt cart: {}", e);
            Cart::default()
        }
    }
}

pub fn save_cart(storage: &impl CartStorage, cart: &Cart) -> StoreResult<()> {
    let json = serde_json::to_string(cart.lines()).map_err(|e| StoreError::Storage(e.to_string()))?;
    storage.write(CART_KEY, &json)
}

pub fn clear_cart(storage: &impl CartStorage) -> StoreResult<()> {
    storage.remove(CART_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        items: RefCell<HashMap<String, String>>,
    }

    impl CartStorage for MemoryStorage {
        fn read(&self, key: &str) -> StoreResult<Option<String>> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> StoreResult<()> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> StoreResult<()> {
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }

    fn product(id: &str, price: u64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("상품 {}", id),
            price,
            category: String::new(),
            image: None,
            description: None,
        }
    }

    #[test]
    fn test_storage_round_trip() {
        let storage = MemoryStorage::default();
        assert!(load_cart(&storage).is_empty());

        let mut cart = Cart::default();
        cart.add(&product("7", 2500), 4);
        save_cart(&storage, &cart).unwrap();
        assert_eq!(load_cart(&storage), cart);

        clear_cart(&storage).unwrap();
        assert!(load_cart(&storage).is_empty());
    }

    #[test]
    fn test_corrupt_storage_reads_empty() {
        let storage = MemoryStorage::default();
        storage.write(CART_KEY, "{not json").unwrap();
        assert!(load_cart(&storage).is_empty());
    }

    #[test]
    fn test_legacy_numeric_ids() {
        let storage = MemoryStorage::default();
        storage
            .write(CART_KEY, r#"[{"id": 3, "name": "수건", "price": 5000, "image": null, "qty": 2}]"#)
            .unwrap();
        let cart = load_cart(&storage);
        assert_eq!(cart.lines()[0].id, "3");
        assert_eq!(cart.count(), 2);
    }
}
