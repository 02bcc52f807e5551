//! Shopping Cart
//!
//! Cart lines keyed by product id and the order totals.

use crate::config::{FREE_SHIPPING_THRESHOLD, SHIPPING_FEE};
use crate::models::{CartLine, Product};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: u64,
    pub shipping: u64,
    pub total: u64,
}

pub fn shipping_for(subtotal: u64) -> u64 {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        0
    } else {
        SHIPPING_FEE
    }
}

impl Cart {
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across lines
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    fn line_mut(&mut self, id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.id == id)
    }

    /// Merge into an existing line or append a new one
    pub fn add(&mut self, product: &Product, qty: u32) {
        let qty = qty.max(1);
        match self.line_mut(&product.id) {
            Some(line) => line.qty += qty,
            None => self.lines.push(CartLine {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                image: product.image.clone(),
                qty,
            }),
        }
    }

    pub fn inc(&mut self, id: &str) {
        if let Some(line) = self.line_mut(id) {
            line.qty += 1;
        }
    }

    pub fn dec(&mut self, id: &str) {
        if let Some(line) = self.line_mut(id) {
            line.qty = line.qty.saturating_sub(1).max(1);
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current catalog price, or the price stored with the line
    pub fn unit_price(line: &CartLine, catalog: &[Product]) -> u64 {
        catalog
            .iter()
            .find(|p| p.id == line.id)
            .map(|p| p.price)
            .unwrap_or(line.price)
    }

    pub fn totals(&self, catalog: &[Product]) -> Totals {
        let subtotal = self
            .lines
            .iter()
            .map(|l| Self::unit_price(l, catalog) * u64::from(l.qty))
            .sum();
        let shipping = shipping_for(subtotal);
        Totals {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_add_merges_lines() {
        let mut cart = Cart::default();
        cart.add(&product("1", 1000), 2);
        cart.add(&product("1", 1000), 3);
        cart.add(&product("2", 500), 1);
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].qty, 5);
        assert_eq!(cart.count(), 6);
    }

    #[test]
    fn test_inc_dec_remove() {
        let mut cart = Cart::default();
        cart.add(&product("1", 1000), 1);
        cart.dec("1");
        assert_eq!(cart.lines()[0].qty, 1);
        cart.inc("1");
        cart.inc("1");
        assert_eq!(cart.count(), 3);
        cart.remove("1");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_use_current_price() {
        let mut cart = Cart::default();
        cart.add(&product("1", 10000), 2);
        cart.add(&product("gone", 7000), 1);
        // price changed in the catalog; "gone" was removed from it
        let catalog = vec![product("1", 12000)];
        let totals = cart.totals(&catalog);
        assert_eq!(totals.subtotal, 31000);
        assert_eq!(totals.shipping, SHIPPING_FEE);
        assert_eq!(totals.total, 34000);
    }

    #[test]
    fn test_free_shipping_threshold() {
        assert_eq!(shipping_for(49_999), 3_000);
        assert_eq!(shipping_for(50_000), 0);
        assert_eq!(Cart::default().totals(&[]).total, SHIPPING_FEE);
    }
}
