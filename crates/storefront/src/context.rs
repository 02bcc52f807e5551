//! Storefront Context
//!
//! Catalog and cart signals shared by every page.

use leptos::prelude::*;
use leptos_overlay::{show_toast, ToastKind, ToastSignals, TOAST_MS};

use crate::cart::Cart;
use crate::models::Product;
use crate::storage::{clear_cart, save_cart, LocalStorage};

#[derive(Clone, Debug, PartialEq)]
pub enum Catalog {
    Loading,
    Failed(String),
    Ready(Vec<Product>),
}

impl Catalog {
    pub fn products(&self) -> &[Product] {
        match self {
            Catalog::Ready(list) => list,
            _ => &[],
        }
    }
}

#[derive(Clone, Copy)]
pub struct ShopContext {
    pub catalog: RwSignal<Catalog>,
    pub cart: RwSignal<Cart>,
    pub toast: ToastSignals,
}

impl ShopContext {
    /// Mutate the cart and persist the result
    pub fn update_cart(&self, f: impl FnOnce(&mut Cart)) {
        self.cart.update(f);
        if let Err(e) = self.cart.with_untracked(|cart| save_cart(&LocalStorage, cart)) {
            log::warn!("{}", e);
            self.toast_warn(e.user_message());
        }
    }

    pub fn empty_cart(&self) {
        self.cart.update(Cart::clear);
        if let Err(e) = clear_cart(&LocalStorage) {
            log::warn!("{}", e);
        }
    }

    pub fn toast_ok(&self, message: impl Into<String>) {
        show_toast(&self.toast, message, ToastKind::Ok, TOAST_MS);
    }

    pub fn toast_warn(&self, message: impl Into<String>) {
        show_toast(&self.toast, message, ToastKind::Warn, TOAST_MS);
    }
}

pub fn use_shop() -> ShopContext {
    use_context::<ShopContext>().expect("ShopContext should be provided")
}
