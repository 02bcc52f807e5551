//! Storefront App
//!
//! Loads the catalog once, restores the cart and routes on the location hash.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_overlay::{create_toast_signals, ToastHost};

use crate::catalog::fetch_products;
use crate::components::Header;
use crate::context::{Catalog, ShopContext};
use crate::pages::{CartPage, CheckoutPage, HomePage, ProductDetailPage, ProductsPage};
use crate::route::{current_route, Route};
use crate::storage::{load_cart, LocalStorage};

#[component]
pub fn App() -> impl IntoView {
    let shop = ShopContext {
        catalog: RwSignal::new(Catalog::Loading),
        cart: RwSignal::new(load_cart(&LocalStorage)),
        toast: create_toast_signals(),
    };
    provide_context(shop);

    let (route, set_route) = signal(current_route());
    let handle = window_event_listener(ev::hashchange, move |_| set_route.set(current_route()));
    on_cleanup(move || handle.remove());

    spawn_local(async move {
        match fetch_products().await {
            Ok(list) => shop.catalog.set(Catalog::Ready(list)),
            Err(e) => {
                log::error!("{}", e);
                shop.catalog.set(Catalog::Failed(e.user_message().to_string()));
            }
        }
    });

    view! {
        <Header />
        <main class="container">
            {move || match route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Products => view! { <ProductsPage /> }.into_any(),
                Route::Product(id) => view! { <ProductDetailPage id=id /> }.into_any(),
                Route::Cart => view! { <CartPage /> }.into_any(),
                Route::Checkout => view! { <CheckoutPage /> }.into_any(),
            }}
        </main>
        <ToastHost toast=shop.toast />
    }
}
