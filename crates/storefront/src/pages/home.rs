//! Home Page

use leptos::prelude::*;

use crate::catalog::new_arrivals;
use crate::components::{CatalogGate, ProductCard};
use crate::context::use_shop;
use crate::route::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let shop = use_shop();

    view! {
        <section class="hero">
            <h1>"새로 들어온 상품"</h1>
            <a class="btn" href=Route::Products.hash()>"전체 상품 보기"</a>
        </section>
        <CatalogGate>
            <div id="new-arrivals-grid" class="grid">
                {move || shop.catalog.with(|c| new_arrivals(c.products()))
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product /> })
                    .collect_view()}
            </div>
        </CatalogGate>
    }
}
