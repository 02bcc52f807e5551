//! Product Detail Page

use leptos::prelude::*;

use crate::catalog::find_product;
use crate::components::{image_or_placeholder, CatalogGate};
use crate::context::use_shop;
use crate::price::won;
use crate::route::{navigate, Route};

/// Quantity typed into the stepper; anything unparsable is 1
pub fn parse_qty(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(1).max(1)
}

#[component]
pub fn ProductDetailPage(id: String) -> impl IntoView {
    let shop = use_shop();
    let (qty, set_qty) = signal(1u32);
    let id = StoredValue::new(id);

    let product = move || shop.catalog.with(|c| id.with_value(|id| find_product(c.products(), id).cloned()));

    view! {
        <CatalogGate>
            {move || match product() {
                None => view! {
                    <div class="empty">
                        <p class="muted">"상품을 찾을 수 없습니다."</p>
                        <button class="btn" on:click=move |_| navigate(&Route::Products)>"상품 목록으로"</button>
                    </div>
                }.into_any(),
                Some(p) => {
                    let product = StoredValue::new(p.clone());
                    view! {
                        <section class="product-detail">
                            <img id="product-image" src=image_or_placeholder(p.image.as_deref()) alt=p.name.clone() />
                            <div class="product-info">
                                <h1 id="product-name">{p.name.clone()}</h1>
                                <p id="product-desc" class="muted">{p.description.clone().unwrap_or_default()}</p>
                                <div id="product-price" class="price">{won(p.price)}</div>
                                <div class="stepper">
                                    <button id="dec" on:click=move |_| set_qty.update(|q| *q = q.saturating_sub(1).max(1))>"−"</button>
                                    <input
                                        id="qty"
                                        type="number"
                                        min="1"
                                        prop:value=move || qty.get().to_string()
                                        on:change=move |ev| set_qty.set(parse_qty(&event_target_value(&ev)))
                                    />
                                    <button id="inc" on:click=move |_| set_qty.update(|q| *q += 1)>"+"</button>
                                </div>
                                <button
                                    id="add-to-cart"
                                    class="btn primary"
                                    on:click=move |_| {
                                        let n = qty.get_untracked();
                                        product.with_value(|p| shop.update_cart(|cart| cart.add(p, n)));
                                        shop.toast_ok("장바구니에 담았습니다.");
                                    }
                                >
                                    "장바구니 담기"
                                </button>
                            </div>
                        </section>
                    }.into_any()
                }
            }}
        </CatalogGate>
    }
}
