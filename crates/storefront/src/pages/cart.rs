//! Cart Page

use leptos::prelude::*;

use crate::cart::{Cart, Totals};
use crate::components::image_or_placeholder;
use crate::context::use_shop;
use crate::models::CartLine;
use crate::price::won;
use crate::route::Route;

#[component]
pub fn Summary(totals: Totals) -> impl IntoView {
    view! {
        <div class="summary">
            <div>"상품금액: " <strong>{won(totals.subtotal)}</strong></div>
            <div>"배송비: " <strong>{won(totals.shipping)}</strong></div>
            <div>"결제금액: " <strong>{won(totals.total)}</strong></div>
        </div>
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    let shop = use_shop();

    let row = move |line: CartLine, unit: u64, image: String| {
        let (dec_id, inc_id, remove_id) = (line.id.clone(), line.id.clone(), line.id.clone());
        view! {
            <div class="cart-item">
                <img src=image alt=line.name.clone() />
                <div>
                    <div class="cart-item-title">{line.name.clone()}</div>
                    <div class="muted">{format!("{} × {}", won(unit), line.qty)}</div>
                    <div>
                        <button on:click=move |_| shop.update_cart(|c| c.dec(&dec_id))>"−"</button>
                        <button on:click=move |_| shop.update_cart(|c| c.inc(&inc_id))>"＋"</button>
                        <button on:click=move |_| shop.update_cart(|c| c.remove(&remove_id))>"삭제"</button>
                    </div>
                </div>
                <div>{won(unit * u64::from(line.qty))}</div>
            </div>
        }
    };

    view! {
        <h1>"장바구니"</h1>
        {move || {
            let cart = shop.cart.get();
            if cart.is_empty() {
                return view! { <p class="muted">"장바구니가 비었습니다."</p> }.into_any();
            }
            let (rows, totals) = shop.catalog.with(|c| {
                let products = c.products();
                let rows = cart
                    .lines()
                    .iter()
                    .map(|line| {
                        let image = products
                            .iter()
                            .find(|p| p.id == line.id)
                            .and_then(|p| p.image.clone())
                            .or_else(|| line.image.clone());
                        (line.clone(), Cart::unit_price(line, products), image_or_placeholder(image.as_deref()))
                    })
                    .collect::<Vec<_>>();
                (rows, cart.totals(products))
            });
            view! {
                <div id="cart-items">
                    {rows.into_iter().map(|(line, unit, image)| row(line, unit, image)).collect_view()}
                </div>
                <div id="cart-summary">
                    <Summary totals=totals />
                    <a class="btn primary" href=Route::Checkout.hash()>"주문하기"</a>
                </div>
            }.into_any()
        }}
    }
}
