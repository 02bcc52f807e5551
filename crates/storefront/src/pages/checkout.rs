//! Checkout Page

use leptos::prelude::*;

use crate::cart::Cart;
use crate::context::use_shop;
use crate::pages::cart::Summary;
use crate::price::won;
use crate::route::{navigate, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// All three fields are required
pub fn validate_order(name: &str, phone: &str, address: &str) -> Result<Order, &'static str> {
    let (name, phone, address) = (name.trim(), phone.trim(), address.trim());
    if name.is_empty() || phone.is_empty() || address.is_empty() {
        return Err("필수 정보를 입력하세요.");
    }
    Ok(Order {
        name: name.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
    })
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let shop = use_shop();

    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (error, set_error) = signal(None::<&'static str>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if shop.cart.with_untracked(|c| c.is_empty()) {
            set_error.set(Some("장바구니가 비었습니다."));
            return;
        }
        match validate_order(&name.get_untracked(), &phone.get_untracked(), &address.get_untracked()) {
            Ok(order) => {
                log::info!("order placed for {} ({} items)", order.name, shop.cart.with_untracked(|c| c.count()));
                shop.empty_cart();
                shop.toast_ok("주문이 완료되었습니다. 감사합니다!");
                navigate(&Route::Home);
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    view! {
        <h1>"주문하기"</h1>
        <div id="checkout-summary">
            {move || {
                let cart = shop.cart.get();
                if cart.is_empty() {
                    return view! { <p class="muted">"장바구니가 비었습니다."</p> }.into_any();
                }
                let totals = shop.catalog.with(|c| cart.totals(c.products()));
                let lines = shop.catalog.with(|c| {
                    cart.lines()
                        .iter()
                        .map(|l| {
                            let line_total = Cart::unit_price(l, c.products()) * u64::from(l.qty);
                            format!("{} × {} = {}", l.name, l.qty, won(line_total))
                        })
                        .collect::<Vec<_>>()
                });
                view! {
                    {lines.into_iter().map(|text| view! { <div>{text}</div> }).collect_view()}
                    <hr />
                    <Summary totals=totals />
                }.into_any()
            }}
        </div>
        <form class="checkout-form" on:submit=submit>
            <label>
                "이름"
                <input id="name" type="text" on:input=move |ev| set_name.set(event_target_value(&ev)) prop:value=move || name.get() />
            </label>
            <label>
                "연락처"
                <input id="phone" type="tel" on:input=move |ev| set_phone.set(event_target_value(&ev)) prop:value=move || phone.get() />
            </label>
            <label>
                "주소"
                <input id="address" type="text" on:input=move |ev| set_address.set(event_target_value(&ev)) prop:value=move || address.get() />
            </label>
            {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
            <button type="submit" class="btn primary">"결제 완료"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_order() {
        let order = validate_order(" 홍길동 ", "010-0000-0000", "서울").unwrap();
        assert_eq!(order.name, "홍길동");
        assert_eq!(validate_order("홍길동", " ", "서울"), Err("필수 정보를 입력하세요."));
    }
}
