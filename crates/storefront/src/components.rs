//! Shared Storefront Components

use leptos::prelude::*;

use crate::config::IMG_PLACEHOLDER;
use crate::context::{use_shop, Catalog};
use crate::models::Product;
use crate::price::won;
use crate::route::Route;

pub fn image_or_placeholder(image: Option<&str>) -> String {
    image
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(IMG_PLACEHOLDER)
        .to_string()
}

#[component]
pub fn Header() -> impl IntoView {
    let shop = use_shop();

    view! {
        <header class="header">
            <a class="logo" href=Route::Home.hash()>"SHOP"</a>
            <nav>
                <a href=Route::Products.hash()>"상품"</a>
                <a href=Route::Cart.hash()>
                    "장바구니 "
                    <span id="cart-count" class="badge">{move || shop.cart.with(|c| c.count())}</span>
                </a>
            </nav>
        </header>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let url = Route::Product(product.id.clone()).hash();
    let img = image_or_placeholder(product.image.as_deref());

    view! {
        <article class="card">
            <a href=url.clone()>
                <img src=img alt=product.name.clone() loading="lazy" />
            </a>
            <div class="card-body">
                <div class="card-title">{product.name.clone()}</div>
                <div class="muted">{product.category.clone()}</div>
                <div class="card-price">{won(product.price)}</div>
                <a class="btn" href=url>"자세히 보기"</a>
            </div>
        </article>
    }
}

/// Renders `children` once the catalog is ready, a status line otherwise
#[component]
pub fn CatalogGate(children: ChildrenFn) -> impl IntoView {
    let shop = use_shop();

    move || match shop.catalog.get() {
        Catalog::Loading => view! { <p class="muted">"불러오는 중…"</p> }.into_any(),
        Catalog::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
        Catalog::Ready(_) => children().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_or_placeholder() {
        assert_eq!(image_or_placeholder(Some("a.jpg")), "a.jpg");
        assert_eq!(image_or_placeholder(Some(" ")), IMG_PLACEHOLDER);
        assert_eq!(image_or_placeholder(None), IMG_PLACEHOLDER);
    }
}
