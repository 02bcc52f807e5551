//! Product List Page
//!
//! Search by name, filter by category, sort by price.

use leptos::prelude::*;

use crate::catalog::{categories, filter_products, SortOrder};
use crate::components::{CatalogGate, ProductCard};
use crate::context::use_shop;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let shop = use_shop();

    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (sort, set_sort) = signal(SortOrder::Recent);

    let filtered = move || {
        shop.catalog
            .with(|c| filter_products(c.products(), &search.get(), &category.get(), sort.get()))
    };

    view! {
        <section class="filters">
            <input
                id="search"
                type="search"
                placeholder="상품명 검색"
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            <select id="category" on:input=move |ev| set_category.set(event_target_value(&ev))>
                <option value="">"전체 카테고리"</option>
                {move || shop.catalog.with(|c| categories(c.products()))
                    .into_iter()
                    .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                    .collect_view()}
            </select>
            <select
                id="sort"
                on:input=move |ev| set_sort.set(event_target_value(&ev).parse().unwrap_or_default())
            >
                {SortOrder::ALL.iter().map(|order| view! {
                    <option value=order.as_str()>{order.label()}</option>
                }).collect_view()}
            </select>
        </section>
        <CatalogGate>
            {move || {
                let list = filtered();
                if list.is_empty() {
                    return view! { <p class="muted">"조건에 맞는 상품이 없습니다."</p> }.into_any();
                }
                view! {
                    <div id="products-grid" class="grid">
                        {list.into_iter().map(|product| view! { <ProductCard product=product /> }).collect_view()}
                    </div>
                }.into_any()
            }}
        </CatalogGate>
    }
}
