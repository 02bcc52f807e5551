//! Recommendation Modal
//!
//! Top-3 recipes for the current fridge. Opening a card shows its details.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_overlay::ModalFrame;

use crate::api;
use crate::components::{RecipeCard, RecipeDetailModal};
use crate::models::Recipe;

#[derive(Clone, Debug, PartialEq)]
enum Load {
    Loading,
    Failed,
    Ready(Vec<Recipe>),
}

#[component]
pub fn RecommendModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let (load, set_load) = signal(Load::Loading);
    let (detail, set_detail) = signal(None::<Recipe>);

    let fetch = move || {
        set_load.set(Load::Loading);
        spawn_local(async move {
            match api::recipe::recommend_top3().await {
                Ok(recipes) => {
                    log::debug!("received {} recommendations", recipes.len());
                    set_load.set(Load::Ready(recipes));
                }
                Err(e) => {
                    log::warn!("recommendation failed: {}", e);
                    set_load.set(Load::Failed);
                }
            }
        });
    };
    fetch();

    view! {
        <ModalFrame
            title="오늘의 추천 레시피".to_string()
            desc="냉장고 재료로 만들 수 있는 레시피예요.".to_string()
            on_close=on_close
            class="recommend"
        >
            {move || match load.get() {
                Load::Loading => view! { <p class="loading">"추천 중…"</p> }.into_any(),
                Load::Failed => view! {
                    <div class="empty">
                        <p>"추천을 불러오지 못했습니다. 잠시 후 다시 시도해 주세요."</p>
                        <button class="btn" on:click=move |_| fetch()>"다시 시도"</button>
                    </div>
                }.into_any(),
                Load::Ready(recipes) if recipes.is_empty() => view! {
                    <p class="empty">"추천할 레시피가 없어요. 재료를 더 추가해 보세요."</p>
                }.into_any(),
                Load::Ready(recipes) => view! {
                    <div class="recipe-grid">
                        {recipes.into_iter().map(|recipe| view! {
                            <RecipeCard recipe=recipe on_open=move |r: Recipe| set_detail.set(Some(r)) />
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </ModalFrame>

        {move || detail.get().map(|recipe| view! {
            <RecipeDetailModal recipe=recipe on_close=move |_| set_detail.set(None) />
        })}
    }
}
