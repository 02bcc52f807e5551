//! Fridge Page
//!
//! Ingredient count and list, plus the add-ingredient and recommendation modals.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AddIngredientModal, LoginPrompt, RecommendModal};
use crate::context::use_app_context;
use crate::models::Ingredient;
use crate::store::{store_is_logged_in, use_app_store, AppStateStoreFields};

/// `양파 2`, or just the name when no quantity is known
pub fn ingredient_label(item: &Ingredient) -> String {
    match (item.quantity, item.unit.as_deref().map(str::trim).filter(|u| !u.is_empty())) {
        (Some(q), Some(unit)) => format!("{} {}{}", item.name, q, unit),
        (Some(q), None) => format!("{} {}", item.name, q),
        (None, _) => item.name.clone(),
    }
}

#[component]
pub fn FridgePage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (show_add, set_show_add) = signal(false);
    let (show_recommend, set_show_recommend) = signal(false);
    let (loading, set_loading) = signal(false);

    // Reload when the user changes or something asked for a reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let signed_in = store.user().with(|u| u.as_ref().map(|u| u.user_id.clone()));
        if signed_in.is_none() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::fridge::list_fridge().await {
                Ok(items) => store.fridge().set(items),
                Err(e) => log::warn!("fridge preload failed: {}", e),
            }
            set_loading.set(false);
        });
    });

    let count = move || store.fridge().with(Vec::len);

    view! {
        <section class="page fridge-page">
            <Show
                when=move || store_is_logged_in(&store)
                fallback=|| view! { <LoginPrompt message="로그인하고 냉장고 재료를 관리해 보세요." /> }
            >
                <div class="page-head">
                    <h2>{move || format!("내 재료 {}개", count())}</h2>
                    <div class="page-actions">
                        <button class="btn" on:click=move |_| set_show_add.set(true)>"재료 추가"</button>
                        <button
                            class="btn primary"
                            disabled=move || count() == 0
                            on:click=move |_| set_show_recommend.set(true)
                        >
                            "레시피 추천받기"
                        </button>
                    </div>
                </div>
                {move || {
                    if loading.get() && count() == 0 {
                        return view! { <p class="loading">"불러오는 중…"</p> }.into_any();
                    }
                    if count() == 0 {
                        return view! { <p class="empty">"냉장고가 비어 있어요. 재료를 추가해 보세요."</p> }.into_any();
                    }
                    view! {
                        <ul class="chips">
                            {store.fridge().get().iter().map(|item| view! {
                                <li class="chip">{ingredient_label(item)}</li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }}
            </Show>

            <Show when=move || show_add.get()>
                <AddIngredientModal on_close=move |_| set_show_add.set(false) />
            </Show>
            <Show when=move || show_recommend.get()>
                <RecommendModal on_close=move |_| set_show_recommend.set(false) />
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_label() {
        let with_unit = Ingredient { name: "우유".to_string(), quantity: Some(2), unit: Some("팩".to_string()) };
        assert_eq!(ingredient_label(&with_unit), "우유 2팩");
        let bare = Ingredient { name: "양파".to_string(), quantity: Some(3), unit: None };
        assert_eq!(ingredient_label(&bare), "양파 3");
        let unknown = Ingredient { name: "소금".to_string(), quantity: None, unit: Some(" ".to_string()) };
        assert_eq!(ingredient_label(&unknown), "소금");
    }
}
