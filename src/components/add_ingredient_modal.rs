//! Add Ingredient Modal
//!
//! Searches the ingredient catalog and edits the fridge as a whole.
//! Saving replaces the fridge with the edited list.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_overlay::ModalFrame;

use crate::api;
use crate::context::use_app_context;
use crate::models::IngredientHit;
use crate::pantry::{parse_quantity, Pantry, PantryLine, PURGE_MISSING, SAVE_MODE};
use crate::store::{use_app_store, AppStateStoreFields};

/// Delay before a search request is sent while typing
const SEARCH_DEBOUNCE_MS: u32 = 250;

#[component]
pub fn AddIngredientModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (pantry, set_pantry) = signal(store.fridge().with_untracked(|items| Pantry::from_fridge(items)));
    let (query, set_query) = signal(String::new());
    let (hits, set_hits) = signal(Vec::<IngredientHit>::new());
    let (searching, set_searching) = signal(false);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Debounced search: only the latest query is sent
    Effect::new(move |_| {
        let q = query.get();
        if q.trim().is_empty() {
            set_hits.set(Vec::new());
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if query.get_untracked() != q {
                return;
            }
            set_searching.set(true);
            match api::fridge::search_ingredients(&q).await {
                Ok(found) if query.get_untracked() == q => set_hits.set(found),
                Ok(_) => {}
                Err(e) => log::warn!("ingredient search failed: {}", e),
            }
            set_searching.set(false);
        });
    });

    let pick = move |name: String| {
        set_pantry.update(|p| p.add_from_search(&name));
        set_query.set(String::new());
    };

    let save = move |_| {
        if busy.get_untracked() {
            return;
        }
        let items = pantry.with_untracked(Pantry::to_ingredients);
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fridge::save_fridge(&items, SAVE_MODE, PURGE_MISSING).await {
                Ok(()) => {
                    log::info!("saved {} fridge items", items.len());
                    store.fridge().set(items);
                    ctx.reload();
                    ctx.toast_ok("냉장고를 저장했어요.");
                    on_close.run(());
                }
                Err(e) => set_error.set(Some(e.message_or("저장하지 못했어요."))),
            }
            set_busy.set(false);
        });
    };

    view! {
        <ModalFrame title="재료 추가".to_string() on_close=on_close class="add-ingredient">
            <div class="search-box">
                <input
                    type="search"
                    placeholder="재료 이름으로 검색"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            let typed = query.get_untracked();
                            if !typed.trim().is_empty() {
                                pick(typed);
                            }
                        }
                    }
                />
                <Show when=move || searching.get()>
                    <span class="search-spinner">"검색 중…"</span>
                </Show>
            </div>
            <ul class="search-hits">
                <For
                    each=move || hits.get()
                    key=|hit: &IngredientHit| hit.name.clone()
                    children=move |hit: IngredientHit| {
                        let name = hit.name.clone();
                        view! {
                            <li on:click=move |_| pick(name.clone())>{hit.name}</li>
                        }
                    }
                />
            </ul>

            <div class="pantry">
                <Show
                    when=move || pantry.with(|p| !p.is_empty())
                    fallback=|| view! { <p class="empty">"냉장고가 비어 있어요."</p> }
                >
                    <For
                        each=move || pantry.with(|p| p.lines().to_vec())
                        key=|line: &PantryLine| (line.name.clone(), line.quantity)
                        children=move |line: PantryLine| {
                            let name = StoredValue::new(line.name.clone());
                            view! {
                                <div class="pantry-row">
                                    <span class="pantry-name">{line.name.clone()}</span>
                                    <div class="stepper">
                                        <button on:click=move |_| set_pantry.update(|p| p.decrement(&name.get_value()))>"−"</button>
                                        <input
                                            type="number"
                                            min="1"
                                            prop:value=line.quantity.to_string()
                                            on:change=move |ev| {
                                                let qty = parse_quantity(&event_target_value(&ev));
                                                set_pantry.update(|p| p.set_quantity(&name.get_value(), qty));
                                            }
                                        />
                                        <button on:click=move |_| set_pantry.update(|p| p.increment(&name.get_value()))>"+"</button>
                                    </div>
                                    <button class="remove-btn" on:click=move |_| set_pantry.update(|p| p.remove(&name.get_value()))>
                                        "×"
                                    </button>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>

            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <div class="form-actions">
                <button class="btn" on:click=move |_| on_close.run(())>"취소"</button>
                <button class="btn primary" disabled=move || busy.get() on:click=save>
                    {move || if busy.get() { "저장 중…" } else { "저장" }}
                </button>
            </div>
        </ModalFrame>
    }
}
