//! Recipe Detail Modal
//!
//! Ingredients, steps and tips of one recipe, with the "cook this" action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_overlay::ModalFrame;

use crate::api;
use crate::components::recipe_card::recipe_meta;
use crate::context::use_app_context;
use crate::models::Recipe;
use crate::recipe_text::{to_items, to_lines};
use crate::store::{store_bump_selected, store_require_login, use_app_store};

#[component]
fn Section(title: &'static str, lines: Vec<String>, ordered: bool) -> impl IntoView {
    (!lines.is_empty()).then(|| {
        let items = lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view();
        view! {
            <section class="recipe-section">
                <h4>{title}</h4>
                {if ordered {
                    view! { <ol>{items}</ol> }.into_any()
                } else {
                    view! { <ul>{items}</ul> }.into_any()
                }}
            </section>
        }
    })
}

/// `selectable` hides the select button when the recipe is opened from the calendar
#[component]
pub fn RecipeDetailModal(
    recipe: Recipe,
    #[prop(default = true)] selectable: bool,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let recipe_id = recipe.recipe_id;
    let (already_selected, set_already_selected) = signal(false);
    let (busy, set_busy) = signal(false);
    let (message, set_message) = signal(None::<String>);

    if selectable {
        spawn_local(async move {
            match api::recipe::selected_status(recipe_id).await {
                Ok(status) => set_already_selected.set(status.selected),
                Err(e) => log::debug!("selected status for {} unavailable: {}", recipe_id, e),
            }
        });
    }

    let select = move |_| {
        if busy.get_untracked() || !store_require_login(&store) {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::recipe::select_recipe(recipe_id).await {
                Ok(()) => {
                    set_already_selected.set(true);
                    set_message.set(Some("선택되었습니다. 캘린더에 기록돼요!".to_string()));
                    store_bump_selected(&store);
                    ctx.toast_ok("캘린더에 기록했어요.");
                }
                Err(e) => set_message.set(Some(e.message_or("레시피를 선택하지 못했어요."))),
            }
            set_busy.set(false);
        });
    };

    let title = recipe.recipe_nm_ko.clone();
    let meta = recipe_meta(recipe.cooking_time, recipe.level_nm.as_deref());
    let ingredients = to_items(&recipe.ingredient_full);
    let steps = to_lines(&recipe.step_text);
    let tips = to_lines(&recipe.step_tip);

    view! {
        <ModalFrame title=title desc=meta on_close=on_close class="recipe-detail">
            <Section title="[필요 재료]" lines=ingredients ordered=false />
            <Section title="[조리 순서]" lines=steps ordered=true />
            <Section title="[팁]" lines=tips ordered=false />
            {move || message.get().map(|msg| view! { <p class="form-hint">{msg}</p> })}
            {selectable.then(|| view! {
                <button
                    class="btn primary wide"
                    disabled=move || busy.get() || already_selected.get()
                    on:click=select
                >
                    {move || if already_selected.get() { "오늘 기록된 레시피예요" } else { "이 레시피 할래요" }}
                </button>
            })}
        </ModalFrame>
    }
}
