//! FAQ Panel Component
//!
//! Searchable FAQ list with a category filter. Answers are Markdown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::faq::DEFAULT_FAQ_LIMIT;
use crate::markdown::{answer_preview, render_answer};
use crate::models::FaqItem;

const PREVIEW_CHARS: usize = 60;

/// A response only applies while its query and category are still selected
fn is_current(query: &str, category: &Option<String>, latest_query: &str, latest_category: &Option<String>) -> bool {
    query == latest_query && category == latest_category
}

#[component]
pub fn FaqPanel() -> impl IntoView {
    let (categories, set_categories) = signal(Vec::<String>::new());
    let (category, set_category) = signal(None::<String>);
    let (query, set_query) = signal(String::new());
    let (submitted, set_submitted) = signal(String::new());
    let (items, set_items) = signal(Vec::<FaqItem>::new());
    let (loading, set_loading) = signal(false);
    let (failed, set_failed) = signal(false);
    let (open_id, set_open_id) = signal(None::<i64>);

    spawn_local(async move {
        match api::faq::fetch_faq_categories().await {
            Ok(loaded) => set_categories.set(loaded),
            Err(e) => log::warn!("faq categories unavailable: {}", e),
        }
    });

    Effect::new(move |_| {
        let q = submitted.get();
        let c = category.get();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::faq::fetch_faq(&q, c.as_deref(), DEFAULT_FAQ_LIMIT).await;
            if !is_current(&q, &c, &submitted.get_untracked(), &category.get_untracked()) {
                log::debug!("discarding stale faq response for {:?}", q);
                return;
            }
            match result {
                Ok(loaded) => {
                    set_failed.set(false);
                    set_items.set(loaded);
                }
                Err(e) => {
                    log::warn!("faq fetch failed: {}", e);
                    set_failed.set(true);
                }
            }
            set_loading.set(false);
        });
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(query.get_untracked());
    };

    view! {
        <section class="faq-panel">
            <h3>"자주 묻는 질문"</h3>
            <form class="search-box" on:submit=on_search>
                <input
                    type="search"
                    placeholder="궁금한 내용을 검색하세요"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" class="btn">"검색"</button>
            </form>
            <div class="pills">
                <button
                    class=move || if category.get().is_none() { "pill active" } else { "pill" }
                    on:click=move |_| set_category.set(None)
                >
                    "전체"
                </button>
                <For
                    each=move || categories.get()
                    key=|c: &String| c.clone()
                    children=move |c: String| {
                        let value = c.clone();
                        let is_active = move || category.with(|cur| cur.as_deref() == Some(value.as_str()));
                        let pick = c.clone();
                        view! {
                            <button
                                class=move || if is_active() { "pill active" } else { "pill" }
                                on:click=move |_| set_category.set(Some(pick.clone()))
                            >
                                {c}
                            </button>
                        }
                    }
                />
            </div>

            {move || {
                if loading.get() && items.with(Vec::is_empty) {
                    return view! { <p class="loading">"불러오는 중…"</p> }.into_any();
                }
                if failed.get() {
                    return view! { <p class="empty">"FAQ를 불러오지 못했어요."</p> }.into_any();
                }
                if items.with(Vec::is_empty) {
                    return view! { <p class="empty">"검색 결과가 없어요."</p> }.into_any();
                }
                view! {
                    <ul class="faq-list">
                        <For
                            each=move || items.get()
                            key=|item: &FaqItem| item.faq_id
                            children=move |item: FaqItem| {
                                let id = item.faq_id;
                                let is_open = move || open_id.get() == Some(id);
                                let html = render_answer(&item.answer);
                                let preview = answer_preview(&item.answer, PREVIEW_CHARS);
                                view! {
                                    <li class=move || if is_open() { "faq-item open" } else { "faq-item" }>
                                        <button
                                            class="faq-question"
                                            on:click=move |_| set_open_id.update(|cur| {
                                                *cur = if *cur == Some(id) { None } else { Some(id) };
                                            })
                                        >
                                            {item.category.clone().map(|c| view! { <span class="faq-category">{c}</span> })}
                                            {item.question.clone()}
                                        </button>
                                        <Show
                                            when=is_open
                                            fallback=move || view! { <p class="faq-preview clamp-1">{preview.clone()}</p> }
                                        >
                                            <div class="faq-answer markdown" inner_html=html.clone()></div>
                                        </Show>
                                    </li>
                                }
                            }
                        />
                    </ul>
                }.into_any()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_responses_are_not_current() {
        let noodles = Some("면".to_string());
        assert!(is_current("육수", &noodles, "육수", &noodles));
        assert!(!is_current("육수", &noodles, "육수", &None));
        assert!(!is_current("육수", &None, "양념", &None));
    }
}
