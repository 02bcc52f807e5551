//! Calendar Page
//!
//! Month grid of cooked recipes with a panel for the selected day.

use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_overlay::{ConfirmDialog, ModalFrame};

use crate::api;
use crate::calendar::{month_buckets, month_grid, parse_local_date, ymd, DayCell, Month, WEEKDAY_LABELS};
use crate::components::{LoginPrompt, RecipeDetailModal};
use crate::context::use_app_context;
use crate::error::ApiResult;
use crate::models::{Recipe, SelectedRecipe};
use crate::store::{store_bump_selected, store_is_logged_in, use_app_store, AppStateStoreFields};

/// Recipe names shown inside one grid cell before collapsing to `+N`
const CELL_PREVIEW: usize = 2;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Records of one day, in server order
pub fn records_on(rows: &[SelectedRecipe], date: NaiveDate) -> Vec<SelectedRecipe> {
    rows.iter()
        .filter(|row| parse_local_date(&row.selected_date) == Some(date))
        .cloned()
        .collect()
}

/// Details for a record: the stored recommendation, falling back to the recipe itself
async fn load_detail(record: &SelectedRecipe) -> ApiResult<Recipe> {
    match api::recipe::get_recommendation(record.recommend_id).await {
        Ok(recipe) => Ok(recipe),
        Err(e) => {
            log::debug!("recommendation {} unavailable ({}), loading recipe", record.recommend_id, e);
            api::recipe::get_recipe(record.recipe_id).await
        }
    }
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (month, set_month) = signal(Month::of(today()));
    let (selected_day, set_selected_day) = signal(today());
    let (rows, set_rows) = signal(Vec::<SelectedRecipe>::new());
    let (loading, set_loading) = signal(false);
    let (failed, set_failed) = signal(false);
    let (detail, set_detail) = signal(None::<Recipe>);
    let (confirm_delete, set_confirm_delete) = signal(None::<SelectedRecipe>);
    let (show_all, set_show_all) = signal(false);

    Effect::new(move |_| {
        let _ = store.selected_version().get();
        if !store.user().with(Option::is_some) {
            set_rows.set(Vec::new());
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::recipe::get_selected().await {
                Ok(response) => {
                    set_failed.set(false);
                    set_rows.set(response.recipes);
                }
                Err(e) => {
                    log::warn!("selected recipes failed: {}", e);
                    set_failed.set(true);
                }
            }
            set_loading.set(false);
        });
    });

    let buckets = Memo::new(move |_| rows.with(|r| month_buckets(r, month.get())));
    let day_records = Memo::new(move |_| rows.with(|r| records_on(r, selected_day.get())));

    let go_today = move |_| {
        let now = today();
        set_month.set(Month::of(now));
        set_selected_day.set(now);
    };

    let toggle_done = move |record: SelectedRecipe| {
        let done = !record.is_done();
        spawn_local(async move {
            match api::recipe::set_selected_action(record.selected_id, done).await {
                Ok(()) => {
                    set_rows.update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|r| r.selected_id == record.selected_id) {
                            row.action = Some(u8::from(done));
                        }
                    });
                    ctx.toast_ok(if done { "체크했어요." } else { "체크 해제했어요." });
                }
                Err(e) => {
                    log::warn!("toggle {} failed: {}", record.selected_id, e);
                    ctx.toast_warn("상태를 바꾸지 못했어요.");
                }
            }
        });
    };

    let open_detail = move |record: SelectedRecipe| {
        spawn_local(async move {
            match load_detail(&record).await {
                Ok(recipe) => set_detail.set(Some(recipe)),
                Err(e) => {
                    log::warn!("detail for {} failed: {}", record.selected_id, e);
                    ctx.toast_warn("레시피를 불러오지 못했어요.");
                }
            }
        });
    };

    let delete_record = move |_| {
        let Some(record) = confirm_delete.get_untracked() else {
            return;
        };
        set_confirm_delete.set(None);
        spawn_local(async move {
            match api::recipe::delete_selected(record.selected_id).await {
                Ok(()) => {
                    set_rows.update(|rows| rows.retain(|r| r.selected_id != record.selected_id));
                    store_bump_selected(&store);
                    ctx.toast_ok("기록을 삭제했어요.");
                }
                Err(e) => {
                    log::warn!("delete {} failed: {}", record.selected_id, e);
                    ctx.toast_warn("기록을 삭제하지 못했어요.");
                }
            }
        });
    };

    let record_row = move |record: SelectedRecipe| {
        let for_toggle = record.clone();
        let for_detail = record.clone();
        let for_delete = record.clone();
        view! {
            <li class=if record.is_done() { "record done" } else { "record" }>
                <input
                    type="checkbox"
                    prop:checked=record.is_done()
                    on:change=move |_| toggle_done(for_toggle.clone())
                />
                <button class="record-name link" on:click=move |_| open_detail(for_detail.clone())>
                    {record.recipe_nm_ko.clone()}
                </button>
                <button class="remove-btn" on:click=move |_| set_confirm_delete.set(Some(for_delete.clone()))>
                    "삭제"
                </button>
            </li>
        }
    };

    let cell_view = move |cell: DayCell| {
        let date = cell.date;
        let names: Vec<String> = if cell.in_month {
            buckets.with(|b| {
                b.get(&date.day())
                    .map(|records| records.iter().map(|r| r.recipe_nm_ko.clone()).collect())
                    .unwrap_or_default()
            })
        } else {
            Vec::new()
        };
        let extra = names.len().saturating_sub(CELL_PREVIEW);
        let mut class = String::from("cell");
        if !cell.in_month {
            class.push_str(" muted");
        }
        if date == today() {
            class.push_str(" today");
        }
        if date == selected_day.get() {
            class.push_str(" selected");
        }
        if !names.is_empty() {
            class.push_str(" has-records");
        }
        view! {
            <div
                class=class
                on:click=move |_| {
                    if !month.get_untracked().contains(date) {
                        set_month.set(Month::of(date));
                    }
                    set_selected_day.set(date);
                }
            >
                <span class="day">{date.day()}</span>
                {names.into_iter().take(CELL_PREVIEW).map(|name| view! {
                    <span class="cell-recipe clamp-1">{name}</span>
                }).collect_view()}
                {(extra > 0).then(|| view! { <span class="cell-more">{format!("+{}", extra)}</span> })}
            </div>
        }
    };

    view! {
        <section class="page calendar-page">
            <Show
                when=move || store_is_logged_in(&store)
                fallback=|| view! { <LoginPrompt message="로그인하면 요리 기록을 달력으로 볼 수 있어요." /> }
            >
                <div class="calendar-head">
                    <button class="btn icon" on:click=move |_| set_month.update(|m| *m = m.prev())>"‹"</button>
                    <h2>{move || month.get().label()}</h2>
                    <button class="btn icon" on:click=move |_| set_month.update(|m| *m = m.next())>"›"</button>
                    <button class="btn" on:click=go_today>"오늘"</button>
                </div>
                {move || failed.get().then(|| view! { <p class="form-error">"기록을 불러오지 못했어요."</p> })}
                <div class="calendar-grid">
                    {WEEKDAY_LABELS.iter().map(|label| view! { <div class="weekday">{*label}</div> }).collect_view()}
                    {move || month_grid(month.get()).into_iter().map(cell_view).collect_view()}
                </div>

                <div class="day-panel">
                    <div class="day-panel-head">
                        <h3>{move || ymd(selected_day.get())}</h3>
                        <Show when=move || { day_records.with(|r| r.len() > CELL_PREVIEW) }>
                            <button class="link" on:click=move |_| set_show_all.set(true)>"전체 보기"</button>
                        </Show>
                    </div>
                    {move || {
                        if loading.get() && rows.with(Vec::is_empty) {
                            return view! { <p class="loading">"불러오는 중…"</p> }.into_any();
                        }
                        let records = day_records.get();
                        if records.is_empty() {
                            return view! { <p class="empty">"이 날의 기록이 없어요."</p> }.into_any();
                        }
                        view! {
                            <ul class="records">
                                {records.into_iter().map(record_row).collect_view()}
                            </ul>
                        }.into_any()
                    }}
                </div>
            </Show>

            {move || show_all.get().then(|| view! {
                <ModalFrame
                    title=Signal::derive(move || format!("{} 기록", ymd(selected_day.get())))
                    on_close=move |_| set_show_all.set(false)
                >
                    <ul class="records">
                        {move || day_records.get().into_iter().map(record_row).collect_view()}
                    </ul>
                </ModalFrame>
            })}

            {move || detail.get().map(|recipe| view! {
                <RecipeDetailModal recipe=recipe selectable=false on_close=move |_| set_detail.set(None) />
            })}

            {move || confirm_delete.get().map(|record| view! {
                <ConfirmDialog
                    title="이 기록을 삭제할까요?".to_string()
                    meta=record.recipe_nm_ko.clone()
                    confirm_label="삭제".to_string()
                    on_confirm=delete_record
                    on_cancel=move |_| set_confirm_delete.set(None)
                />
            })}
        </section>
    }
}
