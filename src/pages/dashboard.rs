//! Dashboard Page
//!
//! Weekly progress plus level and category distributions of cooked recipes.
//! In-flight stat calls are aborted when the page unmounts.

use futures::future::try_join3;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, stats::bar_width};
use crate::components::LoginPrompt;
use crate::error::ApiError;
use crate::models::{DistRow, ProgressStat};
use crate::store::{store_is_logged_in, use_app_store, AppStateStoreFields};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    progress: ProgressStat,
    levels: Vec<DistRow>,
    categories: Vec<DistRow>,
}

/// `63%` for a 0..1 (or 0..100) weekly rate
pub fn percent(rate: f64) -> String {
    let rate = if rate > 1.0 { rate / 100.0 } else { rate };
    format!("{:.0}%", rate.clamp(0.0, 1.0) * 100.0)
}

/// One decimal, without a trailing `.0`
pub fn one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

#[component]
fn Bars(title: &'static str, rows: Vec<DistRow>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3>{title}</h3>
            {if rows.iter().all(|r| r.count == 0) {
                view! { <p class="empty">"아직 기록이 없어요."</p> }.into_any()
            } else {
                rows.into_iter().map(|row| view! {
                    <div class="bar-row">
                        <span class="bar-label">{row.label.clone()}</span>
                        <div class="bar-track">
                            <div class="bar-fill" style=format!("width: {}", bar_width(row.ratio))></div>
                        </div>
                        <span class="bar-count">{format!("{}회", row.count)}</span>
                    </div>
                }).collect_view().into_any()
            }}
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();

    let (data, set_data) = signal(None::<DashboardData>);
    let (failed, set_failed) = signal(false);
    let abort = StoredValue::new(None::<futures::future::AbortHandle>);

    Effect::new(move |_| {
        let user_id = store.user().with(|u| u.as_ref().map(|u| u.user_id.clone()));
        if let Some(handle) = abort.get_value() {
            handle.abort();
        }
        if user_id.is_none() {
            set_data.set(None);
            return;
        }
        let (call, handle) = api::cancellable(async {
            let (progress, levels, categories) = try_join3(
                api::stats::get_progress(),
                api::stats::get_level_distribution(),
                api::stats::get_category_distribution(),
            )
            .await?;
            Ok::<_, ApiError>(DashboardData { progress, levels, categories })
        });
        abort.set_value(Some(handle));
        spawn_local(async move {
            match call.await {
                Ok(loaded) => {
                    set_failed.set(false);
                    set_data.set(Some(loaded));
                }
                Err(ApiError::Aborted) => log::debug!("dashboard load aborted"),
                Err(e) => {
                    log::warn!("dashboard load failed: {}", e);
                    set_failed.set(true);
                }
            }
        });
    });

    on_cleanup(move || {
        if let Some(handle) = abort.get_value() {
            handle.abort();
        }
    });

    view! {
        <section class="page dashboard-page">
            <Show
                when=move || store_is_logged_in(&store)
                fallback=|| view! { <LoginPrompt message="로그인하면 요리 통계를 볼 수 있어요." /> }
            >
                {move || {
                    if failed.get() {
                        return view! { <p class="form-error">"통계를 불러오지 못했어요."</p> }.into_any();
                    }
                    let Some(d) = data.get() else {
                        return view! { <p class="loading">"불러오는 중…"</p> }.into_any();
                    };
                    let goal = store.user().with(|u| u.as_ref().and_then(|u| u.goal)).unwrap_or(0);
                    view! {
                        <div class="stat-grid">
                            <div class="stat-card">
                                <span class="stat-label">"이번 주 달성률"</span>
                                <strong class="stat-value">{percent(d.progress.weekly_rate)}</strong>
                                {(goal > 0).then(|| view! { <span class="stat-sub">{format!("목표 주 {}회", goal)}</span> })}
                            </div>
                            <div class="stat-card">
                                <span class="stat-label">"요리한 레시피"</span>
                                <strong class="stat-value">{format!("{}개", d.progress.cooked_count)}</strong>
                            </div>
                            <div class="stat-card">
                                <span class="stat-label">"평균 난이도"</span>
                                <strong class="stat-value">{one_decimal(d.progress.avg_difficulty)}</strong>
                            </div>
                            <div class="stat-card">
                                <span class="stat-label">"평균 조리 시간"</span>
                                <strong class="stat-value">{format!("{}분", one_decimal(d.progress.avg_minutes))}</strong>
                            </div>
                        </div>
                        <div class="stat-grid wide">
                            <Bars title="난이도별" rows=d.levels />
                            <Bars title="카테고리 TOP 5" rows=d.categories />
                        </div>
                    }.into_any()
                }}
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.63), "63%");
        assert_eq!(percent(40.0), "40%");
        assert_eq!(percent(-1.0), "0%");
    }

    #[test]
    fn test_one_decimal() {
        assert_eq!(one_decimal(2.0), "2");
        assert_eq!(one_decimal(1.46), "1.5");
        assert_eq!(one_decimal(23.04), "23");
    }
}
