//! My Page
//!
//! Profile summary, profile editing, FAQ and account deletion.

use leptos::prelude::*;

use crate::components::{DeleteAccountDialog, EditProfileDialog, FaqPanel, LoginPrompt};
use crate::models::{CookingLevel, Gender, User};
use crate::store::{use_app_store, AppStateStoreFields};

/// Label/value rows of the profile card; missing values read `-`
pub fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    let or_dash = |v: Option<&str>| {
        v.map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .unwrap_or_else(|| "-".to_string())
    };
    vec![
        ("아이디", user.user_id.clone()),
        ("이메일", or_dash(user.email.as_deref())),
        (
            "성별",
            user.gender
                .as_deref()
                .map(|g| Gender::normalize(Some(g)).label().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("생년월일", or_dash(user.date_of_birth.as_deref())),
        ("주간 목표", user.goal.map(|g| format!("{}회", g)).unwrap_or_else(|| "-".to_string())),
        (
            "요리 실력",
            user.cooking_level
                .as_deref()
                .map(|l| CookingLevel::parse(Some(l)).label().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dialog {
    None,
    Edit,
    Delete,
}

#[component]
pub fn MyPage() -> impl IntoView {
    let store = use_app_store();
    let (dialog, set_dialog) = signal(Dialog::None);

    view! {
        <section class="page my-page">
            {move || match store.user().get() {
                None => view! { <LoginPrompt message="로그인하고 내 정보를 확인하세요." /> }.into_any(),
                Some(user) => view! {
                    <div class="profile-card">
                        <div class="profile-head">
                            <span class="avatar large">{user.initial()}</span>
                            <h2>{user.user_name.clone()}</h2>
                            <button class="btn" on:click=move |_| set_dialog.set(Dialog::Edit)>"프로필 수정"</button>
                        </div>
                        <dl class="profile-rows">
                            {profile_rows(&user).into_iter().map(|(label, value)| view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            }).collect_view()}
                        </dl>
                    </div>
                }.into_any(),
            }}

            <FaqPanel />

            <Show when=move || store.user().with(Option::is_some)>
                <div class="danger-zone">
                    <button class="link danger" on:click=move |_| set_dialog.set(Dialog::Delete)>"회원 탈퇴"</button>
                </div>
            </Show>

            {move || match (dialog.get(), store.user().get()) {
                (Dialog::Edit, Some(user)) => Some(view! {
                    <EditProfileDialog user=user on_close=move |_| set_dialog.set(Dialog::None) />
                }.into_any()),
                (Dialog::Delete, Some(_)) => Some(view! {
                    <DeleteAccountDialog on_close=move |_| set_dialog.set(Dialog::None) />
                }.into_any()),
                _ => None,
            }}
        </section>
    }
}
