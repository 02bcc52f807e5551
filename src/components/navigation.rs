//! Navigation Component
//!
//! Brand header, tab bar and the login / logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::store::{store_sign_out, use_app_store, AppStateStoreFields, Tab};

#[component]
pub fn Navigation() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let user_name = move || {
        store
            .user()
            .with(|u| u.as_ref().map(|u| u.user_name.clone()))
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "사용자".to_string())
    };

    let on_logout = move |_| {
        spawn_local(async move {
            if let Err(e) = api::auth::logout().await {
                log::warn!("logout call failed: {}", e);
            }
            store_sign_out(&store);
            ctx.toast_ok("로그아웃했어요.");
        });
    };

    view! {
        <header class="nav">
            <div class="brand" on:click=move |_| store.tab().set(Tab::Fridge)>"COOKUS"</div>
            <nav class="tabs">
                {Tab::ALL.iter().map(|&tab| view! {
                    <button
                        class=move || if store.tab().get() == tab { "tab active" } else { "tab" }
                        on:click=move |_| store.tab().set(tab)
                    >
                        {tab.label()}
                    </button>
                }).collect_view()}
            </nav>
            <div class="nav-user">
                <Show
                    when=move || store.user().with(Option::is_some)
                    fallback=move || view! {
                        <button class="btn primary" on:click=move |_| store.show_login().set(true)>
                            "로그인"
                        </button>
                    }
                >
                    <span class="avatar">
                        {move || store.user().with(|u| u.as_ref().map(|u| u.initial()).unwrap_or_default())}
                    </span>
                    <span class="user-name">{user_name}</span>
                    <button class="btn" on:click=on_logout>"로그아웃"</button>
                </Show>
            </div>
        </header>
    }
}
