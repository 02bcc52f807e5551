//! Login Prompt Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Placeholder shown on pages that need a signed-in user
#[component]
pub fn LoginPrompt(#[prop(into)] message: String) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="login-prompt">
            <p>{message}</p>
            <button class="btn primary" on:click=move |_| store.show_login().set(true)>"로그인"</button>
        </div>
    }
}
