//! CookUs Frontend App
//!
//! Session bootstrap, navigation and the page for the active tab.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_overlay::{create_toast_signals, ToastHost};

use crate::api;
use crate::components::{LoginModal, Navigation};
use crate::context::AppContext;
use crate::pages::{CalendarPage, DashboardPage, FridgePage, MyPage};
use crate::store::{store_sign_in, AppState, AppStateStoreFields, AppStore, Tab};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = reactive_stores::Store::new(AppState::new());
    provide_context(store);

    let toast = create_toast_signals();
    let reload_trigger = signal(0u32);
    provide_context(AppContext::new(toast, reload_trigger));

    // Restore the session from the refresh cookie, then load the profile
    spawn_local(async move {
        if api::auth::init().await {
            match api::auth::me().await {
                Ok(user) => store_sign_in(&store, user),
                Err(e) => log::warn!("session restored but profile failed: {}", e),
            }
        }
        store.booting().set(false);
    });

    view! {
        <Show
            when=move || !store.booting().get()
            fallback=|| view! { <div class="boot">"로딩 중…"</div> }
        >
            <Navigation />
            <main class="main-content">
                {move || match store.tab().get() {
                    Tab::Fridge => view! { <FridgePage /> }.into_any(),
                    Tab::Calendar => view! { <CalendarPage /> }.into_any(),
                    Tab::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Tab::MyPage => view! { <MyPage /> }.into_any(),
                }}
            </main>
            <Show when=move || store.show_login().get()>
                <LoginModal />
            </Show>
        </Show>
        <ToastHost toast=toast />
    }
}
