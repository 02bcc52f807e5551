//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Ingredient, User};

/// Top-level navigation tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Fridge,
    Calendar,
    Dashboard,
    MyPage,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Fridge, Tab::Calendar, Tab::Dashboard, Tab::MyPage];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Fridge => "냉장고",
            Tab::Calendar => "캘린더",
            Tab::Dashboard => "대시보드",
            Tab::MyPage => "마이페이지",
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user; `None` while logged out
    pub user: Option<User>,
    pub tab: Tab,
    pub show_login: bool,
    /// True until the session bootstrap finishes
    pub booting: bool,
    /// Fridge contents of the signed-in user
    pub fridge: Vec<Ingredient>,
    /// Bumped whenever the selected-recipe list changes on the server
    pub selected_version: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            booting: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_is_logged_in(store: &AppStore) -> bool {
    store.user().with(Option::is_some)
}

/// Open the login modal unless a user is signed in
pub fn store_require_login(store: &AppStore) -> bool {
    if store.user().with_untracked(Option::is_some) {
        return true;
    }
    store.show_login().set(true);
    false
}

pub fn store_sign_in(store: &AppStore, user: User) {
    log::info!("signed in as {}", user.user_id);
    store.user().set(Some(user));
    store.show_login().set(false);
}

/// Drop every piece of per-user state
pub fn store_sign_out(store: &AppStore) {
    store.user().set(None);
    store.fridge().write().clear();
    store.tab().set(Tab::Fridge);
}

pub fn store_bump_selected(store: &AppStore) {
    store.selected_version().update(|v| *v = v.wrapping_add(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["냉장고", "캘린더", "대시보드", "마이페이지"]);
        assert_eq!(Tab::default(), Tab::Fridge);
    }

    #[test]
    fn test_new_state_is_booting() {
        let state = AppState::new();
        assert!(state.booting);
        assert!(state.user.is_none());
        assert!(!state.show_login);
    }
}
