//! Edit Profile Dialog

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_overlay::ModalFrame;

use crate::api;
use crate::context::use_app_context;
use crate::models::{CookingLevel, Gender, UpdateMePayload, User, MAX_WEEKLY_GOAL};
use crate::store::{use_app_store, AppStateStoreFields};

/// Editable copy of the profile
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub user_name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: String,
    pub goal: u32,
    pub cooking_level: CookingLevel,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_name: user.user_name.clone(),
            email: user.email.clone().unwrap_or_default(),
            gender: Gender::normalize(user.gender.as_deref()),
            date_of_birth: user.date_of_birth.clone().unwrap_or_default(),
            goal: user.goal.unwrap_or(0).min(MAX_WEEKLY_GOAL),
            cooking_level: CookingLevel::parse(user.cooking_level.as_deref()),
        }
    }

    /// Only the fields that differ from `user`. A cleared birth date is sent as null.
    pub fn changes(&self, user: &User) -> UpdateMePayload {
        let before = Self::from_user(user);
        let name = self.user_name.trim();
        let email = self.email.trim();
        let dob = self.date_of_birth.trim();
        UpdateMePayload {
            user_name: (!name.is_empty() && name != before.user_name).then(|| name.to_string()),
            email: (!email.is_empty() && email != before.email).then(|| email.to_string()),
            gender: (self.gender != before.gender || user.gender.is_none()).then_some(self.gender),
            date_of_birth: (dob != before.date_of_birth)
                .then(|| (!dob.is_empty()).then(|| dob.to_string())),
            goal: (self.goal.min(MAX_WEEKLY_GOAL) != user.goal.unwrap_or(0)).then_some(self.goal.min(MAX_WEEKLY_GOAL)),
            cooking_level: (self.cooking_level != before.cooking_level || user.cooking_level.is_none())
                .then_some(self.cooking_level),
        }
    }
}

#[component]
pub fn EditProfileDialog(user: User, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let original = StoredValue::new(user.clone());
    let (form, set_form) = signal(ProfileForm::from_user(&user));
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = original.with_value(|u| form.get_untracked().changes(u));
        if payload == UpdateMePayload::default() {
            on_close.run(());
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::auth::update_me(&payload).await {
                Ok(updated) => {
                    store.user().set(Some(updated));
                    ctx.toast_ok("프로필을 저장했어요.");
                    on_close.run(());
                }
                Err(e) => set_error.set(Some(e.message_or("프로필을 저장하지 못했어요."))),
            }
            set_busy.set(false);
        });
    };

    view! {
        <ModalFrame title="프로필 수정".to_string() on_close=on_close>
            <form class="form" on:submit=save>
                <label class="field">
                    <span>"이름"</span>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.user_name.clone())
                        on:input=move |ev| set_form.update(|f| f.user_name = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"이메일"</span>
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <div class="field">
                    <span>"성별"</span>
                    <div class="pills">
                        {[Gender::Female, Gender::Male].into_iter().map(|g| view! {
                            <button
                                type="button"
                                class=move || if form.with(|f| f.gender == g) { "pill active" } else { "pill" }
                                on:click=move |_| set_form.update(|f| f.gender = g)
                            >
                                {g.label()}
                            </button>
                        }).collect_view()}
                    </div>
                </div>
                <label class="field">
                    <span>"생년월일"</span>
                    <input
                        type="date"
                        prop:value=move || form.with(|f| f.date_of_birth.clone())
                        on:input=move |ev| set_form.update(|f| f.date_of_birth = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>{format!("주간 목표 (0~{}회)", MAX_WEEKLY_GOAL)}</span>
                    <input
                        type="number"
                        min="0"
                        max=MAX_WEEKLY_GOAL.to_string()
                        prop:value=move || form.with(|f| f.goal.to_string())
                        on:input=move |ev| {
                            let goal = event_target_value(&ev).trim().parse::<u32>().unwrap_or(0);
                            set_form.update(|f| f.goal = goal.min(MAX_WEEKLY_GOAL));
                        }
                    />
                </label>
                <div class="field">
                    <span>"요리 실력"</span>
                    <div class="pills">
                        {[CookingLevel::Low, CookingLevel::High].into_iter().map(|l| view! {
                            <button
                                type="button"
                                class=move || if form.with(|f| f.cooking_level == l) { "pill active" } else { "pill" }
                                on:click=move |_| set_form.update(|f| f.cooking_level = l)
                            >
                                {l.label()}
                            </button>
                        }).collect_view()}
                    </div>
                </div>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <div class="form-actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>"취소"</button>
                    <button type="submit" class="btn primary" disabled=move || busy.get()>"저장"</button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            user_id: "cook1".to_string(),
            user_name: "김요리".to_string(),
            email: Some("cook@example.com".to_string()),
            gender: Some("female".to_string()),
            date_of_birth: Some("1995-04-02".to_string()),
            goal: Some(3),
            cooking_level: Some("하".to_string()),
        }
    }

    #[test]
    fn test_no_changes() {
        let u = user();
        let form = ProfileForm::from_user(&u);
        assert_eq!(form.changes(&u), UpdateMePayload::default());
    }

    #[test]
    fn test_changed_fields_only() {
        let u = user();
        let mut form = ProfileForm::from_user(&u);
        form.user_name = " 박요리 ".to_string();
        form.goal = 30;
        form.cooking_level = CookingLevel::High;
        let changes = form.changes(&u);
        assert_eq!(changes.user_name.as_deref(), Some("박요리"));
        assert_eq!(changes.goal, Some(MAX_WEEKLY_GOAL));
        assert_eq!(changes.cooking_level, Some(CookingLevel::High));
        assert_eq!(changes.email, None);
        assert_eq!(changes.date_of_birth, None);
    }

    #[test]
    fn test_clearing_birth_date_sends_null() {
        let u = user();
        let mut form = ProfileForm::from_user(&u);
        form.date_of_birth = "  ".to_string();
        assert_eq!(form.changes(&u).date_of_birth, Some(None));
    }
}
