//! Login Modal Component
//!
//! Login and signup in one modal, with links to the account recovery dialogs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_overlay::ModalFrame;

use crate::api;
use crate::components::{FindIdDialog, ResetPasswordDialog};
use crate::context::use_app_context;
use crate::models::{CookingLevel, Gender, SignupPayload, MAX_WEEKLY_GOAL};
use crate::store::{store_sign_in, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Login,
    Signup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Recovery {
    None,
    FindId,
    ResetPassword,
}

#[component]
pub fn LoginModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (mode, set_mode) = signal(Mode::Login);
    let (recovery, set_recovery) = signal(Recovery::None);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let (id, set_id) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (user_name, set_user_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (gender, set_gender) = signal(Gender::Female);
    let (dob, set_dob) = signal(String::new());
    let (goal, set_goal) = signal(3u32);
    let (level, set_level) = signal(CookingLevel::Low);

    let close = Callback::new(move |_| store.show_login().set(false));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = mode.get_untracked();
        let (login_id, pw) = (id.get_untracked(), password.get_untracked());
        if login_id.trim().is_empty() || pw.trim().is_empty() {
            set_error.set(Some("아이디와 비밀번호를 입력하세요.".to_string()));
            return;
        }
        let signup = SignupPayload {
            id: login_id.clone(),
            user_name: user_name.get_untracked(),
            email: email.get_untracked(),
            password: pw.clone(),
            gender: gender.get_untracked(),
            date_of_birth: Some(dob.get_untracked()),
            cooking_level: level.get_untracked(),
            goal: goal.get_untracked(),
        };
        set_busy.set(true);
        set_error.set(None);

        spawn_local(async move {
            let fallback = match current {
                Mode::Login => "로그인에 실패했어요.",
                Mode::Signup => "회원가입에 실패했어요.",
            };
            let result = async {
                if current == Mode::Signup {
                    api::auth::signup(signup).await?;
                }
                api::auth::login(&login_id, &pw).await?;
                api::auth::me().await
            }
            .await;

            match result {
                Ok(user) => {
                    store_sign_in(&store, user);
                    ctx.reload();
                    ctx.toast_ok(match current {
                        Mode::Login => "로그인했어요.",
                        Mode::Signup => "가입을 환영해요!",
                    });
                }
                Err(e) => {
                    log::warn!("auth failed: {}", e);
                    set_error.set(Some(e.message_or(fallback)));
                }
            }
            set_busy.set(false);
        });
    };

    let title = Signal::derive(move || match mode.get() {
        Mode::Login => "로그인".to_string(),
        Mode::Signup => "회원가입".to_string(),
    });

    view! {
        <ModalFrame title=title on_close=close class="login-modal">
            <form class="form" on:submit=on_submit>
                <label class="field">
                    <span>"아이디"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || id.get()
                        on:input=move |ev| set_id.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"비밀번호"</span>
                    <input
                        type="password"
                        autocomplete=move || if mode.get() == Mode::Login { "current-password" } else { "new-password" }
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || mode.get() == Mode::Signup>
                    <label class="field">
                        <span>"이름"</span>
                        <input
                            type="text"
                            placeholder="비워두면 아이디를 사용해요"
                            prop:value=move || user_name.get()
                            on:input=move |ev| set_user_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"이메일"</span>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="field">
                        <span>"성별"</span>
                        <div class="pills">
                            {[Gender::Female, Gender::Male].into_iter().map(|g| view! {
                                <button
                                    type="button"
                                    class=move || if gender.get() == g { "pill active" } else { "pill" }
                                    on:click=move |_| set_gender.set(g)
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
                            prop:value=move || dob.get()
                            on:input=move |ev| set_dob.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"주간 목표 (회)"</span>
                        <input
                            type="number"
                            min="0"
                            max=MAX_WEEKLY_GOAL.to_string()
                            prop:value=move || goal.get().to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).trim().parse::<u32>().unwrap_or(0);
                                set_goal.set(value.min(MAX_WEEKLY_GOAL));
                            }
                        />
                    </label>
                    <div class="field">
                        <span>"요리 실력"</span>
                        <div class="pills">
                            {[CookingLevel::Low, CookingLevel::High].into_iter().map(|l| view! {
                                <button
                                    type="button"
                                    class=move || if level.get() == l { "pill active" } else { "pill" }
                                    on:click=move |_| set_level.set(l)
                                >
                                    {l.label()}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>
                </Show>

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button type="submit" class="btn primary wide" disabled=move || busy.get()>
                    {move || match (mode.get(), busy.get()) {
                        (_, true) => "처리 중…",
                        (Mode::Login, false) => "로그인",
                        (Mode::Signup, false) => "가입하기",
                    }}
                </button>
            </form>

            <div class="login-links">
                <button
                    class="link"
                    on:click=move |_| {
                        set_error.set(None);
                        set_mode.update(|m| *m = if *m == Mode::Login { Mode::Signup } else { Mode::Login });
                    }
                >
                    {move || if mode.get() == Mode::Login { "회원가입" } else { "로그인으로 돌아가기" }}
                </button>
                <button class="link" on:click=move |_| set_recovery.set(Recovery::FindId)>"아이디 찾기"</button>
                <button class="link" on:click=move |_| set_recovery.set(Recovery::ResetPassword)>"비밀번호 재설정"</button>
            </div>
        </ModalFrame>

        {move || match recovery.get() {
            Recovery::None => None,
            Recovery::FindId => Some(view! {
                <FindIdDialog
                    on_close=move |_| set_recovery.set(Recovery::None)
                    on_found=move |found: String| {
                        set_id.set(found);
                        set_mode.set(Mode::Login);
                        set_recovery.set(Recovery::None);
                    }
                />
            }.into_any()),
            Recovery::ResetPassword => Some(view! {
                <ResetPasswordDialog on_close=move |_| set_recovery.set(Recovery::None) />
            }.into_any()),
        }}
    }
}
