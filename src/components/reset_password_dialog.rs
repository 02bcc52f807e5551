//! Reset Password Dialog

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_overlay::ModalFrame;

use crate::api;
use crate::components::find_id_dialog::code_hint;
use crate::context::use_app_context;

pub const MIN_PASSWORD_LEN: usize = 4;

/// Validate the new password pair before calling the server
pub fn check_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.trim().chars().count() < MIN_PASSWORD_LEN {
        return Err("비밀번호는 4자 이상이어야 해요.");
    }
    if password != confirm {
        return Err("비밀번호가 일치하지 않아요.");
    }
    Ok(())
}

#[component]
pub fn ResetPasswordDialog(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (code_sent, set_code_sent) = signal(false);
    let (id, set_id) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (hint, set_hint) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let send = move |_| {
        let (login_id, address) = (id.get_untracked(), email.get_untracked());
        if login_id.trim().is_empty() || address.trim().is_empty() {
            set_error.set(Some("아이디와 이메일을 입력하세요.".to_string()));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::auth::send_find_password_code(&login_id, &address).await {
                Ok(sent) => {
                    set_hint.set(Some(code_hint(&sent)));
                    set_code_sent.set(true);
                }
                Err(e) => set_error.set(Some(e.message_or("인증 코드를 보내지 못했어요."))),
            }
            set_busy.set(false);
        });
    };

    let submit = move |_| {
        let (pw, pw2) = (new_password.get_untracked(), confirm.get_untracked());
        if let Err(msg) = check_new_password(&pw, &pw2) {
            set_error.set(Some(msg.to_string()));
            return;
        }
        let (login_id, address, entered) = (id.get_untracked(), email.get_untracked(), code.get_untracked());
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::auth::set_new_password(&login_id, &address, &entered, &pw).await {
                Ok(_) => {
                    ctx.toast_ok("비밀번호가 변경되었습니다. 다시 로그인하세요.");
                    on_close.run(());
                }
                Err(e) => set_error.set(Some(e.message_or("비밀번호를 변경하지 못했어요."))),
            }
            set_busy.set(false);
        });
    };

    view! {
        <ModalFrame title="비밀번호 재설정".to_string() on_close=on_close>
            <div class="form">
                <label class="field">
                    <span>"아이디"</span>
                    <input
                        type="text"
                        disabled=move || code_sent.get()
                        prop:value=move || id.get()
                        on:input=move |ev| set_id.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"이메일"</span>
                    <input
                        type="email"
                        disabled=move || code_sent.get()
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <Show
                    when=move || code_sent.get()
                    fallback=move || view! {
                        <button class="btn primary wide" disabled=move || busy.get() on:click=send>
                            "인증 코드 받기"
                        </button>
                    }
                >
                    {move || hint.get().map(|h| view! { <p class="form-hint">{h}</p> })}
                    <label class="field">
                        <span>"인증 코드"</span>
                        <input
                            type="text"
                            inputmode="numeric"
                            prop:value=move || code.get()
                            on:input=move |ev| set_code.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"새 비밀번호"</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"새 비밀번호 확인"</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn primary wide" disabled=move || busy.get() on:click=submit>
                        "비밀번호 변경"
                    </button>
                </Show>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_new_password() {
        assert!(check_new_password("abcd", "abcd").is_ok());
        assert_eq!(check_new_password("abc", "abc"), Err("비밀번호는 4자 이상이어야 해요."));
        assert_eq!(check_new_password("abcd", "abce"), Err("비밀번호가 일치하지 않아요."));
    }
}
