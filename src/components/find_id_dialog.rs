//! Find-ID Dialog
//!
//! Email verification flow: send a code, verify it, show the account id.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_overlay::ModalFrame;

use crate::api;
use crate::models::CodeSent;

#[derive(Clone, Debug, PartialEq)]
enum Step {
    Send,
    Verify,
    Done(String),
}

/// Hint shown after a code was sent. Development servers echo the code back.
pub fn code_hint(sent: &CodeSent) -> String {
    let mut hint = "인증 코드를 보냈어요.".to_string();
    if let Some(secs) = sent.expires_in_sec {
        hint.push_str(&format!(" {}분 안에 입력하세요.", (secs + 59) / 60));
    }
    if let Some(code) = sent.dev_code.as_deref().filter(|c| !c.is_empty()) {
        hint.push_str(&format!(" (개발용 코드: {})", code));
    }
    hint
}

#[component]
pub fn FindIdDialog(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_found: Callback<String>,
) -> impl IntoView {
    let (step, set_step) = signal(Step::Send);
    let (email, set_email) = signal(String::new());
    let (user_name, set_user_name) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (hint, set_hint) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let send = move |_| {
        let address = email.get_untracked();
        if address.trim().is_empty() {
            set_error.set(Some("이메일을 입력하세요.".to_string()));
            return;
        }
        let name = user_name.get_untracked();
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::auth::send_find_id_code(&address, Some(&name)).await {
                Ok(sent) => {
                    set_hint.set(Some(code_hint(&sent)));
                    set_step.set(Step::Verify);
                }
                Err(e) => set_error.set(Some(e.message_or("인증 코드를 보내지 못했어요."))),
            }
            set_busy.set(false);
        });
    };

    let verify = move |_| {
        let (address, entered) = (email.get_untracked(), code.get_untracked());
        if entered.trim().is_empty() {
            set_error.set(Some("인증 코드를 입력하세요.".to_string()));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::auth::verify_find_id_code(&address, &entered).await {
                Ok(found) => set_step.set(Step::Done(found.user_id)),
                Err(e) => set_error.set(Some(e.message_or("인증에 실패했어요."))),
            }
            set_busy.set(false);
        });
    };

    view! {
        <ModalFrame
            title="아이디 찾기".to_string()
            desc="가입한 이메일로 인증 코드를 보내드려요.".to_string()
            on_close=on_close
        >
            {move || match step.get() {
                Step::Send => view! {
                    <div class="form">
                        <label class="field">
                            <span>"이메일"</span>
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"이름 (선택)"</span>
                            <input
                                type="text"
                                prop:value=move || user_name.get()
                                on:input=move |ev| set_user_name.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn primary wide" disabled=move || busy.get() on:click=send>
                            "인증 코드 받기"
                        </button>
                    </div>
                }.into_any(),
                Step::Verify => view! {
                    <div class="form">
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
                        <button class="btn primary wide" disabled=move || busy.get() on:click=verify>
                            "확인"
                        </button>
                    </div>
                }.into_any(),
                Step::Done(found) => {
                    let login_id = found.clone();
                    view! {
                        <div class="form">
                            <p class="found-id">"회원님의 아이디는 " <strong>{found}</strong> " 입니다."</p>
                            <button class="btn primary wide" on:click=move |_| on_found.run(login_id.clone())>
                                "이 아이디로 로그인"
                            </button>
                        </div>
                    }.into_any()
                }
            }}
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_hint() {
        let sent = CodeSent { ok: true, dev_code: Some("123456".to_string()), expires_in_sec: Some(300) };
        assert_eq!(code_hint(&sent), "인증 코드를 보냈어요. 5분 안에 입력하세요. (개발용 코드: 123456)");

        let plain = CodeSent { ok: true, dev_code: None, expires_in_sec: None };
        assert_eq!(code_hint(&plain), "인증 코드를 보냈어요.");
    }
}
