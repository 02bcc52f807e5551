//! Delete Account Dialog

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_overlay::ModalFrame;

use crate::api;
use crate::context::use_app_context;
use crate::store::{store_sign_out, use_app_store};

#[component]
pub fn DeleteAccountDialog(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (pw, pw2) = (password.get_untracked(), confirm.get_untracked());
        if pw.is_empty() || pw2.is_empty() {
            set_error.set(Some("비밀번호를 입력하세요.".to_string()));
            return;
        }
        if pw != pw2 {
            set_error.set(Some("비밀번호가 일치하지 않아요.".to_string()));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::auth::delete_me(&pw, &pw2).await {
                Ok(()) => {
                    log::info!("account deleted");
                    store_sign_out(&store);
                    ctx.toast_ok("탈퇴가 완료되었어요.");
                    on_close.run(());
                }
                Err(e) => set_error.set(Some(e.message_or("탈퇴하지 못했어요."))),
            }
            set_busy.set(false);
        });
    };

    view! {
        <ModalFrame
            title="회원 탈퇴".to_string()
            desc="탈퇴하면 냉장고와 요리 기록이 모두 삭제돼요.".to_string()
            on_close=on_close
            class="danger"
        >
            <form class="form" on:submit=submit>
                <label class="field">
                    <span>"비밀번호"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"비밀번호 확인"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <div class="form-actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>"취소"</button>
                    <button type="submit" class="btn danger" disabled=move || busy.get()>"탈퇴하기"</button>
                </div>
            </form>
        </ModalFrame>
    }
}
