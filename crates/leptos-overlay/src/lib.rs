//! Leptos Overlay Utilities
//!
//! Modal frame, confirm dialog and toast shared by the CookUs and storefront apps.
//! Overlays close on backdrop click and on Escape.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// How long a toast stays visible by default
pub const TOAST_MS: i32 = 1800;

/// Toast flavour, mapped to a CSS modifier class
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Ok,
    Warn,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Ok => "toast ok",
            ToastKind::Warn => "toast warn",
        }
    }
}

/// Toast state signals
#[derive(Clone, Copy)]
pub struct ToastSignals {
    pub message_read: ReadSignal<Option<String>>,
    pub message_write: WriteSignal<Option<String>>,
    pub kind_read: ReadSignal<ToastKind>,
    pub kind_write: WriteSignal<ToastKind>,
    /// Bumped on every show so an older timer cannot hide a newer toast
    seq_read: ReadSignal<u32>,
    seq_write: WriteSignal<u32>,
}

pub fn create_toast_signals() -> ToastSignals {
    let (message_read, message_write) = signal(None::<String>);
    let (kind_read, kind_write) = signal(ToastKind::Ok);
    let (seq_read, seq_write) = signal(0u32);
    ToastSignals {
        message_read,
        message_write,
        kind_read,
        kind_write,
        seq_read,
        seq_write,
    }
}

/// Show a toast and hide it again after `ms` milliseconds
pub fn show_toast(toast: &ToastSignals, message: impl Into<String>, kind: ToastKind, ms: i32) {
    toast.kind_write.set(kind);
    toast.message_write.set(Some(message.into()));
    toast.seq_write.update(|s| *s = s.wrapping_add(1));
    let seq = toast.seq_read.get_untracked();

    if let Some(win) = web_sys::window() {
        let clear = *toast;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            if clear.seq_read.get_untracked() == seq {
                clear.message_write.set(None);
            }
        });
        if win
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
            .is_err()
        {
            log::warn!("could not schedule toast dismissal");
        }
        cb.forget();
    }
}

/// Renders the current toast, if any
#[component]
pub fn ToastHost(toast: ToastSignals) -> impl IntoView {
    view! {
        {move || toast.message_read.get().map(|msg| view! {
            <div class=move || toast.kind_read.get().class()>{msg}</div>
        })}
    }
}

/// Close the enclosing overlay when Escape is pressed
fn bind_escape(on_close: Callback<()>) {
    let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());
}

/// Modal frame with title, optional description and a close button.
///
/// Clicking the backdrop or pressing Escape calls `on_close`.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] desc: Option<Signal<String>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    bind_escape(on_close);
    let modal_class = match class {
        Some(extra) => format!("modal {}", extra),
        None => "modal".to_string(),
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=modal_class on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <button class="modal-x" on:click=move |_| on_close.run(())>"×"</button>
                <h3 class="modal-title">{move || title.get()}</h3>
                {desc.map(|d| view! { <p class="modal-desc">{move || d.get()}</p> })}
                {children()}
            </div>
        </div>
    }
}

/// Small confirmation overlay with cancel / confirm actions
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(optional, into)] meta: Option<String>,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    bind_escape(on_cancel);

    view! {
        <div class="confirm-overlay" on:click=move |_| on_cancel.run(())>
            <div class="confirm" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <div class="confirm-title">{title}</div>
                {meta.map(|m| view! { <div class="confirm-meta clamp-1">{m}</div> })}
                <div class="confirm-actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"취소"</button>
                    <button class="btn primary" on:click=move |_| on_confirm.run(())>{confirm_label}</button>
                </div>
            </div>
        </div>
    }
}
