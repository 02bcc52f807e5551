//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_overlay::{show_toast, ToastKind, ToastSignals, TOAST_MS};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub toast: ToastSignals,
    /// Trigger to reload the fridge from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the fridge from the backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(toast: ToastSignals, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            toast,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the fridge
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn toast_ok(&self, message: impl Into<String>) {
        show_toast(&self.toast, message, ToastKind::Ok, TOAST_MS);
    }

    pub fn toast_warn(&self, message: impl Into<String>) {
        show_toast(&self.toast, message, ToastKind::Warn, TOAST_MS);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
