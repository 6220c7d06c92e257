//! Toast Notifications
//!
//! Transient feedback driven by the `success` and `error` signals on
//! [`GlobalState`]. Toasts carry no dismiss control: `show_success`
//! and `show_error` arm a timeout that clears the signal again (three
//! seconds for successes, five for errors), so each toast disappears
//! on its own.

use leptos::*;

use crate::state::global::GlobalState;

/// Anchored container rendering whichever messages are currently set
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || success.get().map(|msg| toast_card("✓", "bg-green-600", msg))}
            {move || error.get().map(|msg| toast_card("✕", "bg-red-600", msg))}
        </div>
    }
}

fn toast_card(icon: &'static str, bg_class: &'static str, message: String) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
