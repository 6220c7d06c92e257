//! Loading Placeholders
//!
//! Shown while a collection mirror is being rebuilt from the server:
//! a spinner for the problem list, pulsing skeleton rows for notes.

use leptos::*;

/// Centered spinner for a list that is still being fetched
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Placeholder rows standing in for cards that have not arrived yet
#[component]
pub fn ListSkeleton(
    #[prop(default = 4)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count)
                .map(|_| view! { <div class="bg-gray-700 rounded-xl h-14" /> })
                .collect_view()}
        </div>
    }
}
