//! Stat Card Component
//!
//! Displays a single aggregate statistic.

use leptos::*;

/// Stat card component
#[component]
pub fn StatCard(
    /// Label under the number
    label: &'static str,
    /// Reactive value to display
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 text-center">
            <div class="text-3xl font-bold">
                {move || value.get()}
            </div>
            <div class="text-gray-400 text-sm mt-1">{label}</div>
        </div>
    }
}
