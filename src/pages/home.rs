//! Home Page
//!
//! Landing view with a short tour of what the tracker does.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = state.session;

    view! {
        <div class="space-y-8">
            <div class="text-center py-12">
                <div class="text-6xl mb-4">"📚"</div>
                <h1 class="text-4xl font-bold mb-2">"Studylog"</h1>
                <p class="text-gray-400 max-w-xl mx-auto">
                    "Track your coding-practice problems, keep your class notes in one "
                    "place, and watch your per-topic progress add up."
                </p>

                {move || {
                    if session.get().is_none() {
                        view! {
                            <div class="mt-6 space-x-3">
                                <A
                                    href="/register"
                                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                                >
                                    "Get Started"
                                </A>
                                <A
                                    href="/login"
                                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                                >
                                    "Log In"
                                </A>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="mt-6">
                                <A
                                    href="/progress"
                                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                                >
                                    "Go to My Progress"
                                </A>
                            </div>
                        }.into_view()
                    }
                }}
            </div>

            <div class="grid md:grid-cols-3 gap-4">
                <FeatureCard
                    icon="🧩"
                    title="Problem Log"
                    text="Record topic, difficulty, complexity, and your own solution code."
                />
                <FeatureCard
                    icon="📈"
                    title="Statistics"
                    text="Completion percentage and a per-topic breakdown, always up to date."
                />
                <FeatureCard
                    icon="🌍"
                    title="Shared Problems"
                    text="Browse what other users have been solving lately."
                />
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 text-center">
            <div class="text-3xl mb-2">{icon}</div>
            <h3 class="font-semibold mb-1">{title}</h3>
            <p class="text-sm text-gray-400">{text}</p>
        </div>
    }
}
