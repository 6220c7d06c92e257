//! Shared Problems Page
//!
//! Everything users have shared publicly, newest first. Works with or
//! without a session.

use leptos::*;

use crate::api;
use crate::components::{ListSkeleton, PublicProblemCard};
use crate::state::global::{GlobalState, Problem};
use crate::state::stats;

/// Public listing page component
#[component]
pub fn Shared() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (public_problems, set_public_problems) = create_signal(Vec::<Problem>::new());
    let (loading, set_loading) = create_signal(true);

    let state_for_effect = state;
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_public_problems().await {
                Ok(mut problems) => {
                    stats::sort_newest_first(&mut problems);
                    set_public_problems.set(problems);
                }
                Err(e) => {
                    state.show_error(&e.to_string());
                    set_public_problems.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Shared Problems"</h1>
                <p class="text-gray-400 mt-1">"What everyone has been solving, newest first"</p>
            </div>

            {move || {
                if loading.get() {
                    view! { <ListSkeleton count=4 /> }.into_view()
                } else {
                    let problems = public_problems.get();
                    if problems.is_empty() {
                        view! {
                            <p class="text-gray-400 py-8 text-center">
                                "No public problems shared yet."
                            </p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 gap-4">
                                {problems.into_iter().map(|problem| view! {
                                    <PublicProblemCard problem=problem />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}
