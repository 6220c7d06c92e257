//! My Progress Page
//!
//! The signed-in user's problem log: entry form, aggregate statistics,
//! per-topic breakdown, search, and the problem list itself.

use leptos::*;

use crate::components::{Loading, ProblemCard, ProblemForm, StatCard};
use crate::state::actions;
use crate::state::global::GlobalState;
use crate::state::stats;

/// Progress page component
#[component]
pub fn Progress() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let problems = state.problems;
    let search = state.search;
    let loading = state.loading;
    let session = state.session;

    // Clear any stale filter and rebuild the mirror on entry. The
    // startup load already fetches both collections, so a cold start
    // landing here defers to it instead of fetching twice.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        state_for_effect.search.set(String::new());

        let state = state_for_effect.clone();
        spawn_local(async move {
            if !actions::should_refresh(
                state.session.get_untracked().as_ref(),
                state.loading.get_untracked(),
            ) {
                return;
            }
            state.loading.set(true);
            if let Err(e) = actions::refresh_problems(&state).await {
                state.show_error(&e.to_string());
            }
            state.loading.set(false);
        });
    });

    let summary = create_memo(move |_| stats::summarize(&problems.get()));
    let breakdown = create_memo(move |_| stats::topic_breakdown(&problems.get()));
    let filtered = create_memo(move |_| stats::filter_problems(&problems.get(), &search.get()));

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"My Progress"</h1>
                <p class="text-gray-400 mt-1">"Your practice problems at a glance"</p>
            </div>

            // Anonymous visitors get a prompt instead of data
            {move || {
                if session.get().is_none() {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-4 border border-yellow-700 text-yellow-300">
                            "Please log in to track your problems."
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Entry form
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Add a Problem"</h2>
                <ProblemForm />
            </section>

            // Summary statistics
            <section>
                <h2 class="text-lg font-semibold mb-4">"Statistics"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <StatCard
                        label="Total Problems"
                        value=Signal::derive(move || summary.get().total.to_string())
                    />
                    <StatCard
                        label="Solved"
                        value=Signal::derive(move || summary.get().solved.to_string())
                    />
                    <StatCard
                        label="Important"
                        value=Signal::derive(move || summary.get().important.to_string())
                    />
                    <StatCard
                        label="Completion"
                        value=Signal::derive(move || {
                            format!("{:.1}%", summary.get().completion_pct)
                        })
                    />
                </div>
            </section>

            // Per-topic breakdown
            <section>
                <h2 class="text-lg font-semibold mb-4">"Topic Breakdown"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                    {move || {
                        let groups = breakdown.get();
                        if groups.is_empty() {
                            view! {
                                <p class="col-span-full text-gray-400">
                                    "Add problems to see topic breakdown."
                                </p>
                            }.into_view()
                        } else {
                            groups.into_iter().map(|group| {
                                let pct = group.percentage();
                                view! {
                                    <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                        <h3 class="font-semibold">{group.topic.clone()}</h3>
                                        <p class="text-sm text-gray-400 mt-1">
                                            {format!("Solved: {} / {}", group.solved, group.total)}
                                        </p>
                                        <div class="w-full bg-gray-700 rounded-full h-2 mt-2">
                                            <div
                                                class="bg-primary-500 h-2 rounded-full"
                                                style=format!("width: {:.1}%", pct)
                                            />
                                        </div>
                                        <p class="text-sm text-gray-400 mt-1">
                                            {format!("{:.1}% Complete", pct)}
                                        </p>
                                    </div>
                                }
                            }).collect_view()
                        }
                    }}
                </div>
            </section>

            // Search + problem list
            <section>
                <h2 class="text-lg font-semibold mb-4">"Problems"</h2>

                <input
                    type="text"
                    placeholder="Search by name, topic, notes, or complexity..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white mb-4
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        let visible = filtered.get();
                        if visible.is_empty() {
                            let message = if problems.get().is_empty() {
                                "No problems yet. Add your first one above!"
                            } else {
                                "No matching problems found. Try a different search!"
                            };
                            view! {
                                <p class="text-gray-400 py-8 text-center">{message}</p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 gap-4">
                                    {visible.into_iter().map(|problem| view! {
                                        <ProblemCard problem=problem />
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                }}
            </section>
        </div>
    }
}
