//! Class Notes Page
//!
//! The signed-in user's notes: entry form and note list.

use leptos::*;

use crate::components::{ListSkeleton, NoteCard, NoteForm};
use crate::state::actions;
use crate::state::global::GlobalState;

/// Class notes page component
#[component]
pub fn ClassNotes() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let notes = state.notes;
    let loading = state.loading;
    let session = state.session;

    // Rebuild the note mirror on entry, unless the startup load is
    // already doing so
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            if !actions::should_refresh(
                state.session.get_untracked().as_ref(),
                state.loading.get_untracked(),
            ) {
                return;
            }
            state.loading.set(true);
            if let Err(e) = actions::refresh_notes(&state).await {
                state.show_error(&e.to_string());
            }
            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Class Notes"</h1>
                <p class="text-gray-400 mt-1">"Lecture notes, links, and reminders"</p>
            </div>

            {move || {
                if session.get().is_none() {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-4 border border-yellow-700 text-yellow-300">
                            "Please log in to keep notes."
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Entry form
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Add a Note"</h2>
                <NoteForm />
            </section>

            // Note list
            <section>
                <h2 class="text-lg font-semibold mb-4">"Your Notes"</h2>

                {move || {
                    if loading.get() {
                        view! { <ListSkeleton /> }.into_view()
                    } else {
                        let all = notes.get();
                        if all.is_empty() {
                            view! {
                                <p class="text-gray-400 py-8 text-center">
                                    "No notes added yet. Use the form above to get started!"
                                </p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 gap-4">
                                    {all.into_iter().map(|note| view! {
                                        <NoteCard note=note />
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
