//! Note Form Component
//!
//! Form for adding a new class note.

use leptos::*;

use crate::components::problem_form::non_blank;
use crate::state::actions;
use crate::state::global::{GlobalState, Note};

/// Note entry form component
#[component]
pub fn NoteForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (title, set_title) = create_signal(String::new());
    let (topic, set_topic) = create_signal(String::new());
    let (link, set_link) = create_signal(String::new());
    let (remarks, set_remarks) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let note = Note {
            title: title.get(),
            topic: topic.get(),
            link: non_blank(link.get()),
            remarks: non_blank(remarks.get()),
            added_date: chrono::Utc::now().to_rfc3339(),
            ..Note::default()
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match actions::add_note(&state_clone, note).await {
                Ok(()) => {
                    state_clone.show_success("Note added");
                    set_title.set(String::new());
                    set_topic.set(String::new());
                    set_link.set(String::new());
                    set_remarks.set(String::new());
                }
                Err(e) => {
                    state_clone.show_error(&e.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                    <input
                        type="text"
                        required=true
                        placeholder="e.g. Graph traversal lecture"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Topic"</label>
                    <input
                        type="text"
                        required=true
                        placeholder="e.g. Graphs"
                        prop:value=move || topic.get()
                        on:input=move |ev| set_topic.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Link (optional)"</label>
                <input
                    type="text"
                    placeholder="https://..."
                    prop:value=move || link.get()
                    on:input=move |ev| set_link.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Remarks (optional)"</label>
                <textarea
                    prop:value=move || remarks.get()
                    on:input=move |ev| set_remarks.set(event_target_value(&ev))
                    placeholder="What to remember from this one..."
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white h-24
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors"
            >
                {move || if submitting.get() { "Saving..." } else { "Add Note" }}
            </button>
        </form>
    }
}
