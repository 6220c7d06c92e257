//! Note Card Component
//!
//! Renders a single class note with its delete control.

use leptos::*;

use crate::components::problem_card::format_date;
use crate::state::actions;
use crate::state::global::{GlobalState, Note};

/// A class-note card
#[component]
pub fn NoteCard(note: Note) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let id = note.id.clone();
    let added = format_date(&note.added_date);
    let link = note.link.clone().filter(|l| !l.trim().is_empty());
    let remarks = note.remarks.clone().filter(|r| !r.trim().is_empty());

    let on_delete = move |_| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this note?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            spawn_local(actions::remove_note(state.clone(), id.clone()));
        }
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <h3 class="font-semibold text-lg">{note.title.clone()}</h3>

            <div class="mt-2 space-y-1 text-sm">
                <p>
                    <span class="text-gray-400">"Topic: "</span>
                    {note.topic.clone()}
                </p>

                {link.map(|url| view! {
                    <p>
                        <span class="text-gray-400">"Link: "</span>
                        <a href=url target="_blank" class="text-primary-400 hover:underline">
                            "View Note"
                        </a>
                    </p>
                })}

                {remarks.map(|text| view! {
                    <p class="text-gray-300">
                        <span class="text-gray-400">"Remarks: "</span>
                        {text}
                    </p>
                })}
            </div>

            <div class="flex items-center justify-between mt-3">
                <span class="text-gray-500 text-xs">{format!("Added: {}", added)}</span>
                <button
                    on:click=on_delete
                    class="px-3 py-2 bg-red-700 hover:bg-red-600 rounded-lg text-sm transition-colors"
                >
                    "🗑️ Delete"
                </button>
            </div>
        </div>
    }
}
