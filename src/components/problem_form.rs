//! Problem Form Component
//!
//! Form for logging a new practice problem.

use leptos::*;

use crate::state::actions;
use crate::state::global::{GlobalState, Problem, DIFFICULTIES};

/// Problem entry form component
#[component]
pub fn ProblemForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (link, set_link) = create_signal(String::new());
    let (topic, set_topic) = create_signal(String::new());
    let (difficulty, set_difficulty) = create_signal("Easy".to_string());
    let (time_complexity, set_time_complexity) = create_signal(String::new());
    let (space_complexity, set_space_complexity) = create_signal(String::new());
    let (notes, set_notes) = create_signal(String::new());
    let (solved, set_solved) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let problem = Problem {
            name: name.get(),
            link: non_blank(link.get()),
            topic: topic.get(),
            difficulty: difficulty.get(),
            time_complexity: non_blank(time_complexity.get()),
            space_complexity: non_blank(space_complexity.get()),
            notes: non_blank(notes.get()),
            solved: solved.get(),
            added_date: chrono::Utc::now().to_rfc3339(),
            ..Problem::default()
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match actions::add_problem(&state_clone, problem).await {
                Ok(()) => {
                    state_clone.show_success("Problem added");
                    set_name.set(String::new());
                    set_link.set(String::new());
                    set_topic.set(String::new());
                    set_difficulty.set("Easy".to_string());
                    set_time_complexity.set(String::new());
                    set_space_complexity.set(String::new());
                    set_notes.set(String::new());
                    set_solved.set(false);
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
            <TextField label="Problem Name" placeholder="e.g. Two Sum"
                required=true value=name set_value=set_name />
            <TextField label="Problem Link (optional)" placeholder="https://..."
                value=link set_value=set_link />
            <TextField label="Topic" placeholder="e.g. Arrays, Dynamic Programming"
                required=true value=topic set_value=set_topic />

            // Difficulty radio group
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Difficulty"</label>
                <div class="flex space-x-4">
                    {DIFFICULTIES.into_iter().map(|level| view! {
                        <label class="flex items-center space-x-2 cursor-pointer">
                            <input
                                type="radio"
                                name="difficulty"
                                value=level
                                prop:checked=move || difficulty.get() == level
                                on:change=move |_| set_difficulty.set(level.to_string())
                            />
                            <span>{level}</span>
                        </label>
                    }).collect_view()}
                </div>
            </div>

            <div class="grid md:grid-cols-2 gap-4">
                <TextField label="Time Complexity (optional)" placeholder="e.g. O(n)"
                    value=time_complexity set_value=set_time_complexity />
                <TextField label="Space Complexity (optional)" placeholder="e.g. O(1)"
                    value=space_complexity set_value=set_space_complexity />
            </div>

            // Free-text notes
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Notes (optional)"</label>
                <textarea
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                    placeholder="Approach, pitfalls, things to remember..."
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white h-24
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Already solved checkbox
            <label class="flex items-center space-x-2 cursor-pointer">
                <input
                    type="checkbox"
                    prop:checked=move || solved.get()
                    on:change=move |ev| set_solved.set(event_target_checked(&ev))
                />
                <span>"Already solved"</span>
            </label>

            // Submit button
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submitting.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Saving..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Add Problem"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}

#[component]
fn TextField(
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)]
    required: bool,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="text"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

/// Treat whitespace-only input as absent
pub(crate) fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
