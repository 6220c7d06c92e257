//! Problem Card Components
//!
//! Renders one problem from the user's collection, with its flag
//! toggles, solution editor, and delete control — plus the read-only
//! card used on the public listing. All interactive controls route
//! through a single [`ProblemAction`] dispatch.

use leptos::*;

use crate::state::actions::{self, ProblemAction};
use crate::state::global::{GlobalState, Problem};

/// A problem card in the signed-in user's list
#[component]
pub fn ProblemCard(problem: Problem) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let id = problem.id.clone();
    let dispatch = Callback::new(move |action: ProblemAction| {
        spawn_local(actions::apply_problem_action(
            state.clone(),
            id.clone(),
            action,
        ));
    });

    let (show_solution, set_show_solution) = create_signal(false);
    let (solution_text, set_solution_text) =
        create_signal(problem.solution_code.clone().unwrap_or_default());

    let has_solution = problem.has_solution();
    let solved = problem.solved;
    let important = problem.important;
    let added = format_date(&problem.added_date);

    let on_delete = move |_| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this problem?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            dispatch.call(ProblemAction::Delete);
        }
    };

    let card_class = if solved {
        "bg-gray-800 rounded-xl p-4 border border-green-700"
    } else {
        "bg-gray-800 rounded-xl p-4 border border-gray-700"
    };

    let star_class = if important {
        "text-yellow-400 hover:text-yellow-300 text-xl"
    } else {
        "text-gray-500 hover:text-gray-300 text-xl"
    };

    view! {
        <div class=card_class>
            // Title row with important toggle
            <div class="flex items-start justify-between">
                <h3 class="font-semibold text-lg">{problem.name.clone()}</h3>
                <button
                    on:click=move |_| dispatch.call(ProblemAction::ToggleImportant)
                    title="Mark as important"
                    class=star_class
                >
                    "★"
                </button>
            </div>

            // Solved toggle
            <label class="flex items-center space-x-2 cursor-pointer mt-2">
                <input
                    type="checkbox"
                    prop:checked=solved
                    on:change=move |ev| {
                        dispatch.call(ProblemAction::SetSolved(event_target_checked(&ev)))
                    }
                />
                <span class="text-sm">"Solved"</span>
            </label>

            <ProblemDetails problem=problem.clone() />

            <div class="text-gray-500 text-xs mt-3">{format!("Added: {}", added)}</div>

            // Actions row
            <div class="flex items-center space-x-2 mt-3">
                <button
                    on:click=on_delete
                    class="px-3 py-2 bg-red-700 hover:bg-red-600 rounded-lg text-sm transition-colors"
                >
                    "🗑️ Delete"
                </button>
                <button
                    on:click=move |_| set_show_solution.update(|open| *open = !*open)
                    class="px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                >
                    {move || {
                        if show_solution.get() {
                            "Hide Solution"
                        } else if has_solution {
                            "View/Edit Solution"
                        } else {
                            "Add Solution"
                        }
                    }}
                </button>
            </div>

            // Collapsible solution editor
            {move || {
                if show_solution.get() {
                    view! {
                        <div class="mt-3 space-y-2">
                            <h4 class="text-sm text-gray-400">"Your Solution:"</h4>
                            <textarea
                                prop:value=move || solution_text.get()
                                on:input=move |ev| set_solution_text.set(event_target_value(&ev))
                                placeholder="Paste your code here..."
                                class="w-full bg-gray-900 rounded-lg px-3 py-2 font-mono text-sm h-40
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                            <button
                                on:click=move |_| {
                                    dispatch.call(ProblemAction::SaveSolution(solution_text.get()))
                                }
                                class="px-3 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                                       text-sm font-medium transition-colors"
                            >
                                "Save Solution"
                            </button>
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// A read-only card on the public listing
#[component]
pub fn PublicProblemCard(problem: Problem) -> impl IntoView {
    let author = problem
        .username
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| "Unknown User".to_string());
    let added = format_date(&problem.added_date);
    let solved = problem.solved;

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 relative">
            <div class="absolute top-3 right-3 bg-primary-700 text-xs px-2 py-0.5 rounded-full">
                "PUBLIC"
            </div>

            <h3 class="font-semibold text-lg pr-16">
                {problem.name.clone()}
                {solved.then(|| view! { <span class="ml-2">"✅"</span> })}
            </h3>
            <p class="text-gray-400 text-sm">{format!("By: {}", author)}</p>

            <ProblemDetails problem=problem.clone() />

            <div class="text-gray-500 text-xs mt-3">{format!("Added: {}", added)}</div>
        </div>
    }
}

/// The descriptive fields both card variants share
#[component]
fn ProblemDetails(problem: Problem) -> impl IntoView {
    view! {
        <div class="mt-2 space-y-1 text-sm">
            <p>
                <span class="text-gray-400">"Topic: "</span>
                {problem.topic.clone()}
            </p>
            <p>
                <span class="text-gray-400">"Difficulty: "</span>
                {problem.difficulty.clone()}
            </p>

            {present(problem.link.clone()).map(|link| view! {
                <p>
                    <span class="text-gray-400">"Link: "</span>
                    <a href=link target="_blank" class="text-primary-400 hover:underline">
                        "View Problem"
                    </a>
                </p>
            })}

            {present(problem.time_complexity.clone()).map(|tc| view! {
                <p>
                    <span class="text-gray-400">"Time Complexity: "</span>
                    {tc}
                </p>
            })}

            {present(problem.space_complexity.clone()).map(|sc| view! {
                <p>
                    <span class="text-gray-400">"Space Complexity: "</span>
                    {sc}
                </p>
            })}

            {present(problem.notes.clone()).map(|notes| view! {
                <p class="text-gray-300">
                    <span class="text-gray-400">"Notes: "</span>
                    {notes}
                </p>
            })}
        </div>
    }
}

/// Render a human date; fall back to the raw string if the server sent
/// something unexpected.
pub(crate) fn format_date(added: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(added)
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| added.to_string())
}

/// Drop both missing and empty-string field values before display
fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}
