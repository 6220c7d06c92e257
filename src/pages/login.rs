//! Login Page
//!
//! Credential form; success stores the session and re-initializes
//! application state in place (no page reload).

use leptos::*;
use leptos_router::*;

use crate::state::actions;
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();

        set_submitting.set(true);
        set_error.set(None);

        let state_clone = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match actions::log_in(&state_clone, &user, &pass).await {
                Ok(greeting) => {
                    state_clone.show_success(&greeting);
                    navigate("/progress", Default::default());
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto">
            <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                <h1 class="text-2xl font-bold mb-4">"Log In"</h1>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Inline failure message
                    {move || error.get().map(|msg| view! {
                        <p class="text-red-400 text-sm">{msg}</p>
                    })}

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>

                <p class="text-sm text-gray-400 mt-4">
                    "No account yet? "
                    <A href="/register" class="text-primary-400 hover:underline">
                        "Register here"
                    </A>
                </p>
            </div>
        </div>
    }
}
