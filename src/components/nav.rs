//! Navigation Component
//!
//! Header navigation bar with links and the session controls.

use leptos::*;
use leptos_router::*;

use crate::state::actions;
use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = state.session;

    let navigate = use_navigate();
    let state_for_logout = state.clone();
    let on_logout = move |_| {
        actions::log_out(&state_for_logout);
        navigate("/", Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"📚"</span>
                        <span class="text-xl font-bold text-white">"Studylog"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/progress" label="My Progress" />
                        <NavLink href="/notes" label="Class Notes" />
                        <NavLink href="/shared" label="Shared" />
                    </div>

                    // Session controls
                    <div class="flex items-center space-x-2">
                        {move || {
                            match session.get() {
                                Some(s) => view! {
                                    <span class="text-sm text-gray-300">
                                        "Welcome, "
                                        <span class="font-semibold text-white">{s.username}</span>
                                    </span>
                                    <button
                                        on:click=on_logout.clone()
                                        class="px-4 py-2 rounded-lg text-gray-300 hover:text-white
                                               hover:bg-gray-700 transition-colors"
                                    >
                                        "Logout"
                                    </button>
                                }.into_view(),
                                None => view! {
                                    <NavLink href="/login" label="Login" />
                                    <NavLink href="/register" label="Register" />
                                }.into_view(),
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
