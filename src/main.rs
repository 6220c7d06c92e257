//! Studylog
//!
//! Personal study tracker built with Leptos (WASM).
//!
//! # Features
//!
//! - Log coding-practice problems with topic, difficulty, and solution code
//! - Keep class notes with links and remarks
//! - Aggregate statistics and a per-topic completion breakdown
//! - Browse problems other users have shared publicly
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistence and authentication live in a remote HTTP
//! JSON API; this client keeps a disposable in-memory mirror of the server
//! collections and rebuilds it after every mutation.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
