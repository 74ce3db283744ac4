//! NoxChrono Dashboard
//!
//! Single-page focus dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Stopwatch driven by `requestAnimationFrame`
//! - Today, weekly, leaderboard and friends panels (built-in content)
//! - Dark/light theme toggle
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It makes no network requests; all state lives in the page.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
