//! refhooks page
//!
//! Browser front-end for the mutable reference demo, built with Leptos (WASM).
//!
//! # Sections
//!
//! - Previous name tracking with a submit form
//! - Focusing the name field through an element handle
//! - Counting page renders
//!
//! # Architecture
//!
//! Client-side rendered Leptos application. Component state and its render
//! and effect rules live in the `refhooks` crate; this crate binds the
//! rendered frame to the DOM and forwards clicks.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
