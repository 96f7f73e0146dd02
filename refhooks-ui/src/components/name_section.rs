//! Previous Name Section
//!
//! Name form plus the sentence showing the current and previous name.

use leptos::*;

use super::{Badge, BadgeVariant, Section};
use crate::state::demo::DemoState;

#[component]
pub fn NameSection() -> impl IntoView {
    let state = use_context::<DemoState>().expect("DemoState not found");
    let styles = state.styles;
    let frame = state.frame;
    let name_input = state.name_input;

    let current = Signal::derive(move || frame.with(|f| f.current_name.clone()));
    let previous = Signal::derive(move || frame.with(|f| f.previous_name.clone()));

    view! {
        <Section title="1. Using useRef to keep track of the previous name">
            <label for="name" style=styles.with_value(|s| s.label.to_css())>"Name:"</label>
            <input
                id="name"
                type="text"
                node_ref=name_input
                style=styles.with_value(|s| s.input.to_css())
            />
            <button type="submit" on:click=move |ev| state.submit(ev)>
                "Submit"
            </button>
            <div>
                "Your current name is "
                <Badge text=current variant=BadgeVariant::Current />
                " but you used to be called "
                <Badge text=previous variant=BadgeVariant::Previous />
                "."
            </div>
        </Section>
    }
}
