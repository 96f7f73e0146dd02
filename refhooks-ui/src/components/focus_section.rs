//! Focus Section

use leptos::*;

use super::Section;
use crate::state::demo::DemoState;

#[component]
pub fn FocusSection() -> impl IntoView {
    let state = use_context::<DemoState>().expect("DemoState not found");

    view! {
        <Section title="2. Using useRef to reference the name input box">
            <button on:click=move |_| state.request_focus()>
                "Click me to focus on name field"
            </button>
        </Section>
    }
}
