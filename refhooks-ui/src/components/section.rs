//! Section Component

use leptos::*;

use crate::state::demo::DemoState;

/// Titled page section
#[component]
pub fn Section(
    /// Section heading
    title: &'static str,
    children: Children,
) -> impl IntoView {
    let state = use_context::<DemoState>().expect("DemoState not found");

    view! {
        <section style=state.styles.with_value(|s| s.section.to_css())>
            <h2>{title}</h2>
            {children()}
        </section>
    }
}
