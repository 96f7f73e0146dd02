//! Name Badge Component
//!
//! Inline badge for the current and previous name. Both variants share one
//! layout; the previous name badge only swaps the background.

use leptos::*;

use crate::state::demo::DemoState;

#[derive(Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    Current,
    Previous,
}

/// Inline name badge
#[component]
pub fn Badge(
    #[prop(into)]
    text: Signal<String>,
    variant: BadgeVariant,
) -> impl IntoView {
    let state = use_context::<DemoState>().expect("DemoState not found");
    let style = state.styles.with_value(|s| match variant {
        BadgeVariant::Current => s.current_badge.to_css(),
        BadgeVariant::Previous => s.previous_badge.to_css(),
    });

    view! {
        <div style=style>{move || text.get()}</div>
    }
}
