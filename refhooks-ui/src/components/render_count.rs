//! Render Count Section

use leptos::*;

use super::Section;
use crate::state::demo::DemoState;

#[component]
pub fn RenderCountSection() -> impl IntoView {
    let state = use_context::<DemoState>().expect("DemoState not found");
    let frame = state.frame;

    view! {
        <Section title="3. Using useRef to count the number of times the page rendered">
            <div>
                {move || format!("This page was rendered {} times.", frame.with(|f| f.render_count))}
            </div>
        </Section>
    }
}
