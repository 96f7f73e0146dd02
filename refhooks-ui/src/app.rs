//! App Root Component
//!
//! Page container with the three demo sections.

use leptos::*;

use crate::components::{FocusSection, NameSection, RenderCountSection};
use crate::state::{provide_demo_state, DemoState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_demo_state();
    let state = use_context::<DemoState>().expect("DemoState not found");
    let styles = state.styles;

    view! {
        <div style=styles.with_value(|s| s.container.to_css())>
            <h1>{state.heading.get_value()}</h1>
            <NameSection />
            <FocusSection />
            <RenderCountSection />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element<T: JsCast>(selector: &str) -> T {
        document()
            .query_selector(selector)
            .unwrap()
            .expect("element not found")
            .dyn_into::<T>()
            .unwrap()
    }

    fn active_id() -> Option<String> {
        document().active_element().map(|el| el.id())
    }

    fn body_text() -> String {
        document().body().unwrap().text_content().unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn test_submit_updates_badges_and_count() {
        mount_to_body(|| view! { <App /> });
        assert!(body_text().contains("This page was rendered 1 times."));

        let input = element::<web_sys::HtmlInputElement>("#name");
        let submit = element::<web_sys::HtmlElement>("button[type=submit]");

        input.set_value("Alice");
        submit.click();
        assert_eq!(input.value(), "");
        assert!(body_text().contains("This page was rendered 2 times."));

        input.set_value("Bob");
        submit.click();
        let text = body_text();
        assert!(text.contains("Your current name is Bob but you used to be called Alice."));
        assert!(text.contains("This page was rendered 3 times."));

        // Empty submit changes nothing
        submit.click();
        assert!(body_text().contains("This page was rendered 3 times."));

        // Focusing the field is not a render
        assert_ne!(active_id().as_deref(), Some("name"));
        element::<web_sys::HtmlElement>("section:nth-of-type(2) button").click();
        assert_eq!(active_id().as_deref(), Some("name"));
        assert!(body_text().contains("This page was rendered 3 times."));
    }
}
