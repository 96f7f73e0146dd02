//! Demo State
//!
//! The `NameDemo` component lives in a `StoredValue`, so mutating it never
//! notifies anything. Each render pass publishes a new `Frame` through the
//! `frame` signal, which is the only thing the view subscribes to. Effects
//! run right after the signal update has been applied to the DOM.

use leptos::*;
use refhooks::{Frame, NameDemo, Stylesheet, SubmitEvent, Theme};

use super::InputRef;

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct DemoState {
    /// Component state and rules
    pub demo: StoredValue<NameDemo<InputRef>>,
    /// Last rendered frame
    pub frame: RwSignal<Frame>,
    /// Page styles derived from the theme
    pub styles: StoredValue<Stylesheet>,
    pub heading: StoredValue<String>,
    /// Handle to the name `<input>`
    pub name_input: NodeRef<html::Input>,
}

/// Provide demo state to the component tree and run the mount pass
pub fn provide_demo_state() {
    let theme = Theme::default();
    let name_input = create_node_ref::<html::Input>();
    let demo = NameDemo::new().with_input(InputRef(name_input));

    web_sys::console::log_1(&"page rendering".into());
    let initial = demo.render();

    let state = DemoState {
        demo: store_value(demo),
        frame: create_rw_signal(initial),
        styles: store_value(Stylesheet::new(&theme)),
        heading: store_value(theme.heading),
        name_input,
    };
    state.run_effects();

    provide_context(state);
}

impl DemoState {
    /// "Submit" click handler
    pub fn submit(&self, ev: web_sys::MouseEvent) {
        ev.prevent_default();

        let mut event = SubmitEvent::new();
        let mut pending = false;
        self.demo.update_value(|demo| {
            demo.submit(&mut event);
            pending = demo.take_pending_render();
        });

        if pending {
            self.render_pass();
        }
    }

    /// Focus button click handler
    pub fn request_focus(&self) {
        self.demo.update_value(|demo| demo.request_focus());
    }

    fn render_pass(&self) {
        web_sys::console::log_1(&"page rendering".into());
        let frame = self.demo.with_value(|demo| demo.render());
        self.frame.set(frame);
        self.run_effects();
    }

    fn run_effects(&self) {
        let mut fired = Vec::new();
        self.demo.update_value(|demo| fired = demo.after_render());

        if fired.contains(&"count-renders") {
            web_sys::console::log_1(&"counting page render".into());
        }
    }
}
