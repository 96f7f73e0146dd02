//! Name Field Handle
//!
//! Lets the component read, clear, and focus the DOM input through its
//! `NodeRef`. Before the input is mounted the handle reports itself as not
//! live and every operation is skipped.

use leptos::*;
use refhooks::TextField;

/// `TextField` over the name `<input>`
#[derive(Clone, Copy)]
pub struct InputRef(pub NodeRef<html::Input>);

impl TextField for InputRef {
    fn value(&self) -> String {
        self.0
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn set_value(&mut self, text: &str) {
        if let Some(input) = self.0.get_untracked() {
            input.set_value(text);
        }
    }

    fn focus(&mut self) {
        if let Some(input) = self.0.get_untracked() {
            if let Err(e) = input.focus() {
                web_sys::console::error_1(&format!("Failed to focus name field: {:?}", e).into());
            }
        }
    }

    fn is_focused(&self) -> bool {
        let Some(input) = self.0.get_untracked() else {
            return false;
        };
        let element: &web_sys::Element = &input;
        document()
            .active_element()
            .map(|active| &active == element)
            .unwrap_or(false)
    }

    fn is_live(&self) -> bool {
        self.0.get_untracked().is_some()
    }
}
