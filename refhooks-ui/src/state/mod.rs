//! State Management
//!
//! The demo component held in a stored value, and the rendered frame
//! published through a signal.

pub mod demo;
pub mod input_ref;

pub use demo::{provide_demo_state, DemoState};
pub use input_ref::InputRef;
