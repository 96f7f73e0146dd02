//! UI Components
//!
//! One component per demo section plus the name badge.

pub mod badge;
pub mod focus_section;
pub mod name_section;
pub mod render_count;
pub mod section;

pub use badge::{Badge, BadgeVariant};
pub use focus_section::FocusSection;
pub use name_section::NameSection;
pub use render_count::RenderCountSection;
pub use section::Section;
