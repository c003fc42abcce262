//! Toolbar template picker
//!
//! A searchable list of every template, opened with Ctrl+T. Picking one
//! replaces the draft with the template content.

mod matcher;
pub mod picker_events;
pub mod picker_render;
mod picker_state;

pub use picker_state::{MAX_VISIBLE_TEMPLATES, TemplatePicker};
