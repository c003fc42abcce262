//! Application shell
//!
//! Wires the composer to the inbox host, routes terminal events and draws
//! the frame.

mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

pub use app_state::App;
