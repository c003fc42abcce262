//! Inline suggestions
//!
//! Holds the transient candidate list shown above the composer, the matcher
//! that produces it from the composer's text, and the popup that renders it.

mod matcher;
pub mod suggestion_render;
mod suggestion_state;

pub use matcher::{match_templates, template_matches};
pub use suggestion_state::{MAX_SUGGESTIONS, SuggestionItem, SuggestionState, normalize_index};
