//! quickreply: a terminal reply composer with response-template
//! autocomplete and @-mentions.

pub mod app;
pub mod cli;
pub mod composer;
pub mod config;
pub mod error;
pub mod inbox;
#[cfg(debug_assertions)]
pub mod logging;
pub mod markup;
pub mod mentions;
pub mod suggestions;
pub mod template_picker;
pub mod templates;
pub mod widgets;

#[cfg(test)]
mod test_utils;
