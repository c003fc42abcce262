//! Message composer
//!
//! The composer owns the draft document and the suggestion lists derived from
//! it. Every transition consumes the current [`ComposerState`] and returns the
//! next one; side effects towards the surrounding inbox go through
//! [`ComposerHost`].

pub mod composer_render;
mod composer_state;
mod document;

pub use composer_state::ComposerState;
pub use document::ComposerDocument;

/// The page hosting a composer
pub trait ComposerHost {
    /// The draft changed; `html` is the exported document
    fn on_change(&mut self, html: &str);

    /// The set of members mentioned in the draft changed
    fn on_mentions(&mut self, member_ids: &[String]);

    /// The user asked to send the draft
    fn on_submit(&mut self);
}

/// Whether a key was consumed by the composer or should get the editor's
/// default behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    PassThrough,
}

/// Work the event loop runs once the current event has been fully handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    RecomputeSuggestions,
}
