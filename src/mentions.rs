//! @-mentions
//!
//! Detects an `@query` token at the caret, suggests matching team members and
//! keeps the set of members mentioned in the draft.

mod member;
mod trigger;

pub use member::{Member, match_members};
pub use trigger::{MentionQuery, contains_mention, find_mention_query, mention_text};
