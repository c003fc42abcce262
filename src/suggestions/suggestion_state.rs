use crate::markup;
use crate::templates::Template;

/// Upper bound on candidates kept in a [`SuggestionState`]
pub const MAX_SUGGESTIONS: usize = 5;

/// Something that can be listed in the suggestion popup
pub trait SuggestionItem {
    /// Bold leading text of the entry
    fn label(&self) -> &str;

    /// Single-line, sanitized text shown after the label
    fn preview(&self) -> String;
}

impl SuggestionItem for Template {
    fn label(&self) -> &str {
        &self.name
    }

    fn preview(&self) -> String {
        markup::sanitize_preview(&self.content)
    }
}

/// Wrap `index` into `[0, len)`. Negative values count from the end.
pub fn normalize_index(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as isize) as usize
}

/// The candidate list currently offered to the user.
///
/// Never empty. `selected_index` accumulates navigation deltas without
/// clamping and is only wrapped into range when read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionState<T> {
    candidates: Vec<T>,
    query: String,
    selected_index: isize,
}

impl<T> SuggestionState<T> {
    /// Returns `None` when there are no candidates. Keeps at most
    /// [`MAX_SUGGESTIONS`] of them, selection at the first.
    pub fn new(mut candidates: Vec<T>, query: impl Into<String>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        candidates.truncate(MAX_SUGGESTIONS);

        Some(Self {
            candidates,
            query: query.into(),
            selected_index: 0,
        })
    }

    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Raw, possibly out-of-range selection
    pub fn selected_index(&self) -> isize {
        self.selected_index
    }

    pub fn normalized_index(&self) -> usize {
        normalize_index(self.selected_index, self.candidates.len())
    }

    pub fn selected(&self) -> Option<&T> {
        self.candidates.get(self.normalized_index())
    }

    pub fn candidate(&self, index: usize) -> Option<&T> {
        self.candidates.get(index)
    }

    /// Move the selection by `delta` entries
    pub fn navigate(mut self, delta: isize) -> Self {
        self.selected_index = self.selected_index.saturating_add(delta);
        self
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
