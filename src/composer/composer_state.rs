use crossterm::event::{KeyEvent, KeyModifiers};

use super::document::ComposerDocument;
use super::{ComposerHost, Deferred, KeyOutcome};
use crate::mentions::{
    Member, contains_mention, find_mention_query, match_members, mention_text,
};
use crate::suggestions::{SuggestionState, match_templates};
use crate::templates::Template;

/// Everything the composer knows at one point in time
#[derive(Debug, Clone)]
pub struct ComposerState {
    document: ComposerDocument,
    suggestions: Option<SuggestionState<Template>>,
    mention_suggestions: Option<SuggestionState<Member>>,
    mentions: Vec<Member>,
    last_template_prop: Option<String>,
    mentions_enabled: bool,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ComposerState {
    pub fn new(mentions_enabled: bool) -> Self {
        Self {
            document: ComposerDocument::empty(),
            suggestions: None,
            mention_suggestions: None,
            mentions: Vec::new(),
            last_template_prop: None,
            mentions_enabled,
        }
    }

    pub fn with_placeholder(mut self, text: &str) -> Self {
        self.document.set_placeholder(text);
        self
    }

    pub fn document(&self) -> &ComposerDocument {
        &self.document
    }

    pub fn suggestions(&self) -> Option<&SuggestionState<Template>> {
        self.suggestions.as_ref()
    }

    pub fn mention_suggestions(&self) -> Option<&SuggestionState<Member>> {
        self.mention_suggestions.as_ref()
    }

    pub fn mentions(&self) -> &[Member] {
        &self.mentions
    }

    pub fn mention_ids(&self) -> Vec<String> {
        self.mentions.iter().map(|m| m.id.clone()).collect()
    }

    pub fn mentions_enabled(&self) -> bool {
        self.mentions_enabled
    }

    /// True while either suggestion list is open
    pub fn has_suggestions(&self) -> bool {
        self.suggestions.is_some() || self.mention_suggestions.is_some()
    }

    /// Commit an edited document.
    ///
    /// The host hears about the change right away. Suggestions are not
    /// touched here: the returned task recomputes them once the event that
    /// produced `document` has been handled.
    pub fn on_content_change(
        mut self,
        document: ComposerDocument,
        host: &mut impl ComposerHost,
    ) -> (Self, Deferred) {
        self.document = document;
        host.on_change(&self.document.to_html());
        self.prune_mentions(host);

        (self, Deferred::RecomputeSuggestions)
    }

    pub fn run_deferred(self, task: Deferred, templates: &[Template], members: &[Member]) -> Self {
        match task {
            Deferred::RecomputeSuggestions => self.recompute_suggestions(templates, members),
        }
    }

    /// Derive suggestions from the current document. An `@query` at the
    /// caret with matching members wins over template suggestions.
    fn recompute_suggestions(mut self, templates: &[Template], members: &[Member]) -> Self {
        self.mention_suggestions = if self.mentions_enabled {
            find_mention_query(&self.document.text_before_cursor())
                .and_then(|mention| match_members(&mention.query, members))
        } else {
            None
        };

        self.suggestions = if self.mention_suggestions.is_some() {
            None
        } else {
            let query = self.document.plain_text().to_lowercase();
            match_templates(&query, templates)
        };

        log::debug!(
            "Suggestions recomputed: {} template(s), {} member(s)",
            self.suggestions.as_ref().map_or(0, |s| s.len()),
            self.mention_suggestions.as_ref().map_or(0, |s| s.len())
        );

        self
    }

    /// Move the selection of the open list by `delta` (-1 up, +1 down).
    ///
    /// Passes the key through when no list is open.
    pub fn on_navigate(mut self, delta: isize) -> (Self, KeyOutcome) {
        if let Some(state) = self.mention_suggestions.take() {
            self.mention_suggestions = Some(state.navigate(delta));
            return (self, KeyOutcome::Handled);
        }

        match self.suggestions.take() {
            Some(state) => {
                self.suggestions = Some(state.navigate(delta));
                (self, KeyOutcome::Handled)
            }
            None => (self, KeyOutcome::PassThrough),
        }
    }

    /// Accept a suggestion: the entry at `explicit_index` when given, else
    /// the highlighted one. Does nothing when no list is open or the index
    /// names no entry.
    pub fn on_commit_selection(
        mut self,
        explicit_index: Option<usize>,
        host: &mut impl ComposerHost,
    ) -> Self {
        if self.mention_suggestions.is_some() {
            return self.commit_mention(explicit_index, host);
        }

        let Some(state) = self.suggestions.as_ref() else {
            return self;
        };
        let index = explicit_index.unwrap_or_else(|| state.normalized_index());
        let Some(template) = state.candidate(index).cloned() else {
            return self;
        };

        log::debug!("Applying template '{}'", template.id);

        self.document.import_html(&template.content);
        self.document.move_to_end();
        self.document.insert_text(" ");
        self.document.move_to_end();
        self.suggestions = None;

        host.on_change(&self.document.to_html());
        self.prune_mentions(host);
        self
    }

    fn commit_mention(mut self, explicit_index: Option<usize>, host: &mut impl ComposerHost) -> Self {
        let Some(state) = self.mention_suggestions.as_ref() else {
            return self;
        };
        let index = explicit_index.unwrap_or_else(|| state.normalized_index());
        let Some(member) = state.candidate(index).cloned() else {
            return self;
        };
        self.mention_suggestions = None;

        let Some(token) = find_mention_query(&self.document.text_before_cursor()) else {
            return self;
        };

        self.document.delete_before_cursor(token.char_len());
        self.document.insert_text(&format!("{} ", mention_text(&member)));

        if !self.mentions.iter().any(|m| m.id == member.id) {
            self.mentions.push(member);
        }

        host.on_change(&self.document.to_html());
        host.on_mentions(&self.mention_ids());
        self
    }

    /// Enter: Shift/Alt+Enter is a plain newline, Enter with an open list
    /// accepts the highlighted entry, otherwise the draft is submitted and
    /// the composer emptied.
    pub fn on_enter_key(mut self, key: KeyEvent, host: &mut impl ComposerHost) -> (Self, KeyOutcome) {
        if key
            .modifiers
            .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT)
        {
            return (self, KeyOutcome::PassThrough);
        }

        if self.has_suggestions() {
            return (self.on_commit_selection(None, host), KeyOutcome::Handled);
        }

        host.on_submit();

        self.document.clear();
        self.document.move_to_end();
        self.mentions.clear();

        (self, KeyOutcome::Handled)
    }

    /// React to the host's "insert this template" value. Only a value that
    /// differs from the previous one is imported; it replaces the draft
    /// without going through the matcher.
    pub fn on_template_prop_change(mut self, value: Option<&str>, host: &mut impl ComposerHost) -> Self {
        if value == self.last_template_prop.as_deref() {
            return self;
        }
        self.last_template_prop = value.map(str::to_string);

        let Some(content) = value else {
            return self;
        };

        self.document.import_html(content);
        self.document.move_to_end();
        self.suggestions = None;
        self.mention_suggestions = None;

        host.on_change(&self.document.to_html());
        self.prune_mentions(host);
        self
    }

    /// Forget mentions whose text is gone from the draft
    fn prune_mentions(&mut self, host: &mut impl ComposerHost) {
        if self.mentions.is_empty() {
            return;
        }

        let text = self.document.plain_text();
        let before = self.mentions.len();
        self.mentions.retain(|member| contains_mention(&text, member));

        if self.mentions.len() != before {
            host.on_mentions(&self.mention_ids());
        }
    }
}

#[cfg(test)]
#[path = "composer_state_tests.rs"]
mod composer_state_tests;
