use super::suggestion_state::{MAX_SUGGESTIONS, SuggestionState};
use crate::markup;
use crate::templates::Template;

/// Find the templates matching the composer's plain text.
///
/// A template matches when its name or its markup-free content contains the
/// query, ignoring case. Input order is kept. An empty query never matches.
pub fn match_templates(query: &str, templates: &[Template]) -> Option<SuggestionState<Template>> {
    if query.is_empty() {
        return None;
    }

    let query = query.to_lowercase();

    let found: Vec<Template> = templates
        .iter()
        .filter(|template| template_matches(template, &query))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect();

    SuggestionState::new(found, query)
}

/// `query_lower` must already be lower-cased.
pub fn template_matches(template: &Template, query_lower: &str) -> bool {
    template.name.to_lowercase().contains(query_lower)
        || markup::strip_markup(&template.content)
            .to_lowercase()
            .contains(query_lower)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
