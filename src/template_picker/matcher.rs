use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::markup;
use crate::templates::Template;

pub struct TemplateMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for TemplateMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateMatcher").finish_non_exhaustive()
    }
}

impl Default for TemplateMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Indices of the templates matching `query`, best match first.
    ///
    /// Each template is searched by its name followed by its text content.
    pub fn filter(&self, query: &str, templates: &[Template]) -> Vec<usize> {
        // Split query into terms (space-separated, like fzf)
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return (0..templates.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = templates
            .iter()
            .enumerate()
            .filter_map(|(idx, template)| {
                let haystack = format!(
                    "{} {}",
                    template.name,
                    markup::sanitize_preview(&template.content)
                );

                // All terms must match
                let mut total_score: i64 = 0;
                for term in &terms {
                    total_score += self.matcher.fuzzy_match(&haystack, term)?;
                }
                Some((idx, total_score))
            })
            .collect();

        // Stable sort keeps file order among equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
