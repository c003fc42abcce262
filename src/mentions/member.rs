use serde::{Deserialize, Serialize};

use crate::suggestions::{MAX_SUGGESTIONS, SuggestionItem, SuggestionState};

/// A user that can be mentioned in a reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl SuggestionItem for Member {
    fn label(&self) -> &str {
        &self.name
    }

    fn preview(&self) -> String {
        format!("@{}", self.id)
    }
}

/// Members whose name or id contains `query`, ignoring case.
///
/// A bare `@` (empty query) lists the first members.
pub fn match_members(query: &str, members: &[Member]) -> Option<SuggestionState<Member>> {
    let query = query.to_lowercase();

    let found: Vec<Member> = members
        .iter()
        .filter(|member| {
            query.is_empty()
                || member.name.to_lowercase().contains(&query)
                || member.id.to_lowercase().contains(&query)
        })
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect();

    SuggestionState::new(found, query)
}

#[cfg(test)]
#[path = "member_tests.rs"]
mod member_tests;
