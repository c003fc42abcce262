use super::member::Member;

/// An `@query` token ending at the caret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionQuery {
    /// Char column of the `@`
    pub start: usize,
    /// Text typed after the `@`
    pub query: String,
}

impl MentionQuery {
    /// Number of chars the token occupies, `@` included
    pub fn char_len(&self) -> usize {
        self.query.chars().count() + 1
    }
}

/// Look for a mention being typed in `before_caret` (the caret line up to the
/// caret).
///
/// The `@` has to open the line or follow whitespace, and nothing typed after
/// it may be whitespace.
pub fn find_mention_query(before_caret: &str) -> Option<MentionQuery> {
    let at = before_caret.rfind('@')?;
    let query = &before_caret[at + 1..];

    if query.chars().any(char::is_whitespace) {
        return None;
    }

    let preceded_by_boundary = before_caret[..at]
        .chars()
        .next_back()
        .is_none_or(char::is_whitespace);
    if !preceded_by_boundary {
        return None;
    }

    Some(MentionQuery {
        start: before_caret[..at].chars().count(),
        query: query.to_string(),
    })
}

/// How a committed mention appears in the draft
pub fn mention_text(member: &Member) -> String {
    format!("@{}", member.name)
}

/// Whether `text` still holds `member`'s mention as a whole token. `@Ada`
/// does not count as present inside `@Adam`.
pub fn contains_mention(text: &str, member: &Member) -> bool {
    let mention = mention_text(member);

    text.match_indices(&mention).any(|(start, matched)| {
        text[start + matched.len()..]
            .chars()
            .next()
            .is_none_or(|next| !is_name_char(next))
    })
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-'
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod trigger_tests;
