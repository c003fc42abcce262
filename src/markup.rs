//! Conversion between the composer's plain-text lines and HTML.
//!
//! Template content is arbitrary rich text, so everything that leaves this
//! module for display goes through [`sanitize_preview`] or is escaped.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("valid regex")
});
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));
static SOURCE_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\r?\n\s*").expect("valid regex"));
static BLOCK_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|li|h[1-6]|blockquote|pre|tr)\s*>").expect("valid regex")
});
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[a-zA-Z!/][^>]*>").expect("valid regex"));
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").expect("valid regex")
});
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?://|www\.)[-a-zA-Z0-9@:%._~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_.~#?&/=]*",
    )
    .expect("valid regex")
});
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Returns true when the text contains at least one markup tag.
pub fn looks_like_html(text: &str) -> bool {
    TAG.is_match(text)
}

/// Remove markup from `input`, keeping block boundaries as newlines and
/// decoding character entities.
pub fn strip_markup(input: &str) -> String {
    let html = looks_like_html(input);

    let text = SCRIPT_BLOCK.replace_all(input, "");
    let text = COMMENT.replace_all(&text, "");
    let text = if html {
        // Source newlines are insignificant inside markup
        SOURCE_NEWLINE.replace_all(&text, " ").into_owned()
    } else {
        text.into_owned()
    };
    let text = BLOCK_BREAK.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, "");

    decode_entities(&text)
}

/// Decode named and numeric character references.
///
/// Unknown names are left untouched.
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match body {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some(' '),
                    _ => None,
                }
            };

            match decoded {
                Some(ch) => ch.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Import HTML (or plain text) into document lines.
///
/// Always yields at least one line.
pub fn html_to_lines(content: &str) -> Vec<String> {
    let html = looks_like_html(content);
    let text = strip_markup(content);
    let text = text.trim_end_matches(['\n', '\r']);

    if text.is_empty() {
        return vec![String::new()];
    }

    text.lines()
        .map(|line| {
            if html {
                line.trim().to_string()
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// Export document lines as one `<p>` block per line.
pub fn lines_to_html(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("<p>{}</p>", escape_html(line)))
        .collect()
}

/// Like [`lines_to_html`], with bare URLs turned into links that open in a
/// new tab. `www.` URLs get an `http://` prefix in the href.
pub fn lines_to_linked_html(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("<p>{}</p>", linkify(line)))
        .collect()
}

/// Escape `text` and wrap every URL in an anchor.
pub fn linkify(text: &str) -> String {
    let mut html = String::with_capacity(text.len());
    let mut last = 0;

    for url in URL.find_iter(text) {
        html.push_str(&escape_html(&text[last..url.start()]));

        let href = if url.as_str().starts_with("http") {
            url.as_str().to_string()
        } else {
            format!("http://{}", url.as_str())
        };
        html.push_str(&format!(
            "<a target=\"_blank\" href=\"{}\">{}</a>",
            escape_html(&href),
            escape_html(url.as_str())
        ));

        last = url.end();
    }

    html.push_str(&escape_html(&text[last..]));
    html
}

/// Single-line, markup-free rendition of rich text that is safe to draw in
/// the terminal.
///
/// Control characters (including escape sequences smuggled in through
/// entities) are dropped and whitespace is collapsed.
pub fn sanitize_preview(content: &str) -> String {
    let text: String = strip_markup(content)
        .chars()
        .map(|ch| if ch == '\n' || ch == '\t' { ' ' } else { ch })
        .filter(|ch| !ch.is_control())
        .collect();

    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod markup_tests;
