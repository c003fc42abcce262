//! Tests for markup conversion and sanitization

use super::*;
use insta::assert_snapshot;

#[test]
fn test_strip_markup_removes_inline_tags() {
    assert_eq!(strip_markup("<b>Hello</b> <i>there</i>"), "Hello there");
}

#[test]
fn test_strip_markup_plain_text_unchanged() {
    assert_eq!(strip_markup("Best regards"), "Best regards");
}

#[test]
fn test_strip_markup_block_tags_become_newlines() {
    assert_eq!(strip_markup("<p>one</p><p>two</p>"), "one\ntwo\n");
    assert_eq!(strip_markup("line<br>break<br/>here"), "line\nbreak\nhere");
}

#[test]
fn test_strip_markup_drops_script_and_style_bodies() {
    let html = "<p>Hi</p><script>alert('x')</script><style>p{color:red}</style>";
    assert_eq!(strip_markup(html), "Hi\n");
}

#[test]
fn test_strip_markup_drops_comments() {
    assert_eq!(strip_markup("a<!-- <b>hidden</b> -->b"), "ab");
}

#[test]
fn test_strip_markup_decodes_entities() {
    assert_eq!(strip_markup("Fish &amp; chips &lt;3"), "Fish & chips <3");
}

#[test]
fn test_strip_markup_keeps_lone_angle_brackets() {
    assert_eq!(strip_markup("1 < 2 and 3 > 2"), "1 < 2 and 3 > 2");
}

#[test]
fn test_decode_entities_numeric() {
    assert_eq!(decode_entities("&#65;&#x42;&#X43;"), "ABC");
}

#[test]
fn test_decode_entities_unknown_name_left_alone() {
    assert_eq!(decode_entities("&bogus;"), "&bogus;");
}

#[test]
fn test_decode_entities_invalid_code_point_left_alone() {
    assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<a href="x">'&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
    );
}

#[test]
fn test_html_to_lines_plain_text_keeps_newlines() {
    assert_eq!(html_to_lines("one\n  two"), vec!["one", "  two"]);
}

#[test]
fn test_html_to_lines_paragraphs() {
    let html = "<p>Hello</p>\n<p></p>\n<p>World</p>";
    assert_eq!(html_to_lines(html), vec!["Hello", "", "World"]);
}

#[test]
fn test_html_to_lines_empty_yields_single_line() {
    assert_eq!(html_to_lines(""), vec![String::new()]);
    assert_eq!(html_to_lines("<p></p>"), vec![String::new()]);
}

#[test]
fn test_lines_to_html_escapes_each_line() {
    let lines = vec!["Hello <there>".to_string(), String::new()];
    assert_snapshot!(lines_to_html(&lines), @"<p>Hello &lt;there&gt;</p><p></p>");
}

#[test]
fn test_html_round_trip_preserves_lines() {
    let lines = vec!["a & b".to_string(), "c".to_string()];
    assert_eq!(html_to_lines(&lines_to_html(&lines)), lines);
}

#[test]
fn test_linkify_http_url() {
    assert_snapshot!(
        linkify("see https://example.com/docs now"),
        @r#"see <a target="_blank" href="https://example.com/docs">https://example.com/docs</a> now"#
    );
}

#[test]
fn test_linkify_www_url_gets_scheme() {
    assert_snapshot!(
        linkify("www.example.org"),
        @r#"<a target="_blank" href="http://www.example.org">www.example.org</a>"#
    );
}

#[test]
fn test_linkify_escapes_surrounding_text() {
    assert_eq!(linkify("<b>no links</b>"), "&lt;b&gt;no links&lt;/b&gt;");
}

#[test]
fn test_lines_to_linked_html() {
    let lines = vec!["go to www.a.io".to_string()];
    assert_eq!(
        lines_to_linked_html(&lines),
        "<p>go to <a target=\"_blank\" href=\"http://www.a.io\">www.a.io</a></p>"
    );
}

#[test]
fn test_sanitize_preview_flattens_to_one_line() {
    let html = "<p>Hello</p>\n<p>  there\tfriend </p>";
    assert_eq!(sanitize_preview(html), "Hello there friend");
}

#[test]
fn test_sanitize_preview_removes_injected_markup() {
    let html = r#"<img src=x onerror="alert(1)"><script>steal()</script>Thanks!"#;
    assert_eq!(sanitize_preview(html), "Thanks!");
}

#[test]
fn test_sanitize_preview_drops_terminal_escapes() {
    let html = "Hi&#27;[31m red\u{1b}[0m";
    let preview = sanitize_preview(html);
    assert!(!preview.contains('\u{1b}'));
    assert_eq!(preview, "Hi[31m red[0m");
}

#[test]
fn test_looks_like_html() {
    assert!(looks_like_html("<p>x</p>"));
    assert!(looks_like_html("a<br/>b"));
    assert!(!looks_like_html("a < b"));
    assert!(!looks_like_html("plain"));
}
