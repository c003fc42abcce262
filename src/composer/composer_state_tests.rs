//! Tests for the composer state machine

use super::*;
use crate::test_utils::test_helpers::{
    RecordingHost, key, key_with_mods, sample_members, sample_templates,
};
use crossterm::event::KeyCode;

/// Insert `text` at the caret as one edit and settle the deferred work
fn type_into(state: ComposerState, host: &mut RecordingHost, text: &str) -> ComposerState {
    let mut document = state.document().clone();
    document.insert_text(text);
    let (state, task) = state.on_content_change(document, host);
    state.run_deferred(task, &sample_templates(), &sample_members())
}

fn scenario_templates() -> Vec<Template> {
    vec![
        Template::new("1", "Greeting", "Hello there"),
        Template::new("2", "Closing", "Best regards"),
    ]
}

fn with_suggestions(count: usize) -> ComposerState {
    let templates: Vec<Template> = (0..count)
        .map(|i| Template::new(i.to_string(), format!("Reply {i}"), format!("Body {i}")))
        .collect();
    let mut host = RecordingHost::default();
    let mut document = ComposerDocument::empty();
    document.insert_text("reply");
    let (state, task) = ComposerState::new(false).on_content_change(document, &mut host);
    state.run_deferred(task, &templates, &[])
}

#[test]
fn test_new_state_is_empty() {
    let state = ComposerState::default();
    assert!(state.document().is_blank());
    assert!(state.suggestions().is_none());
    assert!(state.mention_suggestions().is_none());
    assert!(state.mentions().is_empty());
    assert!(state.mentions_enabled());
}

#[test]
fn test_content_change_notifies_host_with_html() {
    let mut host = RecordingHost::default();
    let mut document = ComposerDocument::empty();
    document.insert_text("Hi <you>");

    let (state, task) = ComposerState::new(true).on_content_change(document, &mut host);

    assert_eq!(task, Deferred::RecomputeSuggestions);
    assert_eq!(host.last_change(), Some("<p>Hi &lt;you&gt;</p>"));
    assert_eq!(state.document().plain_text(), "Hi <you>");
}

#[test]
fn test_suggestions_wait_for_deferred_task() {
    let mut host = RecordingHost::default();
    let mut document = ComposerDocument::empty();
    document.insert_text("hello");

    let (state, task) = ComposerState::new(false).on_content_change(document, &mut host);
    assert!(state.suggestions().is_none());

    let state = state.run_deferred(task, &scenario_templates(), &[]);
    let suggestions = state.suggestions().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions.candidates()[0].name, "Greeting");
    assert_eq!(suggestions.selected_index(), 0);
}

#[test]
fn test_deferred_task_reads_current_document() {
    let mut host = RecordingHost::default();
    let mut first = ComposerDocument::empty();
    first.insert_text("hello");
    let (state, stale_task) = ComposerState::new(false).on_content_change(first, &mut host);

    let mut second = state.document().clone();
    second.insert_text(" xyz");
    let (state, task) = state.on_content_change(second, &mut host);

    let state = state.run_deferred(stale_task, &scenario_templates(), &[]);
    assert!(state.suggestions().is_none());
    let state = state.run_deferred(task, &scenario_templates(), &[]);
    assert!(state.suggestions().is_none());
}

#[test]
fn test_emptied_content_clears_suggestions() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(false), &mut host, "best");
    assert!(state.suggestions().is_some());

    let (state, task) = state.on_content_change(ComposerDocument::empty(), &mut host);
    let state = state.run_deferred(task, &sample_templates(), &[]);
    assert!(state.suggestions().is_none());
}

#[test]
fn test_navigate_without_suggestions_passes_through() {
    let (state, outcome) = ComposerState::default().on_navigate(1);
    assert_eq!(outcome, KeyOutcome::PassThrough);
    assert!(state.suggestions().is_none());
}

#[test]
fn test_navigate_up_wraps_when_rendered() {
    let (state, outcome) = with_suggestions(3).on_navigate(-1);
    assert_eq!(outcome, KeyOutcome::Handled);

    let suggestions = state.suggestions().unwrap();
    assert_eq!(suggestions.selected_index(), -1);
    assert_eq!(suggestions.normalized_index(), 2);
}

#[test]
fn test_commit_without_suggestions_is_noop() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(false), &mut host, "zzz");
    let changes_before = host.changes.len();

    let state = state.on_commit_selection(None, &mut host);

    assert_eq!(state.document().plain_text(), "zzz");
    assert!(state.suggestions().is_none());
    assert_eq!(host.changes.len(), changes_before);
}

#[test]
fn test_commit_replaces_document_with_template_and_space() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(false), &mut host, "ship");
    assert!(state.suggestions().is_some());

    let state = state.on_commit_selection(None, &mut host);

    assert!(state.suggestions().is_none());
    assert_eq!(state.document().plain_text(), "Your order has shipped. ");
    assert_eq!(state.document().cursor(), (0, 24));
    assert_eq!(
        host.last_change(),
        Some("<p>Your order has shipped. </p>")
    );
}

#[test]
fn test_commit_uses_normalized_selection() {
    let state = with_suggestions(3).on_navigate(-1).0;
    let mut host = RecordingHost::default();

    let state = state.on_commit_selection(None, &mut host);
    assert_eq!(state.document().plain_text(), "Body 2 ");
}

#[test]
fn test_commit_explicit_index_bypasses_selection() {
    let state = with_suggestions(3).on_navigate(1).0;
    let mut host = RecordingHost::default();

    let state = state.on_commit_selection(Some(0), &mut host);
    assert_eq!(state.document().plain_text(), "Body 0 ");
}

#[test]
fn test_commit_out_of_range_index_is_noop() {
    let state = with_suggestions(2);
    let mut host = RecordingHost::default();

    let state = state.on_commit_selection(Some(7), &mut host);
    assert_eq!(state.document().plain_text(), "reply");
    assert!(state.suggestions().is_some());
    assert!(host.changes.is_empty());
}

#[test]
fn test_commit_multiline_template_appends_space_once() {
    let templates = vec![Template::new("m", "Multi", "<p>Line one</p><p>Line two</p>")];
    let mut host = RecordingHost::default();
    let mut document = ComposerDocument::empty();
    document.insert_text("multi");
    let (state, task) = ComposerState::new(false).on_content_change(document, &mut host);
    let state = state.run_deferred(task, &templates, &[]);

    let state = state.on_commit_selection(None, &mut host);
    assert_eq!(
        state.document().lines(),
        &["Line one".to_string(), "Line two ".to_string()]
    );
}

#[test]
fn test_enter_with_shift_passes_through_and_keeps_suggestions() {
    let state = with_suggestions(3);
    let mut host = RecordingHost::default();

    let (state, outcome) =
        state.on_enter_key(key_with_mods(KeyCode::Enter, KeyModifiers::SHIFT), &mut host);

    assert_eq!(outcome, KeyOutcome::PassThrough);
    assert!(state.suggestions().is_some());
    assert_eq!(host.submits, 0);
}

#[test]
fn test_enter_with_alt_passes_through() {
    let (_, outcome) = ComposerState::default().on_enter_key(
        key_with_mods(KeyCode::Enter, KeyModifiers::ALT),
        &mut RecordingHost::default(),
    );
    assert_eq!(outcome, KeyOutcome::PassThrough);
}

#[test]
fn test_enter_with_suggestions_commits() {
    let state = with_suggestions(2);
    let mut host = RecordingHost::default();

    let (state, outcome) = state.on_enter_key(key(KeyCode::Enter), &mut host);

    assert_eq!(outcome, KeyOutcome::Handled);
    assert!(state.suggestions().is_none());
    assert_eq!(state.document().plain_text(), "Body 0 ");
    assert_eq!(host.submits, 0);
}

#[test]
fn test_enter_without_suggestions_submits_and_clears() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(false), &mut host, "no match here");

    let (state, outcome) = state.on_enter_key(key(KeyCode::Enter), &mut host);

    assert_eq!(outcome, KeyOutcome::Handled);
    assert_eq!(host.submits, 1);
    assert!(state.document().is_blank());
    assert_eq!(state.document().cursor(), (0, 0));
}

#[test]
fn test_template_prop_change_replaces_document() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(false), &mut host, "draft");

    let state = state.on_template_prop_change(Some("<p>Thanks for waiting</p>"), &mut host);

    assert_eq!(state.document().plain_text(), "Thanks for waiting");
    assert_eq!(state.document().cursor(), (0, 18));
    assert_eq!(host.last_change(), Some("<p>Thanks for waiting</p>"));
    assert!(state.suggestions().is_none());
}

#[test]
fn test_template_prop_change_skips_unchanged_value() {
    let mut host = RecordingHost::default();
    let state = ComposerState::new(false).on_template_prop_change(Some("One"), &mut host);
    let state = type_into(state, &mut host, " edited");
    let changes = host.changes.len();

    let state = state.on_template_prop_change(Some("One"), &mut host);

    assert_eq!(state.document().plain_text(), "One edited");
    assert_eq!(host.changes.len(), changes);
}

#[test]
fn test_template_prop_change_to_none_keeps_document() {
    let mut host = RecordingHost::default();
    let state = ComposerState::new(false).on_template_prop_change(Some("One"), &mut host);
    let state = state.on_template_prop_change(None, &mut host);
    assert_eq!(state.document().plain_text(), "One");

    let state = state.on_template_prop_change(Some("One"), &mut host);
    assert_eq!(host.changes.len(), 2);
    assert_eq!(state.document().plain_text(), "One");
}

#[test]
fn test_template_prop_change_can_be_undone() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(false), &mut host, "mine");
    let state = state.on_template_prop_change(Some("theirs"), &mut host);

    let mut document = state.document().clone();
    while document.plain_text() != "mine" && document.undo() {}
    assert_eq!(document.plain_text(), "mine");
}

#[test]
fn test_mention_query_opens_member_suggestions() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(true), &mut host, "ping @al");

    let mentions = state.mention_suggestions().unwrap();
    assert_eq!(mentions.candidates()[0].name, "Alan");
    assert!(state.suggestions().is_none());
}

#[test]
fn test_mentions_disabled_ignores_at_sign() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(false), &mut host, "@a");
    assert!(state.mention_suggestions().is_none());
}

#[test]
fn test_mention_without_matching_member_falls_back_to_templates() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(true), &mut host, "@zzz");
    assert!(state.mention_suggestions().is_none());
}

#[test]
fn test_commit_mention_inserts_name_and_reports_ids() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(true), &mut host, "thanks @gr");

    let (state, outcome) = state.on_enter_key(key(KeyCode::Enter), &mut host);

    assert_eq!(outcome, KeyOutcome::Handled);
    assert_eq!(host.submits, 0);
    assert_eq!(state.document().plain_text(), "thanks @Grace ");
    assert!(state.mention_suggestions().is_none());
    assert_eq!(state.mention_ids(), vec!["u3".to_string()]);
    assert_eq!(host.mention_reports.last(), Some(&vec!["u3".to_string()]));
}

#[test]
fn test_navigation_prefers_mention_list() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(true), &mut host, "@a");
    let (state, outcome) = state.on_navigate(1);
    assert_eq!(outcome, KeyOutcome::Handled);

    let state = state.on_commit_selection(None, &mut host);
    assert_eq!(state.document().plain_text(), "@Alan ");
}

#[test]
fn test_same_member_mentioned_twice_is_recorded_once() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(true), &mut host, "@ada");
    let state = state.on_commit_selection(None, &mut host);
    let state = type_into(state, &mut host, "and @ada");
    let state = state.on_commit_selection(None, &mut host);

    assert_eq!(state.document().plain_text(), "@Ada and @Ada ");
    assert_eq!(state.mention_ids(), vec!["u1".to_string()]);
}

#[test]
fn test_removed_mention_is_pruned_and_reported() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(true), &mut host, "@ada");
    let state = state.on_commit_selection(None, &mut host);
    assert_eq!(state.mentions().len(), 1);

    let (state, _) = state.on_content_change(ComposerDocument::from_html("bye"), &mut host);

    assert!(state.mentions().is_empty());
    assert_eq!(host.mention_reports.last(), Some(&Vec::<String>::new()));
}

#[test]
fn test_submit_forgets_mentions() {
    let mut host = RecordingHost::default();
    let state = type_into(ComposerState::new(true), &mut host, "@ada");
    let state = state.on_commit_selection(None, &mut host);
    let state = type_into(state, &mut host, "hi");

    let (state, _) = state.on_enter_key(key(KeyCode::Enter), &mut host);
    assert_eq!(host.submits, 1);
    assert!(state.mentions().is_empty());
}

#[test]
fn test_prune_keeps_longer_name_but_drops_its_prefix() {
    let members = vec![Member::new("u1", "Ada"), Member::new("u9", "Adam")];
    let mut host = RecordingHost::default();
    let mut state = ComposerState::new(true);

    for text in ["@ada", "@adam"] {
        let mut document = state.document().clone();
        document.insert_text(text);
        let (next, task) = state.on_content_change(document, &mut host);
        let next = next.run_deferred(task, &[], &members);
        state = next.on_commit_selection(None, &mut host);
    }
    assert_eq!(state.document().plain_text(), "@Ada @Adam ");
    assert_eq!(state.mention_ids(), vec!["u1".to_string(), "u9".to_string()]);

    let (state, _) = state.on_content_change(ComposerDocument::from_html("hi @Adam "), &mut host);

    assert_eq!(state.mention_ids(), vec!["u9".to_string()]);
    assert_eq!(host.mention_reports.last(), Some(&vec!["u9".to_string()]));
}
