//! Tests for inbox rendering

use super::*;
use crate::composer::ComposerHost;
use crate::config::ConversationConfig;
use crate::inbox::ConversationStatus;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_string(conversation: &Conversation, prompt: Option<&str>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal
        .draw(|f| {
            render_messages(conversation, f, Rect::new(0, 0, 60, 9));
            render_status_line(conversation, prompt, f, Rect::new(0, 9, 60, 1));
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_empty_conversation_shows_hint_and_help() {
    let output = render_to_string(&Conversation::default(), None);
    assert!(output.contains("No messages yet"));
    assert!(output.contains("Enter: Send"));
}

#[test]
fn test_sent_message_is_listed_without_markup() {
    let mut conversation = Conversation::new(&ConversationConfig::default());
    conversation.on_change("<p>Thanks, see www.example.com</p>");
    conversation.on_submit();

    let output = render_to_string(&conversation, None);
    assert!(output.contains("You"));
    assert!(output.contains("Thanks, see www.example.com"));
    assert!(!output.contains("<a"));
}

#[test]
fn test_error_takes_over_status_line() {
    let mut conversation = Conversation::default();
    conversation.on_submit();

    let output = render_to_string(&conversation, Some("/tmp/x"));
    assert!(output.contains("Content is required"));
    assert!(!output.contains("Attach file"));
}

#[test]
fn test_prompt_is_shown() {
    let output = render_to_string(&Conversation::default(), Some("/tmp/report.pdf"));
    assert!(output.contains("Attach file: /tmp/report.pdf"));
}

#[test]
fn test_pending_attachments_are_shown() {
    let mut conversation = Conversation::default();
    conversation.attach("a.png");
    let output = render_to_string(&conversation, None);
    assert!(output.contains("a.png attached"));
}

#[test]
fn test_title_shows_status_assignee_and_star() {
    let mut conversation = Conversation::new(&ConversationConfig {
        assigned_user_id: Some("u2".to_string()),
        ..ConversationConfig::default()
    });
    conversation.change_status(ConversationStatus::Open);
    conversation.star();

    let output = render_to_string(&conversation, None);
    assert!(output.contains("Conversation [open] → u2 ★"));
}

#[test]
fn test_title_without_assignee() {
    let output = render_to_string(&Conversation::default(), None);
    assert!(output.contains("Conversation [new]"));
    assert!(!output.contains("→"));
}
