//! Inbox rendering
//!
//! The sent-message log above the composer and the one-line status bar
//! below it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::Conversation;
use crate::markup;

const EMPTY_HINT: &str = "   No messages yet. Type a reply below.";
const HELP_TEXT: &str =
    " Enter: Send | Shift+Enter: Newline | ↑/↓: Suggestions | Ctrl+T: Templates | Ctrl+O: Attach | F2/F3: Assign/Unassign | F4: Status | F5: Star | Esc: Quit";

pub fn render_messages(conversation: &Conversation, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for message in conversation.messages() {
        let time = chrono::DateTime::parse_from_rfc3339(&message.created_at)
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled("You", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", time), Style::default().fg(Color::DarkGray)),
        ]));

        for text in markup::html_to_lines(&message.content) {
            lines.push(Line::from(format!("  {}", text)));
        }
        for attachment in &message.attachments {
            lines.push(Line::from(Span::styled(
                format!("  📎 {}", attachment),
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            EMPTY_HINT,
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Keep the newest messages in view
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(conversation_title(conversation))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

fn conversation_title(conversation: &Conversation) -> Line<'static> {
    let mut spans = vec![
        Span::raw(" Conversation "),
        Span::styled(
            format!("[{}] ", conversation.status()),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if let Some(assignee) = conversation.assigned_user_id() {
        spans.push(Span::styled(
            format!("→ {} ", assignee),
            Style::default().fg(Color::Magenta),
        ));
    }
    if conversation.is_starred() {
        spans.push(Span::styled("★ ", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

/// Render the status line: an error, a prompt, pending attachments or the
/// key help, in that order of priority.
pub fn render_status_line(
    conversation: &Conversation,
    prompt: Option<&str>,
    frame: &mut Frame,
    area: Rect,
) {
    let line = if let Some(error) = conversation.last_error() {
        Line::from(Span::styled(
            format!(" ⚠ {}", error),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(prompt) = prompt {
        Line::from(vec![
            Span::styled(" Attach file: ", Style::default().fg(Color::Yellow)),
            Span::raw(prompt.to_string()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else if !conversation.attachments().is_empty() {
        Line::from(Span::styled(
            format!(" 📎 {} attached", conversation.attachments().join(", ")),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "inbox_render_tests.rs"]
mod inbox_render_tests;
