//! Suggestion popup rendering
//!
//! Draws the candidate list just above the composer and maps mouse clicks
//! back to entries.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::suggestion_state::{SuggestionItem, SuggestionState};
use crate::widgets::popup;

const MAX_POPUP_WIDTH: usize = 72;
const MIN_POPUP_WIDTH: usize = 24;
const POPUP_BORDER: u16 = 1;
const POPUP_OFFSET_X: u16 = 2;
const LABEL_GAP: &str = "  ";
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

/// Render `state` above `anchor`. Renders nothing when there is no state.
///
/// Returns the popup area for click hit-testing.
pub fn render_popup<T: SuggestionItem>(
    frame: &mut Frame,
    state: Option<&SuggestionState<T>>,
    anchor: Rect,
    title: &str,
) -> Option<Rect> {
    let state = state?;

    let entries: Vec<(&str, String)> = state
        .candidates()
        .iter()
        .map(|item| (item.label(), item.preview()))
        .collect();

    let content_width = entries
        .iter()
        .map(|(label, preview)| {
            SELECTED_MARKER.width() + label.width() + LABEL_GAP.width() + preview.width()
        })
        .max()
        .unwrap_or(0)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_width = content_width as u16 + POPUP_BORDER * 2;
    let popup_height = entries.len() as u16 + POPUP_BORDER * 2;

    let popup_area = popup::popup_above_anchor(anchor, popup_width, popup_height, POPUP_OFFSET_X);
    if popup_area.height == 0 || popup_area.width == 0 {
        return None;
    }
    let inner_width = popup_area.width.saturating_sub(POPUP_BORDER * 2) as usize;

    let selected = state.normalized_index();
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, (label, preview))| {
            let is_selected = i == selected;
            let (base, marker) = if is_selected {
                (
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                    SELECTED_MARKER,
                )
            } else {
                (
                    Style::default().fg(Color::White).bg(Color::Black),
                    UNSELECTED_MARKER,
                )
            };
            let label_style = base.add_modifier(Modifier::BOLD);
            let preview_style = if is_selected {
                base
            } else {
                base.fg(Color::Gray)
            };

            let mut remaining = inner_width.saturating_sub(marker.width());
            let label = truncate_to_width(label, remaining);
            remaining = remaining.saturating_sub(label.width() + LABEL_GAP.width());
            let preview = truncate_to_width(preview, remaining);

            let mut spans = vec![Span::styled(marker, base)];
            spans.extend(highlight_spans(&label, state.query(), label_style));
            spans.push(Span::styled(LABEL_GAP, base));
            spans.extend(highlight_spans(&preview, state.query(), preview_style));

            ListItem::new(Line::from(spans)).style(base)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);

    Some(popup_area)
}

/// Index of the entry under (`column`, `row`) in a popup drawn by
/// [`render_popup`] with `count` entries.
pub fn entry_at(popup_area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    let inner = popup::inset_rect(popup_area, POPUP_BORDER, POPUP_BORDER);
    if !popup::contains(inner, column, row) {
        return None;
    }

    let index = (row - inner.y) as usize;
    (index < count).then_some(index)
}

/// Split `text` into spans, emphasising case-insensitive occurrences of
/// `query`.
pub fn highlight_spans(text: &str, query: &str, style: Style) -> Vec<Span<'static>> {
    let emphasis = style.add_modifier(Modifier::UNDERLINED);
    let lower = text.to_lowercase();

    // Byte offsets only line up when lower-casing kept every length
    if query.is_empty() || lower.len() != text.len() {
        return vec![Span::styled(text.to_string(), style)];
    }

    let mut spans = Vec::new();
    let mut last = 0;
    for (start, matched) in lower.match_indices(query) {
        if !text.is_char_boundary(start) || !text.is_char_boundary(start + matched.len()) {
            continue;
        }
        if start > last {
            spans.push(Span::styled(text[last..start].to_string(), style));
        }
        spans.push(Span::styled(
            text[start..start + matched.len()].to_string(),
            emphasis,
        ));
        last = start + matched.len();
    }
    if last < text.len() {
        spans.push(Span::styled(text[last..].to_string(), style));
    }

    spans
}

/// Cut `text` to at most `max_width` display columns, ending in `…` when
/// something was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width - 1 {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
#[path = "suggestion_render_tests.rs"]
mod suggestion_render_tests;
