use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use super::{MAX_VISIBLE_TEMPLATES, TemplatePicker};
use crate::markup;
use crate::suggestions::suggestion_render::truncate_to_width;
use crate::widgets::popup;

pub const PICKER_SEARCH_HEIGHT: u16 = 3;
const PICKER_WIDTH: u16 = 70;

/// Render the picker centred in `area`
pub fn render_popup(picker: &mut TemplatePicker, frame: &mut Frame, area: Rect) -> Rect {
    let visible_count = picker.filtered_count().min(MAX_VISIBLE_TEMPLATES);
    let list_height = (visible_count as u16).max(1) + 2;
    let popup_area = popup::centered_popup(area, PICKER_WIDTH, list_height + PICKER_SEARCH_HEIGHT);

    popup::clear_area(frame, popup_area);

    let layout = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(PICKER_SEARCH_HEIGHT),
    ])
    .split(popup_area);
    let list_area = layout[0];
    let search_area = layout[1];

    let title = format!(
        " Templates ({}/{}) ",
        picker.filtered_count(),
        picker.total_count()
    );
    let inner_width = list_area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = if picker.filtered_count() == 0 {
        vec![ListItem::new(Line::from(Span::styled(
            "   No matches",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        picker
            .visible_entries()
            .map(|(pos, template)| {
                let is_selected = pos == picker.selected_index();
                let style = if is_selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::White).bg(Color::Black)
                };
                let marker = if is_selected { " ► " } else { "   " };

                let name = truncate_to_width(&template.name, inner_width.saturating_sub(3));
                let remaining = inner_width.saturating_sub(3 + name.chars().count() + 2);
                let preview =
                    truncate_to_width(&markup::sanitize_preview(&template.content), remaining);

                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(name, style.add_modifier(Modifier::BOLD)),
                    Span::styled("  ", style),
                    Span::styled(preview, if is_selected { style } else { style.fg(Color::Gray) }),
                ]))
                .style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, list_area);

    let search_textarea = picker.search_textarea_mut();
    search_textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Search ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    search_textarea.set_style(Style::default().fg(Color::White).bg(Color::Black));
    frame.render_widget(&*search_textarea, search_area);

    popup_area
}

#[cfg(test)]
#[path = "picker_render_tests.rs"]
mod picker_render_tests;
