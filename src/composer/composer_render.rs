//! Composer rendering
//!
//! Draws the draft editor and, above it, whichever suggestion list is open.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use super::ComposerState;
use crate::suggestions::suggestion_render;

/// Where the suggestion popups ended up this frame, for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopupAreas {
    pub templates: Option<Rect>,
    pub mentions: Option<Rect>,
}

pub fn render_composer(
    state: &ComposerState,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
) -> PopupAreas {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let mut title = vec![Span::raw(" Reply ")];
    let mentioned = state.mentions().len();
    if mentioned > 0 {
        title.push(Span::styled(
            format!("({} mentioned) ", mentioned),
            Style::default().fg(Color::Magenta),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(title))
        .title_top(
            Line::from(Span::styled(
                " Ctrl+T templates ",
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        )
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(state.document().textarea(), inner);

    // At most one list is open at a time
    PopupAreas {
        templates: suggestion_render::render_popup(frame, state.suggestions(), area, "Templates"),
        mentions: suggestion_render::render_popup(
            frame,
            state.mention_suggestions(),
            area,
            "Mentions",
        ),
    }
}

#[cfg(test)]
#[path = "composer_render_tests.rs"]
mod composer_render_tests;
