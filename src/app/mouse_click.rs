//! Mouse click handling
//!
//! A left click on a suggestion entry commits that entry, whatever the
//! keyboard selection is.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::suggestions::suggestion_render::entry_at;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        handle_click(app, mouse.column, mouse.row);
    }
}

fn handle_click(app: &mut App, column: u16, row: u16) {
    if app.picker.is_visible() || app.attachment_prompt.is_some() {
        return;
    }

    let clicked = if let (Some(area), Some(state)) =
        (app.popup_areas.mentions, app.composer.mention_suggestions())
    {
        entry_at(area, state.len(), column, row)
    } else if let (Some(area), Some(state)) =
        (app.popup_areas.templates, app.composer.suggestions())
    {
        entry_at(area, state.len(), column, row)
    } else {
        None
    };

    if let Some(index) = clicked {
        app.update_composer(|state, host| (state.on_commit_selection(Some(index), host), ()));
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
