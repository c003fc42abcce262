use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::composer::composer_render;
use crate::inbox::inbox_render;
use crate::template_picker::picker_render;

const MIN_COMPOSER_HEIGHT: u16 = 3;
const MAX_COMPOSER_HEIGHT: u16 = 10;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let composer_height = (self.composer.document().lines().len() as u16 + 2)
            .clamp(MIN_COMPOSER_HEIGHT, MAX_COMPOSER_HEIGHT);

        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(composer_height),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (messages_area, composer_area, status_area) = (layout[0], layout[1], layout[2]);

        inbox_render::render_messages(&self.conversation, frame, messages_area);
        inbox_render::render_status_line(
            &self.conversation,
            self.attachment_prompt.as_deref(),
            frame,
            status_area,
        );

        let focused = !self.picker.is_visible() && self.attachment_prompt.is_none();
        self.popup_areas =
            composer_render::render_composer(&self.composer, frame, composer_area, focused);

        if self.picker.is_visible() {
            picker_render::render_popup(&mut self.picker, frame, frame.area());
        }
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
