use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use super::matcher::TemplateMatcher;
use crate::templates::Template;

pub const MAX_VISIBLE_TEMPLATES: usize = 10;

fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// State of the template picker popup
#[derive(Debug)]
pub struct TemplatePicker {
    visible: bool,
    templates: Vec<Template>,
    search_textarea: TextArea<'static>,
    matcher: TemplateMatcher,
    filtered: Vec<usize>,
    selected_index: usize,
}

impl Default for TemplatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplatePicker {
    pub fn new() -> Self {
        Self {
            visible: false,
            templates: Vec::new(),
            search_textarea: create_search_textarea(),
            matcher: TemplateMatcher::new(),
            filtered: Vec::new(),
            selected_index: 0,
        }
    }

    /// Show the picker listing `templates`, with an empty search
    pub fn open(&mut self, templates: &[Template]) {
        self.templates = templates.to_vec();
        self.clear_search();
        self.visible = true;
        self.on_search_input_changed();
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.clear_search();
        self.templates.clear();
        self.filtered.clear();
        self.selected_index = 0;
    }

    fn clear_search(&mut self) {
        self.search_textarea.select_all();
        self.search_textarea.cut();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn query(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    /// Re-filter after the search text changed. The selection goes back to
    /// the best match.
    pub fn on_search_input_changed(&mut self) {
        self.filtered = self.matcher.filter(self.query(), &self.templates);
        self.selected_index = 0;
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_count(&self) -> usize {
        self.templates.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.filtered.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn selected_template(&self) -> Option<&Template> {
        self.filtered
            .get(self.selected_index)
            .and_then(|&idx| self.templates.get(idx))
    }

    /// The window of matches to draw, keeping the selection in view.
    /// Yields (position in the filtered list, template).
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &Template)> {
        let start = (self.selected_index + 1).saturating_sub(MAX_VISIBLE_TEMPLATES);
        self.filtered
            .iter()
            .enumerate()
            .skip(start)
            .take(MAX_VISIBLE_TEMPLATES)
            .filter_map(|(pos, &idx)| self.templates.get(idx).map(|t| (pos, t)))
    }
}

#[cfg(test)]
#[path = "picker_state_tests.rs"]
mod picker_state_tests;
