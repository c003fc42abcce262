use ratatui::style::{Color, Style};
use tui_textarea::{CursorMove, Input, TextArea};

use crate::markup;

/// The editable draft.
///
/// Thin layer over [`TextArea`], which keeps the caret, the selection and the
/// undo history. Content enters and leaves as HTML.
#[derive(Debug, Clone)]
pub struct ComposerDocument {
    textarea: TextArea<'static>,
}

impl Default for ComposerDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl ComposerDocument {
    pub fn empty() -> Self {
        Self::from_textarea(TextArea::default())
    }

    pub fn from_html(html: &str) -> Self {
        Self::from_textarea(TextArea::new(markup::html_to_lines(html)))
    }

    fn from_textarea(mut textarea: TextArea<'static>) -> Self {
        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
        Self { textarea }
    }

    pub fn set_placeholder(&mut self, text: &str) {
        self.textarea.set_placeholder_text(text);
    }

    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    pub fn to_html(&self) -> String {
        markup::lines_to_html(self.lines())
    }

    /// Projection used for matching. Lines are joined with `\n`.
    pub fn plain_text(&self) -> String {
        self.lines().join("\n")
    }

    pub fn is_blank(&self) -> bool {
        self.lines().iter().all(|line| line.trim().is_empty())
    }

    /// (row, column) of the caret, column counted in chars
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    /// The caret line up to the caret
    pub fn text_before_cursor(&self) -> String {
        let (row, col) = self.cursor();
        self.lines()
            .get(row)
            .map(|line| line.chars().take(col).collect())
            .unwrap_or_default()
    }

    pub fn move_to_start(&mut self) {
        self.textarea.move_cursor(CursorMove::Top);
        self.textarea.move_cursor(CursorMove::Head);
    }

    pub fn move_to_end(&mut self) {
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Insert plain text at the caret
    pub fn insert_text(&mut self, text: &str) -> bool {
        self.textarea.insert_str(text)
    }

    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
    }

    /// Delete up to `count` chars before the caret
    pub fn delete_before_cursor(&mut self, count: usize) {
        for _ in 0..count {
            if !self.textarea.delete_char() {
                break;
            }
        }
    }

    /// Replace everything with `lines`. The replacement is recorded in the
    /// edit history, so it can be undone, and the caret ends after the new
    /// content. The yank buffer is left as it was.
    pub fn replace_content(&mut self, lines: &[String]) {
        let yank = self.textarea.yank_text();

        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(lines.join("\n"));

        self.textarea.set_yank_text(yank);
    }

    /// Replace everything with content imported from HTML
    pub fn import_html(&mut self, html: &str) {
        self.replace_content(&markup::html_to_lines(html));
    }

    pub fn clear(&mut self) {
        self.replace_content(&[String::new()]);
    }

    /// Feed a key to the editor. Returns true when the text changed.
    pub fn apply_input(&mut self, input: impl Into<Input>) -> bool {
        self.textarea.input(input)
    }

    pub fn undo(&mut self) -> bool {
        self.textarea.undo()
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
