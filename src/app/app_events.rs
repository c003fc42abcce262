use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use super::app_state::App;
use super::mouse_click;
use crate::composer::{ComposerDocument, KeyOutcome};
use crate::template_picker::picker_events;

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        if self.picker.is_visible() {
            picker_events::handle_picker_key(self, key);
            return;
        }

        if self.attachment_prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        self.handle_composer_key(key);
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        mouse_click::handle_mouse(self, mouse);
    }

    /// Keys that work regardless of what is open.
    /// Returns true if key was handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char('c') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('t') => {
                self.attachment_prompt = None;
                self.picker.open(&self.templates);
                true
            }
            KeyCode::Char('o') => {
                self.picker.close();
                self.attachment_prompt = Some(String::new());
                true
            }
            _ => false,
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(path) = self.attachment_prompt.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Enter => {
                let path = std::mem::take(path);
                self.conversation.attach(path.trim());
                self.attachment_prompt = None;
            }
            KeyCode::Esc => self.attachment_prompt = None,
            KeyCode::Backspace => {
                path.pop();
            }
            KeyCode::Char(c) => path.push(c),
            _ => {}
        }
    }

    fn handle_composer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(2) => self.assign_next_member(),
            KeyCode::F(3) => self.conversation.unassign(),
            KeyCode::F(4) => self.cycle_status(),
            KeyCode::F(5) => self.toggle_star(),
            KeyCode::Enter => {
                let outcome = self.update_composer(|state, host| state.on_enter_key(key, host));
                if outcome == KeyOutcome::PassThrough {
                    self.edit_document(|document| document.insert_newline());
                }
            }
            KeyCode::Up | KeyCode::Down => {
                let delta = if key.code == KeyCode::Up { -1 } else { 1 };
                let outcome = self.update_composer(|state, _| state.on_navigate(delta));
                if outcome == KeyOutcome::PassThrough {
                    self.edit_document(|document| {
                        document.apply_input(key);
                    });
                }
            }
            _ => self.edit_document(|document| {
                document.apply_input(key);
            }),
        }
    }

    /// Apply an editor operation to a copy of the draft and commit it when
    /// the text or the caret moved. Suggestions follow on the deferred pass.
    pub(super) fn edit_document(&mut self, edit: impl FnOnce(&mut ComposerDocument)) {
        let mut document = self.composer.document().clone();
        edit(&mut document);

        let current = self.composer.document();
        if document.lines() == current.lines() && document.cursor() == current.cursor() {
            return;
        }

        let task = self.update_composer(|state, host| state.on_content_change(document, host));
        self.schedule(task);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
