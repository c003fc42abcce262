use crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::Input;

use crate::app::App;

pub fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => {
            app.picker.select_previous();
        }
        KeyCode::Down => {
            app.picker.select_next();
        }

        KeyCode::Enter | KeyCode::Tab => {
            let content = app.picker.selected_template().map(|t| t.content.clone());
            app.picker.close();
            if let Some(content) = content {
                app.insert_template(&content);
            }
        }

        KeyCode::Esc => {
            app.picker.close();
        }

        _ => {
            let input = Input::from(key);
            if app.picker.search_textarea_mut().input(input) {
                app.picker.on_search_input_changed();
            }
        }
    }
}

#[cfg(test)]
#[path = "picker_events_tests.rs"]
mod picker_events_tests;
