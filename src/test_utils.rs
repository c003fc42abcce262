#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::composer::ComposerHost;
    use crate::config::Config;
    use crate::mentions::Member;
    use crate::templates::Template;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn sample_templates() -> Vec<Template> {
        vec![
            Template::new("greet", "Greeting", "<p>Hello there</p>"),
            Template::new("close", "Closing", "Best regards"),
            Template::new("ship", "Shipping update", "<p>Your order has <b>shipped</b>.</p>"),
        ]
    }

    pub fn sample_members() -> Vec<Member> {
        vec![
            Member::new("u1", "Ada"),
            Member::new("u2", "Alan"),
            Member::new("u3", "Grace"),
        ]
    }

    pub fn test_app() -> App {
        App::new(sample_templates(), &Config::with_members(sample_members()))
    }

    /// Type `text` into the app one key at a time, running deferred work
    /// after each key like the event loop does.
    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
            app.run_deferred();
        }
    }

    /// Host that records every callback
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub changes: Vec<String>,
        pub mention_reports: Vec<Vec<String>>,
        pub submits: usize,
    }

    impl RecordingHost {
        pub fn last_change(&self) -> Option<&str> {
            self.changes.last().map(String::as_str)
        }
    }

    impl ComposerHost for RecordingHost {
        fn on_change(&mut self, html: &str) {
            self.changes.push(html.to_string());
        }

        fn on_mentions(&mut self, member_ids: &[String]) {
            self.mention_reports.push(member_ids.to_vec());
        }

        fn on_submit(&mut self) {
            self.submits += 1;
        }
    }
}
