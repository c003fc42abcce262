use std::collections::VecDeque;

use crate::composer::composer_render::PopupAreas;
use crate::composer::{ComposerState, Deferred};
use crate::config::Config;
use crate::inbox::Conversation;
use crate::mentions::Member;
use crate::template_picker::TemplatePicker;
use crate::templates::Template;

/// Application state
#[derive(Debug)]
pub struct App {
    pub composer: ComposerState,
    pub conversation: Conversation,
    pub templates: Vec<Template>,
    pub members: Vec<Member>,
    pub picker: TemplatePicker,
    /// Path being typed after Ctrl+O, while the prompt is open
    pub attachment_prompt: Option<String>,
    pub popup_areas: PopupAreas,
    pub should_quit: bool,
    deferred: VecDeque<Deferred>,
}

impl App {
    pub fn new(templates: Vec<Template>, config: &Config) -> Self {
        let composer = ComposerState::new(config.composer.mentions)
            .with_placeholder(&config.composer.placeholder);

        let mut conversation = Conversation::new(&config.conversation);
        if let Some(user_id) = &config.conversation.current_user_id {
            conversation.mark_as_read(user_id);
        }

        Self {
            composer,
            conversation,
            templates,
            members: config.members.clone(),
            picker: TemplatePicker::new(),
            attachment_prompt: None,
            popup_areas: PopupAreas::default(),
            should_quit: false,
            deferred: VecDeque::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run one composer transition against the conversation host
    pub(super) fn update_composer<R>(
        &mut self,
        transition: impl FnOnce(ComposerState, &mut Conversation) -> (ComposerState, R),
    ) -> R {
        let state = std::mem::take(&mut self.composer);
        let (state, result) = transition(state, &mut self.conversation);
        self.composer = state;
        result
    }

    pub(super) fn schedule(&mut self, task: Deferred) {
        self.deferred.push_back(task);
    }

    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Drain the work queued while handling the last event. Called by the
    /// event loop between handling an event and drawing the next frame.
    pub fn run_deferred(&mut self) {
        while let Some(task) = self.deferred.pop_front() {
            let state = std::mem::take(&mut self.composer);
            self.composer = state.run_deferred(task, &self.templates, &self.members);
        }
    }

    /// Feed a new "insert this template" value to the composer
    pub fn set_template_prop(&mut self, content: Option<&str>) {
        self.update_composer(|state, host| (state.on_template_prop_change(content, host), ()));
    }

    /// Replace the draft with a picked template. The value is reset once
    /// the composer took it, so picking the same template again inserts it
    /// again.
    pub fn insert_template(&mut self, content: &str) {
        self.set_template_prop(Some(content));
        self.set_template_prop(None);
    }

    /// Assign the conversation to the member after the current assignee,
    /// wrapping around the team
    pub fn assign_next_member(&mut self) {
        if self.members.is_empty() {
            return;
        }

        let next = match self.conversation.assigned_user_id() {
            Some(current) => self
                .members
                .iter()
                .position(|member| member.id == current)
                .map_or(0, |i| (i + 1) % self.members.len()),
            None => 0,
        };
        let user_id = self.members[next].id.clone();

        if let Err(e) = self.conversation.assign(&user_id, &self.members) {
            log::debug!("Assignment failed: {}", e);
        }
    }

    pub fn cycle_status(&mut self) {
        let status = self.conversation.status().next();
        self.conversation.change_status(status);
    }

    pub fn toggle_star(&mut self) {
        if self.conversation.is_starred() {
            self.conversation.unstar();
        } else {
            self.conversation.star();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
