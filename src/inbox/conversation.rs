use serde::Serialize;

use crate::composer::ComposerHost;
use crate::config::ConversationConfig;
use crate::error::QuickReplyError;
use crate::markup;
use crate::mentions::Member;

use super::notification::{ConversationStatus, Notification, NotificationKind};

/// A reply that was sent from the composer
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SentMessage {
    pub conversation_id: String,
    pub content: String,
    pub mentioned_user_ids: Vec<String>,
    pub attachments: Vec<String>,
    pub created_at: String,
    pub notify_user_ids: Vec<String>,
}

/// The conversation the composer replies to
#[derive(Debug, Default)]
pub struct Conversation {
    id: String,
    current_user_id: Option<String>,
    assigned_user_id: Option<String>,
    participated_user_ids: Vec<String>,
    status: ConversationStatus,
    starred: bool,
    read_user_ids: Vec<String>,
    notifications: Vec<Notification>,
    draft_html: String,
    draft_mentions: Vec<String>,
    attachments: Vec<String>,
    messages: Vec<SentMessage>,
    last_error: Option<QuickReplyError>,
}

impl Conversation {
    pub fn new(config: &ConversationConfig) -> Self {
        Self {
            id: config.id.clone(),
            current_user_id: config.current_user_id.clone(),
            assigned_user_id: config.assigned_user_id.clone(),
            participated_user_ids: config.participated_user_ids.clone(),
            status: config.status,
            ..Self::default()
        }
    }

    pub fn draft_html(&self) -> &str {
        &self.draft_html
    }

    pub fn draft_mentions(&self) -> &[String] {
        &self.draft_mentions
    }

    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    pub fn messages(&self) -> &[SentMessage] {
        &self.messages
    }

    pub fn last_error(&self) -> Option<&QuickReplyError> {
        self.last_error.as_ref()
    }

    pub fn assigned_user_id(&self) -> Option<&str> {
        self.assigned_user_id.as_deref()
    }

    pub fn status(&self) -> ConversationStatus {
        self.status
    }

    pub fn is_starred(&self) -> bool {
        self.starred
    }

    pub fn read_user_ids(&self) -> &[String] {
        &self.read_user_ids
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Hand the conversation to a team member and tell everyone involved
    pub fn assign(&mut self, user_id: &str, members: &[Member]) -> Result<(), QuickReplyError> {
        let member = members
            .iter()
            .find(|member| member.id == user_id)
            .ok_or_else(|| QuickReplyError::UserNotFound(user_id.to_string()))?;

        self.assigned_user_id = Some(member.id.clone());
        let content = format!("Conversation's assigned person changed to {}", member.name);
        self.notify(NotificationKind::ConversationAssigneeChange, content, &[]);
        Ok(())
    }

    pub fn unassign(&mut self) {
        self.assigned_user_id = None;
    }

    pub fn change_status(&mut self, status: ConversationStatus) {
        self.status = status;
        let content = format!("Conversation's status changed to {}", status);
        self.notify(NotificationKind::ConversationStateChange, content, &[]);
    }

    pub fn star(&mut self) {
        self.starred = true;
    }

    pub fn unstar(&mut self) {
        self.starred = false;
    }

    /// Record that `user_id` has read the conversation. Returns false when
    /// they already had.
    pub fn mark_as_read(&mut self, user_id: &str) -> bool {
        if self.read_user_ids.iter().any(|id| id == user_id) {
            return false;
        }
        self.read_user_ids.push(user_id.to_string());
        true
    }

    /// Queue a file for the next message
    pub fn attach(&mut self, path: impl Into<String>) {
        let path = path.into();
        if path.trim().is_empty() {
            return;
        }
        log::debug!("Attached {}", path);
        self.attachments.push(path);
    }

    /// Send the current draft.
    ///
    /// A draft without attachments needs some text. The draft, its mentions
    /// and the attachments are reset once the message is recorded.
    pub fn send(&mut self) -> Result<(), QuickReplyError> {
        let text = markup::strip_markup(&self.draft_html);
        if self.attachments.is_empty() && text.trim().is_empty() {
            return Err(QuickReplyError::ContentRequired);
        }

        let lines = markup::html_to_lines(&self.draft_html);
        let mentioned_user_ids = std::mem::take(&mut self.draft_mentions);
        let message = SentMessage {
            conversation_id: self.id.clone(),
            content: markup::lines_to_linked_html(&lines),
            notify_user_ids: self.notify_user_ids(&mentioned_user_ids),
            mentioned_user_ids,
            attachments: std::mem::take(&mut self.attachments),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.draft_html.clear();

        log::debug!(
            "Sent message to conversation '{}', notifying {:?}",
            message.conversation_id,
            message.notify_user_ids
        );

        let mentioned = message.mentioned_user_ids.clone();
        self.messages.push(message);
        self.notify(
            NotificationKind::ConversationAddMessage,
            "New message on a conversation".to_string(),
            &mentioned,
        );
        Ok(())
    }

    /// Assigned user, then participants, then mentioned users, without the
    /// sender and without repeats.
    pub fn notify_user_ids(&self, mentioned_user_ids: &[String]) -> Vec<String> {
        let mut receivers: Vec<String> = Vec::new();

        let candidates = self
            .assigned_user_id
            .iter()
            .chain(&self.participated_user_ids)
            .chain(mentioned_user_ids);

        for id in candidates {
            if self.current_user_id.as_ref() == Some(id) || receivers.contains(id) {
                continue;
            }
            receivers.push(id.clone());
        }

        receivers
    }

    fn notify(&mut self, kind: NotificationKind, content: String, mentioned_user_ids: &[String]) {
        let receivers = self.notify_user_ids(mentioned_user_ids);
        log::debug!("{:?} notification for {:?}", kind, receivers);
        self.notifications.push(Notification {
            kind,
            conversation_id: self.id.clone(),
            created_user_id: self.current_user_id.clone(),
            content,
            receivers,
            created_at: chrono::Utc::now().to_rfc3339(),
        });
    }
}

impl ComposerHost for Conversation {
    fn on_change(&mut self, html: &str) {
        self.draft_html = html.to_string();
        self.last_error = None;
    }

    fn on_mentions(&mut self, member_ids: &[String]) {
        self.draft_mentions = member_ids.to_vec();
    }

    fn on_submit(&mut self) {
        if let Err(e) = self.send() {
            log::debug!("Message not sent: {}", e);
            self.last_error = Some(e);
        }
    }
}

#[cfg(test)]
#[path = "conversation_tests.rs"]
mod conversation_tests;
