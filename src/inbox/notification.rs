use std::fmt;

use serde::{Deserialize, Serialize};

/// Workflow state of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    #[default]
    New,
    Open,
    Closed,
}

impl ConversationStatus {
    /// The status the status key moves to: new → open → closed → open
    pub fn next(self) -> Self {
        match self {
            ConversationStatus::New | ConversationStatus::Closed => ConversationStatus::Open,
            ConversationStatus::Open => ConversationStatus::Closed,
        }
    }
}

impl fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConversationStatus::New => "new",
            ConversationStatus::Open => "open",
            ConversationStatus::Closed => "closed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ConversationAddMessage,
    ConversationAssigneeChange,
    ConversationStateChange,
}

/// A notification raised by an action on the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub conversation_id: String,
    pub created_user_id: Option<String>,
    pub content: String,
    pub receivers: Vec<String>,
    pub created_at: String,
}
