//! Single-conversation inbox
//!
//! Hosts the composer: keeps the draft it reports, validates and records sent
//! messages, and works out who gets notified about each one. Assignment,
//! status changes, starring and read tracking live here too.

mod conversation;
pub mod inbox_render;
mod notification;

pub use conversation::{Conversation, SentMessage};
pub use notification::{ConversationStatus, Notification, NotificationKind};
