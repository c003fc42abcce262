// Configuration type definitions

use serde::Deserialize;

use crate::inbox::ConversationStatus;
use crate::mentions::Member;

pub const DEFAULT_PLACEHOLDER: &str = "Write a reply…";

/// Composer configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ComposerConfig {
    #[serde(default = "default_mentions")]
    pub mentions: bool,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_mentions() -> bool {
    true
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for ComposerConfig {
    fn default() -> Self {
        ComposerConfig {
            mentions: default_mentions(),
            placeholder: default_placeholder(),
        }
    }
}

/// The conversation being replied to
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationConfig {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub current_user_id: Option<String>,
    #[serde(default)]
    pub assigned_user_id: Option<String>,
    #[serde(default)]
    pub participated_user_ids: Vec<String>,
    #[serde(default)]
    pub status: ConversationStatus,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub composer: ComposerConfig,
    #[serde(default)]
    pub conversation: ConversationConfig,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Config {
    /// Default config with a team to mention
    pub fn with_members(members: Vec<Member>) -> Self {
        Config {
            members,
            ..Config::default()
        }
    }
}
