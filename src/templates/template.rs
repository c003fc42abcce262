use serde::{Deserialize, Serialize};

/// A reusable message body.
///
/// `content` may carry markup; use [`crate::markup`] before displaying it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub content: String,
}

impl Template {
    pub fn new(id: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
        }
    }
}
