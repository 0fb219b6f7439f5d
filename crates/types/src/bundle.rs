use serde::{Deserialize, Serialize};

/// A dual-channel rendering of one or more values.
///
/// Both channels carry raw content: consumers pass them through without
/// reinterpretation and must not re-escape the rich channel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBundle {
    /// Plain-text channel.
    pub text: String,
    /// Rich-markup channel.
    pub html: String,
}

impl DisplayBundle {
    pub fn new(text: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: html.into(),
        }
    }
}
