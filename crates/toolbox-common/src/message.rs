//! Cross-document message protocol.
//!
//! The launcher pushes `{"type": "setTheme", "theme": "light"|"dark"}` into
//! every embedded view and pop-out window. Delivery is one-way with no
//! acknowledgment. Receivers ignore anything that does not have this shape.

use serde::{Deserialize, Serialize};

use crate::types::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameMessage {
    #[serde(rename = "setTheme")]
    SetTheme { theme: Theme },
}

impl FrameMessage {
    pub fn set_theme(theme: Theme) -> Self {
        Self::SetTheme { theme }
    }

    pub fn to_json(&self) -> String {
        match self {
            Self::SetTheme { theme } => {
                format!(r#"{{"type":"setTheme","theme":"{}"}}"#, theme.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_theme_wire_shape() {
        let msg = FrameMessage::set_theme(Theme::Dark);
        let value: serde_json::Value = serde_json::to_value(msg).unwrap();
        assert_eq!(value["type"], "setTheme");
        assert_eq!(value["theme"], "dark");
    }

    #[test]
    fn to_json_matches_serde() {
        let msg = FrameMessage::set_theme(Theme::Light);
        let ours: serde_json::Value = serde_json::from_str(&msg.to_json()).unwrap();
        let theirs = serde_json::to_value(msg).unwrap();
        assert_eq!(ours, theirs);
    }

    #[test]
    fn deserializes_protocol_message() {
        let msg: FrameMessage = serde_json::from_str(r#"{"type":"setTheme","theme":"dark"}"#).unwrap();
        assert_eq!(msg, FrameMessage::set_theme(Theme::Dark));
    }

    #[test]
    fn rejects_foreign_shapes() {
        for raw in [
            r#"{"type":"resize","width":10}"#,
            r#"{"type":"setTheme","theme":"sepia"}"#,
            r#"{"theme":"dark"}"#,
        ] {
            assert!(serde_json::from_str::<FrameMessage>(raw).is_err(), "{raw}");
        }
    }
}
