//! IPC protocol between Rust and JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: JavaScript calls `window.ipc.postMessage(JSON.stringify({...}))`,
//!   which triggers the `ipc_handler` registered on the view.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script("...")`, either to
//!   dispatch to a handler registered through `window.toolbox.ipc.on`, or to
//!   post a cross-document message with `window.postMessage`.

use serde::{Deserialize, Serialize};
use toolbox_common::{FrameMessage, Theme};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    #[serde(default = "IpcPayload::none")]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a simple string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcPayload {
    fn none() -> Self {
        Self::None
    }

    /// Deserialize a structured payload into `T`.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        match self {
            Self::Json(value) => serde_json::from_value(value.clone()).ok(),
            Self::Text(_) | Self::None => None,
        }
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Sets up the IPC bridge on the JS side. Injected into the launcher sidebar.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.toolbox = window.toolbox || {};
    window.toolbox.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Applies `setTheme` messages to the page's body class. Injected into every
/// tool view and pop-out window; messages of any other shape are ignored.
pub fn theme_listener_script() -> String {
    let dark = Theme::Dark.body_class();
    let light = Theme::Light.body_class();
    format!(
        r#"
(function() {{
    function applyTheme(theme) {{
        var body = document.body;
        if (!body) {{
            document.addEventListener('DOMContentLoaded', function() {{ applyTheme(theme); }});
            return;
        }}
        body.classList.remove('{dark}', '{light}');
        body.classList.add(theme === '{dark_name}' ? '{dark}' : '{light}');
    }}

    window.addEventListener('message', function(event) {{
        if (event.data && event.data.type === 'setTheme') {{
            applyTheme(event.data.theme);
        }}
    }});
}})();
"#,
        dark_name = Theme::Dark.as_str(),
    )
}

/// JS that dispatches a message to a handler registered in the view.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.toolbox.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// JS that posts a cross-document message to the view's own window.
pub fn js_post_frame_message(message: &FrameMessage) -> String {
    format!("window.postMessage({}, '*');", message.to_json())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_structured_message() {
        let msg = IpcMessage::from_json(r#"{"kind":"tool_toggle","payload":{"id":"timer","checked":true}}"#)
            .unwrap();
        assert_eq!(msg.kind, "tool_toggle");

        #[derive(Deserialize)]
        struct Toggle {
            id: String,
            checked: bool,
        }
        let toggle: Toggle = msg.payload.parse().unwrap();
        assert_eq!(toggle.id, "timer");
        assert!(toggle.checked);
    }

    #[test]
    fn missing_or_null_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"theme_toggle"}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::None));

        let msg = IpcMessage::from_json(r#"{"kind":"ready","payload":null}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::Json(serde_json::Value::Null)));
    }

    #[test]
    fn rejects_non_messages() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn dispatch_escapes_kind_and_payload() {
        let js = js_dispatch_message("alert", &serde_json::json!({"message": "it's \"full\""}));
        assert!(js.starts_with("window.toolbox.ipc._dispatch(\"alert\", "));
        assert!(js.contains(r#"\"full\""#));
    }

    #[test]
    fn frame_message_script() {
        let js = js_post_frame_message(&FrameMessage::set_theme(Theme::Dark));
        assert_eq!(js, r#"window.postMessage({"type":"setTheme","theme":"dark"}, '*');"#);
    }

    #[test]
    fn listener_only_handles_set_theme() {
        let script = theme_listener_script();
        assert!(script.contains("event.data.type === 'setTheme'"));
        assert!(script.contains("body.classList.remove('dark-theme', 'light-theme');"));
        assert!(script.contains("theme === 'dark' ? 'dark-theme' : 'light-theme'"));
        assert!(!script.contains("{{"));
    }
}
