use serde::{Deserialize, Serialize};

use super::core::{Size, ToolId};

/// Static description of one tool the launcher can embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub id: ToolId,
    /// Label shown next to the tool's checkbox.
    #[serde(default)]
    pub title: String,
    /// Resource path, relative to the content root (e.g. `email/index.html`).
    pub path: String,
    /// Preferred size when opened in its own window.
    #[serde(default)]
    pub window: Option<Size>,
    /// Admit this tool at startup.
    #[serde(default)]
    pub checked: bool,
}

impl ToolDescriptor {
    pub fn new(id: impl Into<ToolId>, path: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: id.to_string(),
            id,
            path: path.into(),
            window: None,
            checked: false,
        }
    }

    pub fn with_window(mut self, width: u32, height: u32) -> Self {
        self.window = Some(Size::new(width, height));
        self
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            self.id.as_str()
        } else {
            &self.title
        }
    }
}
