use toolbox_common::{ToolDescriptor, ToolId, ViewId};

/// One embedded tool instance. The pane owns its view; dropping the pane
/// tears the view down.
#[derive(Debug)]
pub struct Pane<V> {
    pub tool: ToolDescriptor,
    pub view_id: ViewId,
    pub view: V,
    /// Set once the view reported load-complete.
    pub loaded: bool,
}

impl<V> Pane<V> {
    pub fn new(tool: ToolDescriptor, view_id: ViewId, view: V) -> Self {
        Self {
            tool,
            view_id,
            view,
            loaded: false,
        }
    }

    pub fn id(&self) -> &ToolId {
        &self.tool.id
    }
}
