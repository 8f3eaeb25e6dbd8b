//! Recording port implementations for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use toolbox_common::{
    DeliveryError, FrameMessage, LauncherError, Theme, ToolDescriptor, ToolId, ViewId,
};

use crate::layout::LayoutSignal;
use crate::menu::{MenuPlacement, WindowFeatures};
use crate::ports::{ExternalWindow, PaneHost, Presenter, ThemeTarget, WindowOpener};

pub type Inbox = Rc<RefCell<Vec<FrameMessage>>>;

#[derive(Debug)]
pub struct MockView {
    inbox: Inbox,
    _alive: Rc<()>,
}

impl ThemeTarget for MockView {
    fn post_message(&self, message: &FrameMessage) -> Result<(), DeliveryError> {
        self.inbox.borrow_mut().push(message.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockHost {
    pub created: Vec<ToolId>,
    fail_on: Option<ToolId>,
    inboxes: HashMap<ViewId, Inbox>,
    alive: HashMap<ToolId, Weak<()>>,
}

impl MockHost {
    pub fn failing_on(id: &str) -> Self {
        Self {
            fail_on: Some(ToolId::new(id)),
            ..Self::default()
        }
    }

    pub fn inbox(&self, view_id: ViewId) -> Option<Inbox> {
        self.inboxes.get(&view_id).cloned()
    }

    /// Dead once the most recent view built for `id` is dropped.
    pub fn liveness(&self, id: &ToolId) -> Option<Weak<()>> {
        self.alive.get(id).cloned()
    }
}

impl PaneHost for MockHost {
    type View = MockView;

    fn create_view(
        &mut self,
        view_id: ViewId,
        tool: &ToolDescriptor,
    ) -> Result<MockView, LauncherError> {
        if self.fail_on.as_ref() == Some(&tool.id) {
            return Err(LauncherError::ViewCreation {
                tool: tool.id.clone(),
                reason: "mock failure".into(),
            });
        }
        let inbox = Inbox::default();
        let alive = Rc::new(());
        self.created.push(tool.id.clone());
        self.inboxes.insert(view_id, inbox.clone());
        self.alive.insert(tool.id.clone(), Rc::downgrade(&alive));
        Ok(MockView {
            inbox,
            _alive: alive,
        })
    }
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub checked: HashMap<ToolId, bool>,
    pub alerts: Vec<String>,
    pub signals: Vec<LayoutSignal>,
    pub menus: Vec<Option<MenuPlacement>>,
    pub themes: Vec<Theme>,
}

impl RecordingPresenter {
    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.checked.get(&ToolId::new(id)).copied()
    }

    pub fn last_signal(&self) -> Option<&LayoutSignal> {
        self.signals.last()
    }
}

impl Presenter for RecordingPresenter {
    fn set_checked(&mut self, tool: &ToolId, checked: bool) {
        self.checked.insert(tool.clone(), checked);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn render_panes(&mut self, signal: &LayoutSignal) {
        self.signals.push(signal.clone());
    }

    fn render_menu(&mut self, menu: Option<&MenuPlacement>) {
        self.menus.push(menu.cloned());
    }

    fn render_theme(&mut self, theme: Theme) {
        self.themes.push(theme);
    }
}

#[derive(Debug, Clone)]
pub struct MockWindow {
    pub open: Rc<Cell<bool>>,
    pub inbox: Inbox,
}

impl MockWindow {
    pub fn new() -> Self {
        Self {
            open: Rc::new(Cell::new(true)),
            inbox: Inbox::default(),
        }
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn received(&self) -> Vec<FrameMessage> {
        self.inbox.borrow().clone()
    }
}

impl ThemeTarget for MockWindow {
    fn post_message(&self, message: &FrameMessage) -> Result<(), DeliveryError> {
        if !self.open.get() {
            return Err(DeliveryError::TargetClosed);
        }
        self.inbox.borrow_mut().push(message.clone());
        Ok(())
    }
}

impl ExternalWindow for MockWindow {
    fn is_open(&self) -> bool {
        self.open.get()
    }
}

#[derive(Debug, Default)]
pub struct MockOpener {
    pub opened: Vec<(ToolId, WindowFeatures)>,
    pub windows: Vec<MockWindow>,
    pub fail: bool,
}

impl WindowOpener for MockOpener {
    type Window = MockWindow;

    fn open_window(
        &mut self,
        tool: &ToolDescriptor,
        features: &WindowFeatures,
    ) -> Result<MockWindow, LauncherError> {
        if self.fail {
            return Err(LauncherError::WindowOpen {
                tool: tool.id.clone(),
                reason: "blocked".into(),
            });
        }
        let window = MockWindow::new();
        self.opened.push((tool.id.clone(), *features));
        self.windows.push(window.clone());
        Ok(window)
    }
}
