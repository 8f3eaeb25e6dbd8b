//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::ToolboxApp;
use super::webview_bridge::SidebarPresenter;

impl ApplicationHandler for ToolboxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.shell.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.start_panes();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.is_main_window(window_id) {
            self.handle_main_window_event(event_loop, event);
        } else {
            self.handle_popup_event(window_id, event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl ToolboxApp {
    fn handle_main_window_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.handle_resize();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.handle_resize();
            }

            _ => {}
        }
    }

    fn handle_popup_event(&mut self, window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                if let Some(popup) = self.popups.remove(&window_id) {
                    tracing::info!(tool = %popup.tool, "Tool window closed");
                }
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(popup) = self.popups.get(&window_id) {
                    popup.fit();
                }
            }

            _ => {}
        }
    }

    /// Re-classify the viewport and re-lay the panes.
    fn handle_resize(&mut self) {
        let Some(shell) = &self.shell else {
            return;
        };
        let (width, _) = shell.logical_size();
        let mut presenter = SidebarPresenter::new(&shell.sidebar);

        let evicted = self.launcher.resize(width, &mut presenter);
        if !evicted.is_empty() {
            let mode = self.launcher.selection().mode();
            tracing::info!(width, ?mode, evicted = evicted.len(), "Extra panes closed");
        }
        self.sync_bounds();
    }
}
