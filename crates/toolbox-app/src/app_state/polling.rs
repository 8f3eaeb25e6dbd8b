//! Webview event draining and retry scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::ToolboxApp;
use super::types::POLL_INTERVAL;

impl ToolboxApp {
    /// Drain webview events, fire due pop-out retries, and schedule the
    /// next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let events = match &self.shell {
            Some(shell) => shell.manager.drain_events(),
            None => Vec::new(),
        };
        for event in events {
            self.handle_webview_event(event_loop, event);
        }

        let now = Instant::now();
        let next_poll = now + POLL_INTERVAL;
        let wake = match self.launcher.poll_retries(now) {
            Some(deadline) => deadline.min(next_poll),
            None => next_poll,
        };
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }
}
