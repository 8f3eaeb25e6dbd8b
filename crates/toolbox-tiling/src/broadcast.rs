//! Theme fan-out to panes and pop-out windows.
//!
//! Every push is fire-and-forget. A pane that has not finished loading may
//! miss a broadcast; it receives the current theme on load-complete instead.
//! Pop-out windows have no load signal, so each new window gets the current
//! theme re-sent at fixed delays after it opens.

use std::time::{Duration, Instant};

use toolbox_common::{FrameMessage, Theme};
use tracing::debug;

use crate::pane::Pane;
use crate::ports::{ExternalWindow, ThemeTarget};

/// Pushes made by one broadcast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub panes: usize,
    pub windows: usize,
    /// Handed off but rejected by the target.
    pub dropped: usize,
}

#[derive(Debug)]
struct PendingRetry<W> {
    due: Instant,
    window: W,
}

/// Tracks open pop-out windows and their pending theme re-sends.
#[derive(Debug)]
pub struct ThemeBroadcaster<W> {
    windows: Vec<W>,
    retries: Vec<PendingRetry<W>>,
    retry_delays: Vec<Duration>,
}

impl<W: ExternalWindow> ThemeBroadcaster<W> {
    pub fn new(retry_delays: Vec<Duration>) -> Self {
        Self {
            windows: Vec::new(),
            retries: Vec::new(),
            retry_delays,
        }
    }

    pub fn from_millis(delays_ms: &[u64]) -> Self {
        Self::new(delays_ms.iter().copied().map(Duration::from_millis).collect())
    }

    /// Windows still open. Closed handles are pruned on the next broadcast.
    pub fn open_windows(&self) -> usize {
        self.windows.iter().filter(|w| w.is_open()).count()
    }

    pub fn pending_retries(&self) -> usize {
        self.retries.len()
    }

    /// Send `theme` to every pane and every open window.
    pub fn broadcast<'a, V, I>(&mut self, theme: Theme, panes: I) -> BroadcastReport
    where
        V: ThemeTarget + 'a,
        I: IntoIterator<Item = &'a Pane<V>>,
    {
        let message = FrameMessage::set_theme(theme);
        let mut report = BroadcastReport::default();

        for pane in panes {
            match pane.view.post_message(&message) {
                Ok(()) => report.panes += 1,
                Err(e) => {
                    report.dropped += 1;
                    debug!(tool = %pane.id(), loaded = pane.loaded, "theme push dropped: {e}");
                }
            }
        }

        self.windows.retain(|w| w.is_open());
        for window in &self.windows {
            match window.post_message(&message) {
                Ok(()) => report.windows += 1,
                Err(e) => {
                    report.dropped += 1;
                    debug!("theme push to window dropped: {e}");
                }
            }
        }

        debug!(%theme, ?report, "theme broadcast");
        report
    }

    /// Start tracking a freshly opened window and schedule its re-sends.
    pub fn track_window(&mut self, window: W, opened_at: Instant) {
        for delay in &self.retry_delays {
            self.retries.push(PendingRetry {
                due: opened_at + *delay,
                window: window.clone(),
            });
        }
        self.windows.push(window);
    }

    /// Fire every retry due at `now`, sending `theme`. Returns how many were
    /// delivered; retries against closed windows are discarded silently.
    pub fn poll_retries(&mut self, theme: Theme, now: Instant) -> usize {
        let message = FrameMessage::set_theme(theme);
        let mut delivered = 0;

        self.retries.retain(|retry| {
            if retry.due > now {
                return true;
            }
            if !retry.window.is_open() {
                return false;
            }
            match retry.window.post_message(&message) {
                Ok(()) => delivered += 1,
                Err(e) => debug!("theme retry dropped: {e}"),
            }
            false
        });

        delivered
    }

    /// Earliest pending retry, for scheduling the next wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.retries.iter().map(|r| r.due).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PaneRegistry;
    use crate::testing::{MockHost, MockView, MockWindow};
    use crate::ports::PaneHost;
    use toolbox_common::ToolDescriptor;

    fn broadcaster() -> ThemeBroadcaster<MockWindow> {
        ThemeBroadcaster::from_millis(&[300, 1000])
    }

    fn registry_with(host: &mut MockHost, ids: &[&str]) -> PaneRegistry<MockView> {
        let mut reg = PaneRegistry::new();
        for id in ids {
            let tool = ToolDescriptor::new(*id, format!("{id}/index.html"));
            let view_id = reg.allocate_view_id();
            let view = host.create_view(view_id, &tool).unwrap();
            reg.insert(Pane::new(tool, view_id, view));
        }
        reg
    }

    #[test]
    fn broadcast_reaches_panes_and_windows() {
        let mut host = MockHost::default();
        let reg = registry_with(&mut host, &["email", "timer"]);
        let mut b = broadcaster();
        let window = MockWindow::new();
        b.track_window(window.clone(), Instant::now());

        let report = b.broadcast(Theme::Dark, reg.iter());
        assert_eq!(report, BroadcastReport { panes: 2, windows: 1, dropped: 0 });

        let dark = FrameMessage::set_theme(Theme::Dark);
        for pane in reg.iter() {
            assert_eq!(*host.inbox(pane.view_id).unwrap().borrow(), vec![dark]);
        }
        assert_eq!(window.received(), vec![dark]);
    }

    #[derive(Debug)]
    struct Unreachable;

    impl ThemeTarget for Unreachable {
        fn post_message(&self, _: &FrameMessage) -> Result<(), toolbox_common::DeliveryError> {
            Err(toolbox_common::DeliveryError::TargetClosed)
        }
    }

    #[test]
    fn failed_pushes_are_counted_as_dropped() {
        let panes = [Pane::new(
            ToolDescriptor::new("email", "email/index.html"),
            toolbox_common::ViewId(1),
            Unreachable,
        )];
        let report = broadcaster().broadcast(Theme::Dark, panes.iter());
        assert_eq!(report, BroadcastReport { panes: 0, windows: 0, dropped: 1 });
    }

    #[test]
    fn closed_windows_are_pruned() {
        let mut b = broadcaster();
        let window = MockWindow::new();
        b.track_window(window.clone(), Instant::now());
        window.close();

        let report = b.broadcast(Theme::Light, std::iter::empty::<&Pane<MockView>>());
        assert_eq!(report.windows, 0);
        assert_eq!(b.open_windows(), 0);
        assert!(window.received().is_empty());
    }

    #[test]
    fn retries_fire_at_each_delay_with_current_theme() {
        let mut b = broadcaster();
        let t0 = Instant::now();
        let window = MockWindow::new();
        b.track_window(window.clone(), t0);
        assert_eq!(b.pending_retries(), 2);
        assert_eq!(b.next_deadline(), Some(t0 + Duration::from_millis(300)));

        assert_eq!(b.poll_retries(Theme::Light, t0 + Duration::from_millis(100)), 0);
        assert_eq!(b.poll_retries(Theme::Light, t0 + Duration::from_millis(300)), 1);
        assert_eq!(b.next_deadline(), Some(t0 + Duration::from_millis(1000)));

        // Theme changed between the two retries
        assert_eq!(b.poll_retries(Theme::Dark, t0 + Duration::from_millis(1500)), 1);
        assert_eq!(b.next_deadline(), None);
        assert_eq!(
            window.received(),
            vec![
                FrameMessage::set_theme(Theme::Light),
                FrameMessage::set_theme(Theme::Dark)
            ]
        );
    }

    #[test]
    fn retries_against_closed_window_are_noops() {
        let mut b = broadcaster();
        let t0 = Instant::now();
        let window = MockWindow::new();
        b.track_window(window.clone(), t0);
        window.close();

        assert_eq!(b.poll_retries(Theme::Dark, t0 + Duration::from_secs(5)), 0);
        assert_eq!(b.pending_retries(), 0);
        assert!(window.received().is_empty());
    }

    #[test]
    fn each_window_gets_its_own_schedule() {
        let mut b = broadcaster();
        let t0 = Instant::now();
        b.track_window(MockWindow::new(), t0);
        b.track_window(MockWindow::new(), t0 + Duration::from_millis(200));
        assert_eq!(b.pending_retries(), 4);

        assert_eq!(b.poll_retries(Theme::Light, t0 + Duration::from_millis(500)), 2);
        assert_eq!(b.next_deadline(), Some(t0 + Duration::from_millis(1000)));
    }
}
