//! User notification capability.
//!
//! The timer and the screen switcher only know the [`Notifier`] trait.
//! In the terminal, announcements land in the status line (and on macOS
//! optionally in Notification Center), and the alert is the terminal bell.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

#[cfg(target_os = "macos")]
use std::process::Command;

/// Announcement emitted when a countdown completes
pub const TIMER_DONE_MESSAGE: &str = "Timer is up.";

/// Something that can get the user's attention
pub trait Notifier {
    /// Deliver a short textual announcement
    fn announce(&self, message: &str);

    /// Produce an audible alert
    fn alert(&self);
}

/// Shared single-line status message rendered at the bottom of the screen
#[derive(Debug, Clone, Default)]
pub struct StatusLine(Rc<RefCell<Option<String>>>);

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, message: impl Into<String>) {
        *self.0.borrow_mut() = Some(message.into());
    }

    pub fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

/// Notifier for the terminal UI
pub struct TerminalNotifier {
    status: StatusLine,
    sound: bool,
    desktop: bool,
}

impl TerminalNotifier {
    pub fn new(status: StatusLine, sound: bool, desktop: bool) -> Self {
        Self {
            status,
            sound,
            desktop,
        }
    }
}

impl Notifier for TerminalNotifier {
    fn announce(&self, message: &str) {
        log::info!("announce: {}", message);
        self.status.set(message);
        if self.desktop {
            notify_desktop(message);
        }
    }

    fn alert(&self) {
        if !self.sound {
            return;
        }

        // BEL; the terminal decides how to render it
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            log::warn!("failed to ring terminal bell: {}", e);
        }
    }
}

/// Post a desktop notification (macOS only)
pub fn notify_desktop(message: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "ticklist""#,
            message.replace('"', "\\\"")
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            log::warn!("failed to post desktop notification: {}", e);
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = message;
    }
}

/// What a [`RecordingNotifier`] has seen
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Announcement(String),
    Alert,
}

/// Test double that records every notification in order
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn announcements(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Announcement(m) => Some(m.clone()),
                Notice::Alert => None,
            })
            .collect()
    }

    pub fn alert_count(&self) -> usize {
        self.notices
            .borrow()
            .iter()
            .filter(|n| matches!(n, Notice::Alert))
            .count()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn announce(&self, message: &str) {
        self.notices
            .borrow_mut()
            .push(Notice::Announcement(message.to_string()));
    }

    fn alert(&self) {
        self.notices.borrow_mut().push(Notice::Alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_is_shared_between_clones() {
        let status = StatusLine::new();
        let other = status.clone();
        status.set("hello");
        assert_eq!(other.get().as_deref(), Some("hello"));
        other.set("bye");
        assert_eq!(status.get().as_deref(), Some("bye"));
    }

    #[test]
    fn test_terminal_notifier_writes_status() {
        let status = StatusLine::new();
        let notifier = TerminalNotifier::new(status.clone(), false, false);
        notifier.announce("Selected screen: Timer");
        notifier.alert(); // muted, must not panic
        assert_eq!(status.get().as_deref(), Some("Selected screen: Timer"));
    }

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::default();
        notifier.alert();
        notifier.announce(TIMER_DONE_MESSAGE);
        assert_eq!(
            notifier.notices(),
            vec![Notice::Alert, Notice::Announcement("Timer is up.".to_string())]
        );
        assert_eq!(notifier.alert_count(), 1);
        assert_eq!(notifier.announcements(), vec!["Timer is up.".to_string()]);
    }
}
