//! Single-slot toast notification with a token-matched timer protocol.
//!
//! At most one toast is live at a time; showing a new one immediately
//! replaces the current one. Every timer message scheduled for a toast
//! carries the toast's token, and a delivery whose token no longer matches
//! the live toast is dropped -- superseded timers can never act on a
//! detached toast.

use wowbank_core::NotificationKind;

/// Display phase of the live toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Sliding in; promoted to `Visible` by the enter timer.
    Entering,
    /// Fully visible; the auto-dismiss timer is pending.
    Visible,
    /// Sliding out; detached by the exit timer.
    Leaving,
}

/// A live toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: NotificationKind,
    pub phase: ToastPhase,
    /// Matches scheduled timer messages to this toast instance.
    pub token: u64,
}

/// Owner of the single toast slot.
#[derive(Debug, Clone, Default)]
pub struct ToastState {
    current: Option<Toast>,
    next_token: u64,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any current toast with a new one and return its token so
    /// the caller can schedule the enter and auto-dismiss timers.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_token += 1;
        let token = self.next_token;
        self.current = Some(Toast {
            message: message.into(),
            kind,
            phase: ToastPhase::Entering,
            token,
        });
        token
    }

    /// The live toast, if any.
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Promote `Entering` to `Visible`. Stale tokens are ignored.
    pub fn finish_enter(&mut self, token: u64) {
        if let Some(toast) = self.current.as_mut() {
            if toast.token == token && toast.phase == ToastPhase::Entering {
                toast.phase = ToastPhase::Visible;
            }
        }
    }

    /// Begin the leave animation, whether triggered by the auto-dismiss
    /// timer or by the user. Returns the token when a leave actually
    /// started (so the caller schedules the detach timer); stale tokens
    /// and repeated dismissals return `None`.
    pub fn begin_leave(&mut self, token: u64) -> Option<u64> {
        let toast = self.current.as_mut()?;
        if toast.token != token || toast.phase == ToastPhase::Leaving {
            return None;
        }
        toast.phase = ToastPhase::Leaving;
        Some(token)
    }

    /// User-triggered dismissal of whatever toast is visible.
    pub fn dismiss_current(&mut self) -> Option<u64> {
        let token = self.current.as_ref()?.token;
        self.begin_leave(token)
    }

    /// Detach the toast once the leave animation has run. Stale tokens
    /// are ignored.
    pub fn detach(&mut self, token: u64) {
        if self.current.as_ref().map(|t| t.token) == Some(token) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_current() {
        let mut toasts = ToastState::new();
        let first = toasts.show("one", NotificationKind::Info);
        let second = toasts.show("two", NotificationKind::Success);
        assert_ne!(first, second);
        // Exactly one toast, holding the second call's content
        assert_eq!(toasts.current().unwrap().message, "two");
        assert_eq!(toasts.current().unwrap().kind, NotificationKind::Success);
    }

    #[test]
    fn test_stale_timers_are_noops() {
        let mut toasts = ToastState::new();
        let first = toasts.show("one", NotificationKind::Info);
        let second = toasts.show("two", NotificationKind::Info);

        // Timers scheduled for the superseded toast must not touch the new one
        toasts.finish_enter(first);
        assert_eq!(toasts.current().unwrap().phase, ToastPhase::Entering);
        assert!(toasts.begin_leave(first).is_none());
        toasts.detach(first);
        assert!(toasts.current().is_some());

        toasts.finish_enter(second);
        assert_eq!(toasts.current().unwrap().phase, ToastPhase::Visible);
    }

    #[test]
    fn test_two_phase_dismissal() {
        let mut toasts = ToastState::new();
        let token = toasts.show("bye", NotificationKind::Success);
        toasts.finish_enter(token);

        assert_eq!(toasts.begin_leave(token), Some(token));
        assert_eq!(toasts.current().unwrap().phase, ToastPhase::Leaving);
        // Second leave (e.g. auto-dismiss racing a click) is a no-op
        assert_eq!(toasts.begin_leave(token), None);

        toasts.detach(token);
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_user_dismiss_matches_timer_path() {
        let mut toasts = ToastState::new();
        let token = toasts.show("clickable", NotificationKind::Info);
        assert_eq!(toasts.dismiss_current(), Some(token));
        assert_eq!(toasts.current().unwrap().phase, ToastPhase::Leaving);
        assert_eq!(toasts.dismiss_current(), None);
    }
}
