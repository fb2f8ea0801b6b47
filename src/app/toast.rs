//! Transient status message with a single auto-dismiss deadline.
//!
//! The deadline is checked on every tick. Showing a new toast replaces the
//! message and the pending deadline; nothing queues.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Debug)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub visible: bool,
    dismiss_at: Option<Instant>,
    duration: Duration,
}

impl Toast {
    pub fn new(duration: Duration) -> Self {
        Self {
            message: String::new(),
            variant: ToastVariant::Success,
            visible: false,
            dismiss_at: None,
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, variant: ToastVariant, now: Instant) {
        self.message = message.into();
        self.variant = variant;
        self.visible = true;
        self.dismiss_at = Some(now + self.duration);
    }

    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Error
    }

    /// Hide the toast once its deadline has passed. Returns `true` if it was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.dismiss_at {
            Some(deadline) if now >= deadline => {
                self.visible = false;
                self.dismiss_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_dismisses_after_duration() {
        let start = Instant::now();
        let mut toast = Toast::new(Duration::from_millis(3200));
        toast.show("ok", ToastVariant::Success, start);
        assert!(toast.visible);

        assert!(!toast.tick(start + Duration::from_millis(3199)));
        assert!(toast.visible);

        assert!(toast.tick(start + Duration::from_millis(3200)));
        assert!(!toast.visible);
        assert!(!toast.tick(start + Duration::from_millis(5000)));
    }

    #[test]
    fn test_new_toast_replaces_pending_deadline() {
        let start = Instant::now();
        let mut toast = Toast::new(Duration::from_millis(1000));
        toast.show("first", ToastVariant::Success, start);
        toast.show("second", ToastVariant::Error, start + Duration::from_millis(800));

        assert!(!toast.tick(start + Duration::from_millis(1000)));
        assert!(toast.visible);
        assert_eq!(toast.message, "second");
        assert!(toast.is_error());

        assert!(toast.tick(start + Duration::from_millis(1800)));
        assert!(!toast.visible);
    }

    #[test]
    fn test_success_clears_error_variant() {
        let now = Instant::now();
        let mut toast = Toast::new(Duration::from_secs(1));
        toast.show("bad", ToastVariant::Error, now);
        toast.show("good", ToastVariant::Success, now);
        assert!(!toast.is_error());
    }
}
