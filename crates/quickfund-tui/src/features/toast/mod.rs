//! Short-lived status messages shown above the footer.

mod render;

pub use render::render_toast;

/// Ticks a toast stays visible (the runtime ticks every 100ms).
pub const TOAST_TICKS: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    ticks_left: u16,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            ticks_left: TOAST_TICKS,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }
}

/// At most one toast is visible; a new one replaces the current one.
#[derive(Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
}

impl ToastState {
    pub fn show(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Counts down the visible toast and drops it once expired.
    pub fn tick(&mut self) {
        if let Some(toast) = self.current.as_mut() {
            toast.ticks_left = toast.ticks_left.saturating_sub(1);
            if toast.ticks_left == 0 {
                self.current = None;
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_fixed_ticks() {
        let mut state = ToastState::default();
        state.show(Toast::success("Message sent!"));
        for _ in 0..TOAST_TICKS - 1 {
            state.tick();
        }
        assert!(state.current().is_some());
        state.tick();
        assert!(state.current().is_none());
    }

    #[test]
    fn test_new_toast_replaces_current() {
        let mut state = ToastState::default();
        state.show(Toast::info("first"));
        state.show(Toast::error("second"));
        let toast = state.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.level, ToastLevel::Error);
    }
}
