//! User-facing notifications.

use std::fmt;

/// Severity of a toast.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ToastLevel {
    Info,
    Error,
}

/// Notification shown to the user instead of propagating a failure.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Toast {
        Toast {
            level: ToastLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Toast {
        Toast {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            ToastLevel::Info => write!(f, "{}", self.message),
            ToastLevel::Error => write!(f, "error: {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_display() {
        assert_eq!(Toast::info("Saved").to_string(), "Saved");
        assert_eq!(Toast::error("Failed").to_string(), "error: Failed");
        assert_eq!(Toast::error("x").level, ToastLevel::Error);
    }
}
