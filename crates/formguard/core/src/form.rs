// File: src/form.rs
// Purpose: Presentation port for a whole form and its notifications

use serde::{Deserialize, Serialize};

use crate::render::FieldView;

/// Severity of a page notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Info => "info",
        }
    }

    /// Banner background colour
    pub fn color(self) -> &'static str {
        match self {
            NotificationLevel::Success => "#10b981",
            NotificationLevel::Error => "#ef4444",
            NotificationLevel::Warning => "#f59e0b",
            NotificationLevel::Info => "#3b82f6",
        }
    }
}

/// A transient, dismissible message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Removed automatically after this many milliseconds
    pub timeout_ms: u32,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel, timeout_ms: u32) -> Self {
        Self {
            message: message.into(),
            level,
            timeout_ms,
        }
    }
}

/// Host-side view of a form: its fields in document order
pub trait FormView {
    type Field: FieldView;

    fn fields_mut(&mut self) -> &mut [Self::Field];

    /// Surface a page-level notification
    fn notify(&mut self, notification: &Notification);
}
