//! Notices
//!
//! Transient success/failure notifications shown after a submission.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

pub const SENT_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again or contact us directly.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message for the visitor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn sent() -> Self {
        Self::success(SENT_MESSAGE)
    }

    pub fn failed() -> Self {
        Self::error(FAILED_MESSAGE)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.kind, NoticeKind::Success)
    }
}

/// A notice on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Toasts currently shown, oldest first
#[derive(Clone, Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice; the returned id is used to dismiss it later
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notice });
        id
    }

    /// Remove a toast. Unknown ids are ignored (already dismissed by hand).
    pub fn dismiss(&mut self, id: u64) -> Option<Toast> {
        let pos = self.items.iter().position(|t| t.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<Toast> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::new();
        let a = toasts.push(Notice::sent());
        let b = toasts.push(Notice::failed());
        assert!(b > a);
        assert_eq!(toasts.len(), 2);
    }

    #[test]
    fn test_dismiss() {
        let mut toasts = Toasts::new();
        let a = toasts.push(Notice::sent());
        let b = toasts.push(Notice::failed());

        let removed = toasts.dismiss(a).unwrap();
        assert!(removed.notice.is_success());
        assert_eq!(toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
        assert!(toasts.dismiss(a).is_none());
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut toasts = Toasts::new();
        let a = toasts.push(Notice::sent());
        toasts.dismiss(a);
        assert_ne!(toasts.push(Notice::sent()), a);
    }
}
