//! User-facing flash messages. The workflow pushes notifications; the host UI
//! drains them each frame and renders its own flash widget.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Fire-and-forget sink for user feedback; no return value is consumed.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

static NOTIFICATION_BUFFER: Lazy<Mutex<Vec<Notification>>> = Lazy::new(|| Mutex::new(Vec::new()));

const MAX_BUFFER_LEN: usize = 50;

/// Process-global buffered sink. Keeps the newest `MAX_BUFFER_LEN` messages;
/// a host that never drains simply loses the oldest ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct BufferedNotificationSink;

impl NotificationSink for BufferedNotificationSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut v) = NOTIFICATION_BUFFER.lock() {
            v.push(notification);
            let n = v.len();
            if n > MAX_BUFFER_LEN {
                v.drain(0..n - MAX_BUFFER_LEN);
            }
        }
    }
}

/// Drain and clear buffered notifications, oldest first. The host calls this
/// and shows each as a flash message.
pub fn drain_notifications() -> Vec<Notification> {
    NOTIFICATION_BUFFER
        .lock()
        .map(|mut v| std::mem::take(&mut *v))
        .unwrap_or_default()
}
