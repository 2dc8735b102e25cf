//! User-visible notifications, shown one at a time as blocking modals.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

/// FIFO of pending notifications
#[derive(Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let n = Notification {
            level: NotificationLevel::Info,
            title: title.into(),
            message: message.into(),
        };
        tracing::info!("{}: {}", n.title, n.message);
        self.queue.push_back(n);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let n = Notification {
            level: NotificationLevel::Error,
            title: title.into(),
            message: message.into(),
        };
        tracing::error!("{}: {}", n.title, n.message);
        self.queue.push_back(n);
    }

    /// Notification currently on screen
    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// Most recently raised notification
    pub fn last(&self) -> Option<&Notification> {
        self.queue.back()
    }

    /// Acknowledge the current notification
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
