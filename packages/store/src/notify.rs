//! # Notification surface
//!
//! Transient feedback messages. Producers call [`Notifier::notify`]; the UI
//! renders the tail of a [`NotificationQueue`] as toasts and dismisses them by
//! id. Notifying never fails and returns nothing.

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// One toast.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

/// Sink for user-facing feedback.
pub trait Notifier {
    fn notify(&mut self, title: &str, body: &str, severity: Severity);

    fn success(&mut self, title: &str, body: &str) {
        self.notify(title, body, Severity::Default);
    }

    fn error(&mut self, title: &str, body: &str) {
        self.notify(title, body, Severity::Destructive);
    }
}

/// Queue of pending notifications with monotonically increasing ids.
///
/// A bounded queue keeps only the newest `capacity` entries; older ones are
/// dropped on push and never come back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    next_id: u64,
    capacity: Option<usize>,
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// All pending notifications, oldest first.
    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    /// The newest `limit` notifications, oldest first.
    pub fn visible(&self, limit: usize) -> &[Notification] {
        let start = self.pending.len().saturating_sub(limit);
        &self.pending[start..]
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.pending.last()
    }

    /// Remove a notification. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.pending.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, title: &str, body: &str, severity: Severity) {
        self.next_id += 1;
        self.pending.push(Notification {
            id: self.next_id,
            title: title.to_string(),
            body: body.to_string(),
            severity,
        });
        if let Some(capacity) = self.capacity {
            let overflow = self.pending.len().saturating_sub(capacity);
            self.pending.drain(..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase_and_survive_dismissal() {
        let mut queue = NotificationQueue::new();
        queue.success("One", "first");
        queue.error("Two", "second");
        assert_eq!(queue.len(), 2);

        let first = queue.pending()[0].id;
        queue.dismiss(first);
        queue.success("Three", "third");

        let ids: Vec<u64> = queue.pending().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(queue.pending()[0].severity, Severity::Destructive);
    }

    #[test]
    fn test_visible_returns_newest() {
        let mut queue = NotificationQueue::new();
        for i in 0..5 {
            queue.success(&format!("n{i}"), "");
        }
        let titles: Vec<&str> = queue.visible(3).iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["n2", "n3", "n4"]);
        assert_eq!(queue.visible(10).len(), 5);
        assert_eq!(queue.latest().map(|n| n.title.as_str()), Some("n4"));
    }

    #[test]
    fn test_bounded_queue_drops_oldest() {
        let mut queue = NotificationQueue::with_capacity(3);
        for i in 0..5 {
            queue.success(&format!("n{i}"), "");
        }
        let ids: Vec<u64> = queue.pending().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);

        for id in ids {
            queue.dismiss(id);
        }
        assert!(queue.is_empty());
        assert!(queue.visible(3).is_empty());
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut queue = NotificationQueue::new();
        queue.success("Hi", "");
        queue.dismiss(99);
        assert_eq!(queue.len(), 1);
        queue.clear();
        assert!(queue.is_empty());
    }
}
