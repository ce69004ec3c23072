use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Calculation,
    Challenge,
    General,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub read: bool,
    pub kind: NotificationKind,
}

/// Session-scoped notification list, newest first. Not persisted.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn push(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> &Notification {
        self.next_id += 1;
        self.items.insert(
            0,
            Notification {
                id: self.next_id,
                title: title.into(),
                message: message.into(),
                timestamp: Local::now().to_rfc3339(),
                read: false,
                kind,
            },
        );
        &self.items[0]
    }

    pub fn mark_read(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.read).count()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_with_increasing_ids() {
        let mut center = NotificationCenter::default();
        center.push("first", "a", NotificationKind::General);
        center.push("second", "b", NotificationKind::Calculation);

        let items = center.items();
        assert_eq!(items[0].title, "second");
        assert!(items[0].id > items[1].id);
        assert_eq!(center.unread_count(), 2);
    }

    #[test]
    fn mark_read_and_clear() {
        let mut center = NotificationCenter::default();
        let id = center.push("done", "x", NotificationKind::Challenge).id;
        center.push("other", "y", NotificationKind::General);

        assert!(center.mark_read(id));
        assert!(!center.mark_read(999));
        assert_eq!(center.unread_count(), 1);

        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);

        center.clear();
        assert!(center.items().is_empty());
    }

    #[test]
    fn ids_keep_growing_after_clear() {
        let mut center = NotificationCenter::default();
        let first = center.push("a", "a", NotificationKind::General).id;
        center.clear();
        let second = center.push("b", "b", NotificationKind::General).id;
        assert!(second > first);
    }
}
