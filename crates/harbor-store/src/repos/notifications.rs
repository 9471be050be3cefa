//! Notification collection: soft delete, read flags, role visibility.

use harbor_core::entities::Notification;
use harbor_core::enums::Role;

use crate::change::{ChangeKind, Collection};
use crate::error::StoreError;
use crate::store::{EntityStore, next_id, replace_by_id};

impl EntityStore {
    /// All notifications, including soft-deleted ones.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn notification(&self, id: u32) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    /// Feed for an actor with `role`: not deleted, audience matches.
    #[must_use]
    pub fn visible_notifications(&self, role: Role) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| n.is_visible_to(role))
            .collect()
    }

    #[must_use]
    pub fn unread_count(&self, role: Role) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.is_visible_to(role) && !n.is_read)
            .count()
    }

    /// Id for a new notification: one past the highest in use.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdsExhausted`] when `u32::MAX` is already taken.
    pub fn next_notification_id(&self) -> Result<u32, StoreError> {
        next_id(&self.notifications, "notification", |n| n.id)
    }

    pub fn add_notification(&mut self, notification: Notification) {
        let id = notification.id;
        self.notifications.push(notification);
        self.notify(Collection::Notifications, ChangeKind::Added, id);
    }

    /// Replace the notification with the same id; `false` when absent.
    pub fn update_notification(&mut self, notification: Notification) -> bool {
        let id = notification.id;
        let replaced = replace_by_id(&mut self.notifications, notification, |n| n.id);
        if replaced {
            self.notify(Collection::Notifications, ChangeKind::Updated, id);
        }
        replaced
    }

    /// Set the read flag. Returns `false` when the id is absent.
    pub fn mark_notification_read(&mut self, id: u32) -> bool {
        self.modify_notification(id, |n| n.is_read = true)
    }

    /// Flag as deleted; the record stays in the collection.
    pub fn soft_delete_notification(&mut self, id: u32) -> bool {
        self.modify_notification(id, |n| n.is_deleted = true)
    }

    fn modify_notification(&mut self, id: u32, apply: impl FnOnce(&mut Notification)) -> bool {
        let Some(mut notification) = self.notification(id).cloned() else {
            return false;
        };
        apply(&mut notification);
        self.update_notification(notification)
    }
}

#[cfg(test)]
mod tests {
    use harbor_core::enums::NotificationTarget;

    use super::*;

    #[test]
    fn client_feed_only_has_client_audiences() {
        let store = EntityStore::seeded();
        let feed = store.visible_notifications(Role::Client);
        assert!(!feed.is_empty());
        for n in feed {
            assert!(matches!(
                n.target,
                NotificationTarget::AllUsers | NotificationTarget::Clients
            ));
            assert!(!n.is_deleted);
        }
    }

    #[test]
    fn soft_delete_keeps_record_but_hides_it() {
        let mut store = EntityStore::seeded();
        let before = store.notifications().len();
        assert!(store.soft_delete_notification(1));
        assert_eq!(store.notifications().len(), before);
        assert!(store.notification(1).unwrap().is_deleted);
        assert!(
            store
                .visible_notifications(Role::Superadmin)
                .iter()
                .all(|n| n.id != 1)
        );
    }

    #[test]
    fn mark_read_reduces_unread_count() {
        let mut store = EntityStore::seeded();
        let unread = store.unread_count(Role::Client);
        assert!(store.mark_notification_read(2));
        assert_eq!(store.unread_count(Role::Client), unread - 1);
    }

    #[test]
    fn mark_read_on_missing_id_is_noop() {
        let mut store = EntityStore::seeded();
        assert!(!store.mark_notification_read(999));
        assert_eq!(store.revision(), 0);
    }
}
