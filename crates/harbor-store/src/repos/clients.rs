//! Client collection: add, replace-by-id, lookups.

use harbor_core::entities::Client;
use harbor_core::enums::ClientStatus;

use crate::change::{ChangeKind, Collection};
use crate::error::StoreError;
use crate::store::{EntityStore, next_id, replace_by_id};

impl EntityStore {
    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    #[must_use]
    pub fn client(&self, id: u32) -> Option<&Client> {
        self.clients.iter().find(|client| client.id() == id)
    }

    /// Clients assigned to a lawyer.
    pub fn clients_for_lawyer(&self, lawyer_id: u32) -> impl Iterator<Item = &Client> {
        self.clients
            .iter()
            .filter(move |client| client.lawyer_id == Some(lawyer_id))
    }

    /// Id for a new client: one past the highest in use.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdsExhausted`] when `u32::MAX` is already taken.
    pub fn next_client_id(&self) -> Result<u32, StoreError> {
        next_id(&self.clients, "client", Client::id)
    }

    /// Append a client. No validation beyond the type shape.
    pub fn add_client(&mut self, client: Client) {
        let id = client.id();
        self.clients.push(client);
        self.notify(Collection::Clients, ChangeKind::Added, id);
    }

    /// Replace the client with the same id.
    ///
    /// Returns `false` and leaves the store untouched when the id is absent.
    pub fn update_client(&mut self, client: Client) -> bool {
        let id = client.id();
        let replaced = replace_by_id(&mut self.clients, client, Client::id);
        if replaced {
            self.notify(Collection::Clients, ChangeKind::Updated, id);
        }
        replaced
    }

    /// Change a client's account status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no client has this id.
    pub fn set_client_status(&mut self, id: u32, status: ClientStatus) -> Result<Client, StoreError> {
        let mut client = self
            .client(id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity_type: "client",
                id,
            })?;
        client.status = status;
        self.update_client(client.clone());
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::change::{Mutation, StoreChange};
    use harbor_core::seed;

    #[test]
    fn add_client_appends_and_notifies() {
        let mut store = EntityStore::seeded();
        let rx = store.subscribe();
        let before = store.clients().len();

        let mut client = seed::clients().remove(0);
        client.account.id = store.next_client_id().unwrap();
        client.account.email = "new.client@example.com".into();
        store.add_client(client.clone());

        assert_eq!(store.clients().len(), before + 1);
        assert_eq!(store.client(client.id()), Some(&client));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow().revision, 1);
    }

    #[test]
    fn update_replaces_by_id() {
        let mut store = EntityStore::seeded();
        let mut client = store.client(2).cloned().unwrap();
        client.case.next_step = "Book medical exam".into();

        assert!(store.update_client(client.clone()));
        assert_eq!(store.client(2).unwrap().case.next_step, "Book medical exam");
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn update_with_unknown_id_is_a_noop() {
        let mut store = EntityStore::seeded();
        let rx = store.subscribe();
        let before = store.snapshot();

        let mut ghost = seed::clients().remove(0);
        ghost.account.id = 404;
        assert!(!store.update_client(ghost));

        assert_eq!(store.snapshot(), before);
        assert_eq!(store.revision(), 0);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn every_subscriber_sees_the_same_change() {
        let mut store = EntityStore::seeded();
        let mut first = store.subscribe();
        let mut second = store.subscribe();

        store.set_client_status(3, ClientStatus::Closed).unwrap();

        let expected = StoreChange {
            revision: 1,
            last: Some(Mutation {
                collection: Collection::Clients,
                kind: ChangeKind::Updated,
                id: 3,
            }),
        };
        for rx in [&mut first, &mut second] {
            assert!(rx.has_changed().unwrap());
            assert_eq!(*rx.borrow_and_update(), expected);
        }
    }

    #[test]
    fn set_status_on_missing_client_errors() {
        let mut store = EntityStore::seeded();
        let err = store.set_client_status(404, ClientStatus::Closed).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 404, .. }));
    }

    #[test]
    fn clients_for_lawyer_filters_assignment() {
        let store = EntityStore::seeded();
        let ids: Vec<u32> = store.clients_for_lawyer(1).map(Client::id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }
}
