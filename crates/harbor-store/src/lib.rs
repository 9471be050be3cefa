//! # harbor-store
//!
//! In-memory entity store for Harbor.
//!
//! [`EntityStore`] owns the client, team, and notification collections. It is
//! an explicit container passed to whoever needs it: mutation requires
//! `&mut EntityStore`, so there is exactly one writer, and every successful
//! mutation is broadcast to subscribers through a `tokio::sync::watch`
//! channel.
//!
//! [`load_store`] picks the data source: the hosted backend when it is
//! configured and reachable, otherwise the static seed data.

mod backend;
mod change;
mod error;
mod http;
mod repos;
mod source;
mod store;

pub use backend::HostedBackend;
pub use change::{ChangeKind, Collection, Mutation, StoreChange};
pub use error::StoreError;
pub use source::{LoadedStore, StoreOrigin, load_store};
pub use store::{EntityStore, StoreSnapshot};
