//! Per-collection operations on [`crate::EntityStore`].

mod clients;
mod notifications;
mod team;
