//! # harbor-offline
//!
//! Offline support for the web client: decide per request whether to answer
//! from cache or network ([`classify`]), and keep a versioned response cache
//! ([`OfflineCache`]) that is filled on install and pruned on activation.

mod cache;
mod error;
mod request;
mod strategy;

pub use cache::{Network, OfflineCache};
pub use error::OfflineError;
pub use request::{CachedResponse, RequestInfo, RequestMode};
pub use strategy::{Strategy, classify};
