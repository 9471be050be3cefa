//! Entity structs for Harbor.
//!
//! All entities serialize camelCase, matching the documents of the hosted
//! backend, and derive `JsonSchema` so the schema registry can validate them.

mod account;
mod actor;
mod client;
mod notification;
mod team;

pub use account::Account;
pub use actor::{Actor, ActorKind, ActorProfile, ActorRef};
pub use client::{CaseSummary, Client};
pub use notification::Notification;
pub use team::{LawyerProfile, TeamAccess, TeamMember};
