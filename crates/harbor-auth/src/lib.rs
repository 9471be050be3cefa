//! # harbor-auth
//!
//! Session resolution and route guarding for Harbor.
//!
//! - [`SessionResolver`] logs actors in against the [`harbor_store::EntityStore`]
//!   and exposes the loading/resolved state.
//! - [`SessionFile`] persists the logged-in actor reference between runs.
//! - [`RouteGuard`] decides, per protected path, whether to render, show a
//!   loading indicator, or redirect; lawyers additionally pass through
//!   [`LawyerGate`].

pub mod error;
pub mod guard;
pub mod lawyer_gate;
pub mod routes;
pub mod session;
pub mod session_file;

pub use error::AuthError;
pub use guard::{GuardDecision, GuardOutcome, GuardState, RouteGuard};
pub use lawyer_gate::{LawyerGate, RedirectThrottle};
pub use session::{SessionResolver, SessionState};
pub use session_file::{SessionFile, StoredSession};
