//! # harbor-flows
//!
//! Named request/response operations answered by a generative model.
//!
//! Every flow has a typed input and output record from
//! [`harbor_core::flows`]. [`FlowRunner`] validates the input against its
//! registered JSON Schema, prompts the model, validates the reply against the
//! output schema, and deserialises it. Two flows (`case_timeline` and
//! `document_checklist`) carry a canned fallback that is returned, marked
//! [`FlowOrigin::Fallback`], when the model fails.

pub mod catalogue;
mod error;
mod flow;
mod http;
mod model;
mod runner;

pub use catalogue::FlowKind;
pub use error::FlowError;
pub use flow::{Flow, FlowOrigin, FlowReply};
pub use model::{ConfiguredModel, GenerativeModel, HttpModel, ModelRequest, UnavailableModel};
pub use runner::FlowRunner;
