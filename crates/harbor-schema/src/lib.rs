//! # harbor-schema
//!
//! JSON Schema generation, validation, and registry for Harbor.
//!
//! Entity and flow record types are defined in `harbor-core` with
//! `#[derive(JsonSchema)]`. This crate builds the registry from them and
//! validates arbitrary JSON values by schema name. The flow adapter validates
//! every request and response through it, and the CLI exports schemas with
//! `hbr schema`.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
