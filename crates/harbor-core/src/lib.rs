//! # harbor-core
//!
//! Core types and error types for Harbor.
//!
//! This crate provides the foundational types shared across all Harbor crates:
//! - Entity structs for the CRM records (clients, team members, notifications)
//! - The `Actor` union resolved by login and consumed by the guard
//! - Status enums, including the linear case progression
//! - Request/response records for the generative-AI flows
//! - Static seed data used when no hosted backend is configured
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod flows;
pub mod seed;
