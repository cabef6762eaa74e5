//! Shared domain types for Taskkeeper.
//!
//! This crate contains the types used across the Taskkeeper skill backend:
//! the platform request/response envelope, persisted and session attributes,
//! the intent enum, configuration, and error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod attributes;
pub mod config;
pub mod envelope;
pub mod error;
pub mod intent;
