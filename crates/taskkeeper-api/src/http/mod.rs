//! HTTP surface for the skill endpoint.

pub mod error;
pub mod handlers;
pub mod router;
