//! HTTP request handlers.

pub mod skill;
