//! Skill request dispatch.

pub mod service;

pub use service::TaskSkill;
