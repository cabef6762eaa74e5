//! Business logic and the storage port for Taskkeeper.
//!
//! This crate owns the task list model, the speech composer, and the skill
//! dispatch service. It defines the `AttributesStore` port that the
//! infrastructure layer implements and depends only on `taskkeeper-types` --
//! never on any database or IO crate.

pub mod skill;
pub mod speech;
pub mod storage;
pub mod tasks;
