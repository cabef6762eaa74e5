//! Intent names understood by the skill.

use std::fmt;

/// A classified intent name.
///
/// Parsing never fails: any name that is not one of the known intents becomes
/// `Other`, which the dispatcher answers with the reflector response. Because
/// classification happens before dispatch, a known intent can never reach the
/// reflector arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Help,
    ShowTasks,
    CreateTask,
    CompleteTask,
    Cancel,
    Stop,
    Fallback,
    Other(String),
}

impl Intent {
    /// Classify a raw intent name from the platform.
    pub fn parse(name: &str) -> Self {
        match name {
            "AMAZON.HelpIntent" => Intent::Help,
            "ShowTasksIntent" => Intent::ShowTasks,
            "CreateTaskIntent" => Intent::CreateTask,
            "CompleteTaskIntent" => Intent::CompleteTask,
            "AMAZON.CancelIntent" => Intent::Cancel,
            "AMAZON.StopIntent" => Intent::Stop,
            "AMAZON.FallbackIntent" => Intent::Fallback,
            other => Intent::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Help => write!(f, "AMAZON.HelpIntent"),
            Intent::ShowTasks => write!(f, "ShowTasksIntent"),
            Intent::CreateTask => write!(f, "CreateTaskIntent"),
            Intent::CompleteTask => write!(f, "CompleteTaskIntent"),
            Intent::Cancel => write!(f, "AMAZON.CancelIntent"),
            Intent::Stop => write!(f, "AMAZON.StopIntent"),
            Intent::Fallback => write!(f, "AMAZON.FallbackIntent"),
            Intent::Other(name) => write!(f, "{name}"),
        }
    }
}
