//! Speech composition.
//!
//! Every user-facing utterance lives here, together with the
//! `ResponseBuilder` that assembles the outbound envelope. Handlers decide
//! *what* happened; this module decides how it is said.

use taskkeeper_types::attributes::SessionAttributes;
use taskkeeper_types::envelope::{
    ENVELOPE_VERSION, OutputSpeech, Reprompt, ResponseBody, ResponseEnvelope,
};

/// Greeting spoken on launch; doubles as its own reprompt.
pub const WELCOME: &str = "Welcome to the Taskkeeper skill. You can ask me to keep track of tasks for you and show outstanding tasks. What would you like to do?";

/// Static help text.
pub const HELP: &str =
    "You can say something like add task cleaning, mark cleaning as done or show me my tasks?";

/// Spoken when the task list has nothing in it.
pub const EMPTY_LIST: &str = "Your task list is empty - please add something to it.";

/// Generic follow-up reprompt after list operations.
pub const GENERIC_REPROMPT: &str = "What else can I help you with?";

/// Farewell for cancel/stop.
pub const GOODBYE: &str = "Goodbye!";

/// Spoken when the platform could not map the utterance to any intent.
pub const FALLBACK: &str =
    "Hmm, I'm not sure. You can say Hello or Help. What would you like to do?";

/// Reprompt paired with [`FALLBACK`].
pub const FALLBACK_REPROMPT: &str = "I didn't catch that. What can I help you with?";

/// Spoken when a task intent arrives without a usable task name slot.
pub const MISSING_TASK_NAME: &str =
    "I didn't catch a task name. Try saying something like add task cleaning.";

/// Fixed apology for any error escaping a handler.
pub const APOLOGY: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// "s" when `count` is anything but one.
pub fn plural_suffix(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Speech for the show-tasks intent.
///
/// One task reads "task #1 is X"; several are comma-joined with the final
/// pair joined by "and" (no Oxford comma): "task #1 is a, task #2 is b and
/// task #3 is c".
pub fn show_tasks_speech(tasks: &[String]) -> String {
    if tasks.is_empty() {
        return EMPTY_LIST.to_string();
    }

    let phrases: Vec<String> = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| format!("task #{} is {}", index + 1, task))
        .collect();

    let task_text = match phrases.as_slice() {
        [single] => single.clone(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
        [] => unreachable!("empty list handled above"),
    };

    format!(
        "You have {} task{} in your tasks list: {}",
        tasks.len(),
        plural_suffix(tasks.len()),
        task_text
    )
}

/// Speech for the create-task intent.
///
/// `count` is the list length after the operation.
pub fn create_task_speech(task_name: &str, added: bool, count: usize) -> String {
    let lead = if added {
        format!("I added {task_name} to your list of outstanding tasks,")
    } else {
        format!("{task_name} task already exists in your list of tasks,")
    };
    format!(
        "{lead} you have {count} outstanding task{}. ",
        plural_suffix(count)
    )
}

/// Speech for the complete-task intent.
///
/// `count` is the list length after the operation.
pub fn complete_task_speech(task_name: &str, removed: bool, count: usize) -> String {
    let lead = if removed {
        format!("I removed {task_name} from your list of outstanding tasks,")
    } else {
        format!(
            "I cant find the task named {task_name} in your list of tasks, ask to list your tasks or try again,"
        )
    };
    format!(
        "{lead} you have {count} outstanding task{}",
        plural_suffix(count)
    )
}

/// Speech for the reflector: echoes an unhandled intent's name.
pub fn reflector_speech(intent_name: &str) -> String {
    format!("You just triggered {intent_name}.")
}

/// Fluent builder for the outbound response envelope.
///
/// Mirrors the envelope defaults: no speech, no reprompt, session left open
/// unless `should_end_session` is called.
#[derive(Debug)]
pub struct ResponseBuilder {
    session: SessionAttributes,
    speech: Option<String>,
    reprompt: Option<String>,
    should_end_session: Option<bool>,
}

impl ResponseBuilder {
    /// Start a response that echoes the given session attributes.
    pub fn new(session: SessionAttributes) -> Self {
        Self {
            session,
            speech: None,
            reprompt: None,
            should_end_session: None,
        }
    }

    /// Set the main speech output.
    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.speech = Some(text.into());
        self
    }

    /// Set the reprompt spoken if the user stays silent.
    pub fn ask(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self
    }

    /// Explicitly close (or keep open) the session.
    pub fn should_end_session(mut self, end: bool) -> Self {
        self.should_end_session = Some(end);
        self
    }

    /// Assemble the envelope.
    pub fn build(self) -> ResponseEnvelope {
        ResponseEnvelope {
            version: ENVELOPE_VERSION.to_string(),
            session_attributes: self.session,
            response: ResponseBody {
                output_speech: self.speech.map(OutputSpeech::plain),
                reprompt: self.reprompt.map(|text| Reprompt {
                    output_speech: OutputSpeech::plain(text),
                }),
                should_end_session: self.should_end_session,
            },
        }
    }
}
