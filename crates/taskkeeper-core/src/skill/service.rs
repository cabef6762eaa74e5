//! Skill dispatch service.
//!
//! `TaskSkill` classifies an inbound envelope and routes it to exactly one
//! handler with a single match on the request kind and intent name. Known
//! intents can never fall through to the reflector arm, which preserves the
//! priority ordering of the handler chain. The catch-all error path converts
//! anything a handler raises into a fixed spoken apology so the dialogue
//! never dies on a turn.

use taskkeeper_types::attributes::SessionAttributes;
use taskkeeper_types::envelope::{IntentPayload, Request, RequestEnvelope, ResponseEnvelope};
use taskkeeper_types::error::SkillError;
use taskkeeper_types::intent::Intent;
use tracing::{error, info, warn};

use crate::speech::{self, ResponseBuilder};
use crate::storage::AttributesStore;
use crate::tasks;

/// Slot carrying the task name on create/complete intents.
const TASK_NAME_SLOT: &str = "task_name";

/// The task-list skill.
///
/// Generic over `AttributesStore` to maintain clean architecture
/// (taskkeeper-core never depends on taskkeeper-infra).
pub struct TaskSkill<S: AttributesStore> {
    store: S,
}

impl<S: AttributesStore> TaskSkill<S> {
    /// Create a new skill over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the attributes store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle one request, always producing a response.
    ///
    /// A missing task name slot fails closed with a dedicated prompt; any
    /// other error is logged with full detail and collapsed into the generic
    /// apology, with a reprompt so the session stays open.
    pub async fn handle(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        let session = envelope.session_attributes();

        match self.dispatch(envelope, session.clone()).await {
            Ok(response) => response,
            Err(SkillError::MissingSlot(slot)) => {
                warn!(slot = %slot, "task intent arrived without a usable slot value");
                ResponseBuilder::new(session)
                    .speak(speech::MISSING_TASK_NAME)
                    .ask(speech::GENERIC_REPROMPT)
                    .build()
            }
            Err(err) => {
                error!(error = %err, "request handling failed");
                ResponseBuilder::new(session)
                    .speak(speech::APOLOGY)
                    .ask(speech::APOLOGY)
                    .build()
            }
        }
    }

    async fn dispatch(
        &self,
        envelope: &RequestEnvelope,
        session: SessionAttributes,
    ) -> Result<ResponseEnvelope, SkillError> {
        match &envelope.request {
            Request::Launch => Ok(launch(session)),
            Request::SessionEnded { reason } => {
                info!(reason = reason.as_deref().unwrap_or("unknown"), "session ended");
                Ok(ResponseBuilder::new(session).build())
            }
            Request::Intent { intent } => match Intent::parse(&intent.name) {
                Intent::Help => Ok(ResponseBuilder::new(session)
                    .speak(speech::HELP)
                    .ask(speech::HELP)
                    .build()),
                Intent::ShowTasks => self.show_tasks(user_id(envelope)?, session).await,
                Intent::CreateTask => {
                    self.create_task(user_id(envelope)?, task_name(intent)?, session)
                        .await
                }
                Intent::CompleteTask => {
                    self.complete_task(user_id(envelope)?, task_name(intent)?, session)
                        .await
                }
                Intent::Cancel | Intent::Stop => Ok(ResponseBuilder::new(session)
                    .speak(speech::GOODBYE)
                    .should_end_session(true)
                    .build()),
                Intent::Fallback => Ok(ResponseBuilder::new(session)
                    .speak(speech::FALLBACK)
                    .ask(speech::FALLBACK_REPROMPT)
                    .build()),
                Intent::Other(name) => {
                    info!(intent = %name, "reflecting unhandled intent");
                    Ok(ResponseBuilder::new(session)
                        .speak(speech::reflector_speech(&name))
                        .build())
                }
            },
        }
    }

    /// Read-only: speak the current task list.
    async fn show_tasks(
        &self,
        user_id: &str,
        session: SessionAttributes,
    ) -> Result<ResponseEnvelope, SkillError> {
        let attributes = self.store.load(user_id).await?.unwrap_or_default();

        Ok(ResponseBuilder::new(session)
            .speak(speech::show_tasks_speech(&attributes.tasks))
            .ask(speech::GENERIC_REPROMPT)
            .build())
    }

    /// Add a task, persisting write-through when the list changed.
    ///
    /// A one-shot invocation (no launch recorded this session) ends the
    /// session after this single exchange; otherwise the dialogue stays open.
    async fn create_task(
        &self,
        user_id: &str,
        task_name: &str,
        session: SessionAttributes,
    ) -> Result<ResponseEnvelope, SkillError> {
        let mut attributes = self.store.load(user_id).await?.unwrap_or_default();

        let added = tasks::add(&mut attributes.tasks, task_name);
        if added {
            self.store.save(user_id, &attributes).await?;
            info!(user_id = %user_id, task = %task_name, "task added");
        }

        let end_session = !session.launched;
        Ok(ResponseBuilder::new(session)
            .speak(speech::create_task_speech(
                task_name,
                added,
                attributes.tasks.len(),
            ))
            .ask(speech::GENERIC_REPROMPT)
            .should_end_session(end_session)
            .build())
    }

    /// Remove a task, persisting write-through when the list changed.
    ///
    /// Speech and reprompt are the identical composed text.
    async fn complete_task(
        &self,
        user_id: &str,
        task_name: &str,
        session: SessionAttributes,
    ) -> Result<ResponseEnvelope, SkillError> {
        let mut attributes = self.store.load(user_id).await?.unwrap_or_default();

        let removed = tasks::remove(&mut attributes.tasks, task_name);
        if removed {
            self.store.save(user_id, &attributes).await?;
            info!(user_id = %user_id, task = %task_name, "task removed");
        }

        let speak = speech::complete_task_speech(task_name, removed, attributes.tasks.len());
        Ok(ResponseBuilder::new(session)
            .speak(speak.clone())
            .ask(speak)
            .build())
    }
}

/// Greet and mark the session as launched.
fn launch(mut session: SessionAttributes) -> ResponseEnvelope {
    session.launched = true;
    ResponseBuilder::new(session)
        .speak(speech::WELCOME)
        .ask(speech::WELCOME)
        .build()
}

fn user_id(envelope: &RequestEnvelope) -> Result<&str, SkillError> {
    envelope
        .user_id()
        .ok_or_else(|| SkillError::Malformed("request has no session user".to_string()))
}

fn task_name(intent: &IntentPayload) -> Result<&str, SkillError> {
    intent
        .slot_value(TASK_NAME_SLOT)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| SkillError::MissingSlot(TASK_NAME_SLOT.to_string()))
}
