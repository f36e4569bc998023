//! Registration orchestrator.
//!
//! This module coordinates the registration state machine and its side
//! effects (availability checks and the final registration request).

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::MutexGuard;
use tracing::{debug, info, info_span, warn, Instrument};

use sc_core::ports::{AccountAvailabilityPort, RegistrationError, RegistrationPort};
use sc_core::registration::{
    RegistrationAction, RegistrationEvent, RegistrationField, RegistrationForm, RegistrationRules,
    RegistrationStateMachine, RemoteCheck, WizardState,
};

use super::context::RegistrationContext;

/// Errors produced by the registration orchestrator.
///
/// Validation and backend failures are not errors here: they end up in the
/// returned [`WizardState`]. Only a rejected trigger is reported.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistrationWizardError {
    #[error("a registration request is already in flight")]
    Busy,
}

/// Orchestrator that drives one registration session.
pub struct RegistrationWizard {
    context: RegistrationContext,
    rules: RegistrationRules,
    request_timeout: Duration,

    availability: Arc<dyn AccountAvailabilityPort>,
    registration: Arc<dyn RegistrationPort>,
}

impl RegistrationWizard {
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(
        rules: RegistrationRules,
        availability: Arc<dyn AccountAvailabilityPort>,
        registration: Arc<dyn RegistrationPort>,
    ) -> Self {
        Self {
            context: RegistrationContext::new(WizardState::new(&rules.layout)),
            rules,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
            availability,
            registration,
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn rules(&self) -> &RegistrationRules {
        &self.rules
    }

    pub async fn state(&self) -> WizardState {
        self.context.get_state().await
    }

    pub async fn handle_change(
        &self,
        field: RegistrationField,
        value: impl Into<String>,
    ) -> WizardState {
        self.dispatch_local(RegistrationEvent::EditField {
            field,
            value: value.into(),
        })
        .await
    }

    pub async fn handle_change_date(&self, date: Option<NaiveDate>) -> WizardState {
        self.dispatch_local(RegistrationEvent::ChangeDate { date }).await
    }

    pub async fn handle_prev_step(&self) -> WizardState {
        self.dispatch_local(RegistrationEvent::PrevStep).await
    }

    /// Validates the current step and moves forward. On the last step this
    /// submits the registration.
    pub async fn handle_next_step(&self) -> Result<WizardState, RegistrationWizardError> {
        self.dispatch(RegistrationEvent::NextStep).await
    }

    pub async fn handle_submit(&self) -> Result<WizardState, RegistrationWizardError> {
        self.dispatch(RegistrationEvent::Submit).await
    }

    /// Feeds any event through the state machine.
    ///
    /// Events that may reach the backend are rejected with
    /// [`RegistrationWizardError::Busy`] while another such event is being
    /// handled. Contention with a local edit only makes them wait.
    pub async fn dispatch(
        &self,
        event: RegistrationEvent,
    ) -> Result<WizardState, RegistrationWizardError> {
        if event.may_hit_network() {
            let _in_flight = self.context.try_begin_network_dispatch().ok_or_else(|| {
                debug!(event = event.name(), "registration dispatch rejected, busy");
                RegistrationWizardError::Busy
            })?;
            return Ok(self.dispatch_local(event).await);
        }
        Ok(self.dispatch_local(event).await)
    }

    async fn dispatch_local(&self, event: RegistrationEvent) -> WizardState {
        let guard = self.context.acquire_dispatch_lock().await;
        self.run(event, guard).await
    }

    async fn run(
        &self,
        event: RegistrationEvent,
        _dispatch_guard: MutexGuard<'_, ()>,
    ) -> WizardState {
        let span = info_span!("usecase.registration.dispatch", event = event.name());
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from_step = current.current_step;
                let event_name = event.name();
                let (next, actions) =
                    RegistrationStateMachine::transition(current, event, &self.rules);
                info!(
                    from_step,
                    to_step = next.current_step,
                    phase = ?next.phase,
                    event = event_name,
                    "registration state transition"
                );
                // Publish before running actions so readers see the busy phase.
                self.context.set_state(next.clone()).await;
                let follow_up_events = self.execute_actions(actions).await;
                current = next;
                pending_events.extend(follow_up_events);
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<RegistrationAction>) -> Vec<RegistrationEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(action = action.name(), "registration executing action");
            let event = match action {
                RegistrationAction::CheckEmailAvailability { email } => {
                    self.check_availability(RemoteCheck::EmailAvailability, &email)
                        .await
                }
                RegistrationAction::CheckUsernameAvailability { username } => {
                    self.check_availability(RemoteCheck::UsernameAvailability, &username)
                        .await
                }
                RegistrationAction::SubmitRegistration { form } => self.submit(&form).await,
            };
            follow_up_events.push(event);
        }
        follow_up_events
    }

    async fn check_availability(&self, check: RemoteCheck, value: &str) -> RegistrationEvent {
        let request = async {
            match check {
                RemoteCheck::EmailAvailability => self.availability.email_in_use(value).await,
                RemoteCheck::UsernameAvailability => {
                    self.availability.username_in_use(value).await
                }
            }
        };

        match tokio::time::timeout(self.request_timeout, request).await {
            Ok(Ok(in_use)) => {
                info!(?check, in_use, "availability check completed");
                RegistrationEvent::AvailabilityChecked { check, in_use }
            }
            Ok(Err(err)) => {
                warn!(?check, error = %err, "availability check failed");
                RegistrationEvent::AvailabilityCheckFailed { check }
            }
            Err(_) => {
                warn!(
                    ?check,
                    timeout_ms = self.request_timeout.as_millis() as u64,
                    "availability check timed out"
                );
                RegistrationEvent::AvailabilityCheckFailed { check }
            }
        }
    }

    async fn submit(&self, form: &RegistrationForm) -> RegistrationEvent {
        match tokio::time::timeout(self.request_timeout, self.registration.register(form)).await {
            Ok(Ok(())) => {
                info!(username = %form.username, "registration accepted");
                RegistrationEvent::RegistrationSucceeded
            }
            Ok(Err(RegistrationError::Rejected { message })) => {
                warn!(username = %form.username, reason = %message, "registration rejected");
                RegistrationEvent::RegistrationRejected { message }
            }
            Ok(Err(err)) => {
                warn!(error = %err, "registration request failed");
                RegistrationEvent::RegistrationUnavailable
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.request_timeout.as_millis() as u64,
                    "registration request timed out"
                );
                RegistrationEvent::RegistrationUnavailable
            }
        }
    }
}
