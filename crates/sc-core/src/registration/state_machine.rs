//! Registration wizard state machine.
//!
//! Defines a pure state transition function for the sign-up flow. Network
//! work is never performed here: transitions that need the backend return
//! [`RegistrationAction`]s, and the orchestrator feeds the outcome back as a
//! result event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    DateBounds, FieldError, FieldValidator, GlobalMessage, RegistrationField, RegistrationForm,
    RemoteCheck, StepErrorStore, StepLayout,
};

/// Static inputs of the flow, fixed when the wizard is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRules {
    pub layout: StepLayout,
    pub bounds: DateBounds,
}

impl RegistrationRules {
    pub fn new(layout: StepLayout, bounds: DateBounds) -> Self {
        Self { layout, bounds }
    }
}

/// Where the flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardPhase {
    /// Waiting for user input on `current_step`.
    Editing,
    /// A remote availability check for the current step is in flight.
    AwaitingAvailability { check: RemoteCheck },
    /// The registration request is in flight.
    Submitting,
    /// Registration accepted by the backend. Terminal.
    Submitted,
}

/// Full wizard state, owned by a single registration session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    pub current_step: usize,
    pub form: RegistrationForm,
    pub errors: StepErrorStore,
    pub global_message: Option<GlobalMessage>,
    /// Last value picked in the date widget, kept even when rejected.
    pub date_of_birth_input: Option<NaiveDate>,
    pub phase: WizardPhase,
}

impl WizardState {
    pub fn new(layout: &StepLayout) -> Self {
        Self {
            current_step: 0,
            form: RegistrationForm::default(),
            errors: StepErrorStore::new(layout),
            global_message: None,
            date_of_birth_input: None,
            phase: WizardPhase::Editing,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == WizardPhase::Submitted
    }

    /// Whether a backend request is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            WizardPhase::AwaitingAvailability { .. } | WizardPhase::Submitting
        )
    }
}

/// Events that drive the registration flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    /// User typed into a text field.
    EditField {
        field: RegistrationField,
        value: String,
    },
    /// User picked (or cleared) a birth date.
    ChangeDate { date: Option<NaiveDate> },
    /// "Continue" pressed. On the last step this submits.
    NextStep,
    /// "Back" pressed.
    PrevStep,
    /// Final form submission.
    Submit,

    // Results (from orchestrator)
    AvailabilityChecked { check: RemoteCheck, in_use: bool },
    AvailabilityCheckFailed { check: RemoteCheck },
    RegistrationSucceeded,
    /// Backend refused the registration with a human-readable reason.
    RegistrationRejected { message: String },
    /// Backend unreachable or timed out.
    RegistrationUnavailable,
}

impl RegistrationEvent {
    /// Stable label for logs; never includes typed values.
    pub fn name(&self) -> &'static str {
        match self {
            RegistrationEvent::EditField { .. } => "EditField",
            RegistrationEvent::ChangeDate { .. } => "ChangeDate",
            RegistrationEvent::NextStep => "NextStep",
            RegistrationEvent::PrevStep => "PrevStep",
            RegistrationEvent::Submit => "Submit",
            RegistrationEvent::AvailabilityChecked { .. } => "AvailabilityChecked",
            RegistrationEvent::AvailabilityCheckFailed { .. } => "AvailabilityCheckFailed",
            RegistrationEvent::RegistrationSucceeded => "RegistrationSucceeded",
            RegistrationEvent::RegistrationRejected { .. } => "RegistrationRejected",
            RegistrationEvent::RegistrationUnavailable => "RegistrationUnavailable",
        }
    }

    /// Whether handling this event may reach the backend.
    pub fn may_hit_network(&self) -> bool {
        matches!(self, RegistrationEvent::NextStep | RegistrationEvent::Submit)
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    CheckEmailAvailability { email: String },
    CheckUsernameAvailability { username: String },
    SubmitRegistration { form: RegistrationForm },
}

impl RegistrationAction {
    pub fn name(&self) -> &'static str {
        match self {
            RegistrationAction::CheckEmailAvailability { .. } => "CheckEmailAvailability",
            RegistrationAction::CheckUsernameAvailability { .. } => "CheckUsernameAvailability",
            RegistrationAction::SubmitRegistration { .. } => "SubmitRegistration",
        }
    }
}

/// Pure registration state machine.
pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    pub fn transition(
        state: WizardState,
        event: RegistrationEvent,
        rules: &RegistrationRules,
    ) -> (WizardState, Vec<RegistrationAction>) {
        match (state.phase, event) {
            (WizardPhase::Editing, RegistrationEvent::EditField { field, value }) => {
                Self::edit_field(state, field, value, rules)
            }
            (WizardPhase::Editing, RegistrationEvent::ChangeDate { date }) => {
                Self::change_date(state, date, rules)
            }
            (WizardPhase::Editing, RegistrationEvent::NextStep) => {
                Self::attempt_advance(state, rules)
            }
            (WizardPhase::Editing, RegistrationEvent::Submit)
                if rules.layout.is_last(state.current_step) =>
            {
                Self::attempt_advance(state, rules)
            }
            (WizardPhase::Editing, RegistrationEvent::PrevStep) => Self::retreat(state),
            (
                WizardPhase::AwaitingAvailability { check },
                RegistrationEvent::AvailabilityChecked {
                    check: reported,
                    in_use,
                },
            ) if reported == check => {
                let mut state = state;
                state.phase = WizardPhase::Editing;
                if in_use {
                    let step = state.current_step;
                    state
                        .errors
                        .set_field_error(step, check.field(), Some(check.conflict_error()));
                    state.global_message = Some(check.conflict_message());
                    return (state, Vec::new());
                }
                Self::complete_step(state, rules)
            }
            (
                WizardPhase::AwaitingAvailability { check },
                RegistrationEvent::AvailabilityCheckFailed { check: reported },
            ) if reported == check => {
                let mut state = state;
                state.phase = WizardPhase::Editing;
                state.global_message = Some(GlobalMessage::AvailabilityCheckFailed);
                (state, Vec::new())
            }
            (WizardPhase::Submitting, RegistrationEvent::RegistrationSucceeded) => {
                let mut state = state;
                state.phase = WizardPhase::Submitted;
                state.global_message = None;
                (state, Vec::new())
            }
            (WizardPhase::Submitting, RegistrationEvent::RegistrationRejected { message }) => {
                let mut state = state;
                state.phase = WizardPhase::Editing;
                state.global_message = Some(GlobalMessage::Backend(message));
                (state, Vec::new())
            }
            (WizardPhase::Submitting, RegistrationEvent::RegistrationUnavailable) => {
                let mut state = state;
                state.phase = WizardPhase::Editing;
                state.global_message = Some(GlobalMessage::RegistrationFailed);
                (state, Vec::new())
            }
            (_phase, _event) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    phase = ?_phase,
                    event = _event.name(),
                    "registration event ignored"
                );
                (state, Vec::new())
            }
        }
    }

    fn edit_field(
        mut state: WizardState,
        field: RegistrationField,
        value: String,
        rules: &RegistrationRules,
    ) -> (WizardState, Vec<RegistrationAction>) {
        if !state.form.set_text(field, value) {
            return (state, Vec::new());
        }
        Self::record_input_verdict(&mut state, field, None, rules);
        (state, Vec::new())
    }

    fn change_date(
        mut state: WizardState,
        date: Option<NaiveDate>,
        rules: &RegistrationRules,
    ) -> (WizardState, Vec<RegistrationAction>) {
        let error = FieldValidator::validate_date(date, &rules.bounds);
        state.date_of_birth_input = date;
        state.form.date_of_birth = if error.is_none() { date } else { None };
        Self::record_input_verdict(&mut state, RegistrationField::DateOfBirth, error, rules);
        (state, Vec::new())
    }

    /// Stores the verdict produced at input time and drops the banner once
    /// no step carries an error any more.
    fn record_input_verdict(
        state: &mut WizardState,
        field: RegistrationField,
        error: Option<FieldError>,
        rules: &RegistrationRules,
    ) {
        if let Some(step) = rules.layout.step_of(field) {
            state.errors.set_field_error(step, field, error);
        }
        if !state.errors.has_any_error() {
            state.global_message = None;
        }
    }

    /// Validates every field of the current step against the current form.
    fn validate_current_step(state: &mut WizardState, rules: &RegistrationRules) -> bool {
        let step = state.current_step;
        let mut valid = true;
        for &field in rules.layout.fields(step) {
            let error = FieldValidator::validate(field, &state.form, &rules.bounds);
            valid &= error.is_none();
            state.errors.set_field_error(step, field, error);
        }
        valid
    }

    fn attempt_advance(
        mut state: WizardState,
        rules: &RegistrationRules,
    ) -> (WizardState, Vec<RegistrationAction>) {
        if !Self::validate_current_step(&mut state, rules) {
            state.global_message = Some(GlobalMessage::RequiredFields);
            return (state, Vec::new());
        }

        if rules.layout.is_last(state.current_step) && !state.form.passwords_match() {
            state.global_message = Some(GlobalMessage::PasswordMismatch);
            return (state, Vec::new());
        }

        if let Some(check) = rules.layout.remote_check(state.current_step) {
            let action = match check {
                RemoteCheck::EmailAvailability => RegistrationAction::CheckEmailAvailability {
                    email: state.form.email.clone(),
                },
                RemoteCheck::UsernameAvailability => {
                    RegistrationAction::CheckUsernameAvailability {
                        username: state.form.username.clone(),
                    }
                }
            };
            state.phase = WizardPhase::AwaitingAvailability { check };
            return (state, vec![action]);
        }

        Self::complete_step(state, rules)
    }

    /// The current step passed every gate: move on, or submit from the last step.
    fn complete_step(
        mut state: WizardState,
        rules: &RegistrationRules,
    ) -> (WizardState, Vec<RegistrationAction>) {
        if rules.layout.is_last(state.current_step) {
            state.phase = WizardPhase::Submitting;
            let form = state.form.clone();
            return (state, vec![RegistrationAction::SubmitRegistration { form }]);
        }

        state.global_message = None;
        state.current_step += 1;
        (state, Vec::new())
    }

    fn retreat(mut state: WizardState) -> (WizardState, Vec<RegistrationAction>) {
        if state.current_step == 0 {
            return (state, Vec::new());
        }
        let step = state.current_step;
        state.global_message = None;
        state.errors.clear_step(step);
        state.current_step = step - 1;
        (state, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RegistrationField::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rules() -> RegistrationRules {
        RegistrationRules::new(
            StepLayout::default(),
            DateBounds::for_today(date(2024, 6, 15)),
        )
    }

    fn start(rules: &RegistrationRules) -> WizardState {
        WizardState::new(&rules.layout)
    }

    fn run(
        state: WizardState,
        events: Vec<RegistrationEvent>,
        rules: &RegistrationRules,
    ) -> (WizardState, Vec<RegistrationAction>) {
        let mut current = state;
        let mut actions = Vec::new();
        for event in events {
            let (next, mut emitted) = RegistrationStateMachine::transition(current, event, rules);
            actions.append(&mut emitted);
            current = next;
        }
        (current, actions)
    }

    fn edit(field: RegistrationField, value: &str) -> RegistrationEvent {
        RegistrationEvent::EditField {
            field,
            value: value.to_string(),
        }
    }

    fn at_step(step: usize, rules: &RegistrationRules) -> WizardState {
        let mut state = start(rules);
        state.current_step = step;
        state
    }

    #[test]
    fn registration_state_machine_invalid_step_stays_and_reports_each_field() {
        let rules = rules();
        let (state, actions) = run(
            start(&rules),
            vec![edit(LastName, "Lopez"), RegistrationEvent::NextStep],
            &rules,
        );

        assert!(actions.is_empty());
        assert_eq!(state.current_step, 0);
        assert_eq!(state.global_message, Some(GlobalMessage::RequiredFields));
        assert_eq!(
            state.errors.field_error(0, FirstName),
            Some(&FieldError::FirstNameRequired)
        );
        assert_eq!(state.errors.field_error(0, LastName), None);
    }

    #[test]
    fn registration_state_machine_all_fields_in_one_step_report_their_own_messages() {
        let layout = StepLayout::new(vec![
            vec![
                FirstName,
                LastName,
                Phone,
                Email,
                Username,
                Password,
                ConfirmPassword,
                DateOfBirth,
            ],
        ])
        .unwrap();
        let rules = RegistrationRules::new(layout, DateBounds::for_today(date(2024, 6, 15)));

        let (state, actions) = run(
            start(&rules),
            vec![
                edit(FirstName, ""),
                edit(LastName, "Lopez"),
                edit(Phone, "123"),
                edit(Email, "bad"),
                edit(Username, "ab cd"),
                edit(Password, "short"),
                edit(ConfirmPassword, "short2"),
                RegistrationEvent::NextStep,
            ],
            &rules,
        );

        assert!(actions.is_empty());
        assert_eq!(state.global_message, Some(GlobalMessage::RequiredFields));
        let expected = [
            (FirstName, Some(FieldError::FirstNameRequired)),
            (LastName, None),
            (Phone, Some(FieldError::InvalidPhone)),
            (Email, Some(FieldError::InvalidEmail)),
            (Username, Some(FieldError::InvalidUsername)),
            (Password, Some(FieldError::PasswordTooShort { min_len: 8 })),
            (ConfirmPassword, Some(FieldError::PasswordMismatch)),
            (DateOfBirth, Some(FieldError::InvalidDateOfBirth)),
        ];
        for (field, error) in expected {
            assert_eq!(state.errors.field_error(0, field), error.as_ref(), "{field}");
        }
    }

    #[test]
    fn registration_state_machine_valid_step_advances_and_clears_banner() {
        let rules = rules();
        let mut state = at_step(3, &rules);
        state.global_message = Some(GlobalMessage::RequiredFields);

        let (state, actions) = run(
            state,
            vec![
                edit(Password, "correct-horse"),
                edit(ConfirmPassword, "correct-horse"),
                RegistrationEvent::NextStep,
            ],
            &rules,
        );

        assert!(actions.is_empty());
        assert_eq!(state.current_step, 4);
        assert_eq!(state.global_message, None);
    }

    #[test]
    fn registration_state_machine_email_step_requests_one_availability_check() {
        let rules = rules();
        let (state, actions) = run(
            at_step(2, &rules),
            vec![edit(Email, "ana@example.com"), RegistrationEvent::NextStep],
            &rules,
        );

        assert_eq!(
            actions,
            vec![RegistrationAction::CheckEmailAvailability {
                email: "ana@example.com".into()
            }]
        );
        assert_eq!(state.current_step, 2);
        assert!(state.is_busy());
    }

    #[test]
    fn registration_state_machine_other_steps_never_check_availability() {
        let rules = rules();
        let (state, actions) = run(
            start(&rules),
            vec![
                edit(FirstName, "Ana"),
                edit(LastName, "Lopez"),
                RegistrationEvent::NextStep,
                edit(Username, "ana2024"),
                edit(Phone, "12345678"),
                RegistrationEvent::NextStep,
            ],
            &rules,
        );

        assert!(actions.is_empty());
        assert_eq!(state.current_step, 2);
    }

    #[test]
    fn registration_state_machine_email_in_use_blocks_step() {
        let rules = rules();
        let (state, _) = run(
            at_step(2, &rules),
            vec![
                edit(Email, "ana@example.com"),
                RegistrationEvent::NextStep,
                RegistrationEvent::AvailabilityChecked {
                    check: RemoteCheck::EmailAvailability,
                    in_use: true,
                },
            ],
            &rules,
        );

        assert_eq!(state.current_step, 2);
        assert_eq!(state.phase, WizardPhase::Editing);
        assert_eq!(state.global_message, Some(GlobalMessage::EmailInUse));
        let error = state.errors.field_error(2, Email).unwrap();
        assert_eq!(error, &FieldError::EmailInUse);
        assert!(error.message().contains("ya está en uso"));
    }

    #[test]
    fn registration_state_machine_email_free_advances() {
        let rules = rules();
        let (state, _) = run(
            at_step(2, &rules),
            vec![
                edit(Email, "ana@example.com"),
                RegistrationEvent::NextStep,
                RegistrationEvent::AvailabilityChecked {
                    check: RemoteCheck::EmailAvailability,
                    in_use: false,
                },
            ],
            &rules,
        );

        assert_eq!(state.current_step, 3);
        assert_eq!(state.global_message, None);
    }

    #[test]
    fn registration_state_machine_failed_check_keeps_step_and_data() {
        let rules = rules();
        let (state, _) = run(
            at_step(2, &rules),
            vec![
                edit(Email, "ana@example.com"),
                RegistrationEvent::NextStep,
                RegistrationEvent::AvailabilityCheckFailed {
                    check: RemoteCheck::EmailAvailability,
                },
            ],
            &rules,
        );

        assert_eq!(state.current_step, 2);
        assert_eq!(state.form.email, "ana@example.com");
        assert_eq!(
            state.global_message,
            Some(GlobalMessage::AvailabilityCheckFailed)
        );
        assert_eq!(state.errors.field_error(2, Email), None);
    }

    #[test]
    fn registration_state_machine_edit_clears_field_error_and_banner_when_clean() {
        let rules = rules();
        let (state, _) = run(
            start(&rules),
            vec![RegistrationEvent::NextStep, edit(FirstName, "Ana")],
            &rules,
        );
        assert_eq!(state.errors.field_error(0, FirstName), None);
        // lastName still carries its error
        assert_eq!(state.global_message, Some(GlobalMessage::RequiredFields));

        let (state, _) = run(state, vec![edit(LastName, "x")], &rules);
        assert!(!state.errors.has_any_error());
        assert_eq!(state.global_message, None);
    }

    #[test]
    fn registration_state_machine_edit_does_not_revalidate() {
        let rules = rules();
        let (state, _) = run(start(&rules), vec![edit(FirstName, "   ")], &rules);
        assert_eq!(state.errors.field_error(0, FirstName), None);
    }

    #[test]
    fn registration_state_machine_retreat_clears_step_errors() {
        let rules = rules();
        let (state, _) = run(
            at_step(3, &rules),
            vec![RegistrationEvent::NextStep, RegistrationEvent::PrevStep],
            &rules,
        );

        assert_eq!(state.current_step, 2);
        assert!(state.errors.is_step_valid(3));
        assert_eq!(state.global_message, None);

        // Re-entering forces revalidation.
        let mut state = state;
        state.current_step = 3;
        let (state, _) = run(state, vec![RegistrationEvent::NextStep], &rules);
        assert!(!state.errors.is_step_valid(3));
    }

    #[test]
    fn registration_state_machine_retreat_from_first_step_is_noop() {
        let rules = rules();
        let mut state = start(&rules);
        state.global_message = Some(GlobalMessage::RequiredFields);
        let before = state.clone();

        let (after, actions) = run(state, vec![RegistrationEvent::PrevStep], &rules);
        assert_eq!(after, before);
        assert!(actions.is_empty());
    }

    #[test]
    fn registration_state_machine_date_change_validates_immediately() {
        let rules = rules();
        let too_young = date(2015, 1, 1);
        let (state, _) = run(
            start(&rules),
            vec![RegistrationEvent::ChangeDate {
                date: Some(too_young),
            }],
            &rules,
        );

        assert_eq!(state.form.date_of_birth, None);
        assert_eq!(state.date_of_birth_input, Some(too_young));
        assert_eq!(
            state.errors.field_error(4, DateOfBirth),
            Some(&FieldError::InvalidDateOfBirth)
        );

        let ok = date(1990, 5, 20);
        let (state, _) = run(
            state,
            vec![RegistrationEvent::ChangeDate { date: Some(ok) }],
            &rules,
        );
        assert_eq!(state.form.date_of_birth, Some(ok));
        assert_eq!(state.errors.field_error(4, DateOfBirth), None);
    }

    #[test]
    fn registration_state_machine_date_on_bound_is_rejected() {
        let rules = rules();
        let (state, _) = run(
            start(&rules),
            vec![RegistrationEvent::ChangeDate {
                date: Some(rules.bounds.max),
            }],
            &rules,
        );
        assert_eq!(state.form.date_of_birth, None);
    }

    #[test]
    fn registration_state_machine_submit_with_mismatched_passwords_aborts_locally() {
        let rules = rules();
        let mut state = at_step(4, &rules);
        state.form.password = "correct-horse".into();
        state.form.confirm_password = "correct-horsf".into();

        let (state, actions) = run(
            state,
            vec![
                RegistrationEvent::ChangeDate {
                    date: Some(date(1990, 5, 20)),
                },
                RegistrationEvent::Submit,
            ],
            &rules,
        );

        assert!(actions.is_empty());
        assert_eq!(state.global_message, Some(GlobalMessage::PasswordMismatch));
        assert_eq!(state.phase, WizardPhase::Editing);
    }

    #[test]
    fn registration_state_machine_last_step_next_submits_instead_of_incrementing() {
        let rules = rules();
        let mut state = at_step(4, &rules);
        state.form.password = "correct-horse".into();
        state.form.confirm_password = "correct-horse".into();

        let (state, actions) = run(
            state,
            vec![
                RegistrationEvent::ChangeDate {
                    date: Some(date(1990, 5, 20)),
                },
                RegistrationEvent::NextStep,
            ],
            &rules,
        );

        assert_eq!(state.current_step, 4);
        assert_eq!(state.phase, WizardPhase::Submitting);
        assert!(matches!(
            actions.as_slice(),
            [RegistrationAction::SubmitRegistration { form }] if form.date_of_birth == Some(date(1990, 5, 20))
        ));
    }

    #[test]
    fn registration_state_machine_submit_ignored_before_last_step() {
        let rules = rules();
        let (state, actions) = run(at_step(1, &rules), vec![RegistrationEvent::Submit], &rules);
        assert!(actions.is_empty());
        assert_eq!(state.current_step, 1);
        assert_eq!(state.global_message, None);
    }

    #[test]
    fn registration_state_machine_submission_outcomes() {
        let rules = rules();
        let mut submitting = at_step(4, &rules);
        submitting.phase = WizardPhase::Submitting;

        let (state, _) = RegistrationStateMachine::transition(
            submitting.clone(),
            RegistrationEvent::RegistrationRejected {
                message: "Usuario ya registrado".into(),
            },
            &rules,
        );
        assert_eq!(
            state.global_message,
            Some(GlobalMessage::Backend("Usuario ya registrado".into()))
        );
        assert_eq!(state.phase, WizardPhase::Editing);

        let (state, _) = RegistrationStateMachine::transition(
            submitting.clone(),
            RegistrationEvent::RegistrationUnavailable,
            &rules,
        );
        assert_eq!(state.global_message, Some(GlobalMessage::RegistrationFailed));

        let (state, _) = RegistrationStateMachine::transition(
            submitting,
            RegistrationEvent::RegistrationSucceeded,
            &rules,
        );
        assert!(state.is_submitted());

        let (after, actions) =
            RegistrationStateMachine::transition(state.clone(), RegistrationEvent::PrevStep, &rules);
        assert_eq!(after, state);
        assert!(actions.is_empty());
    }

    #[test]
    fn registration_state_machine_ignores_input_while_busy() {
        let rules = rules();
        let mut state = at_step(2, &rules);
        state.phase = WizardPhase::AwaitingAvailability {
            check: RemoteCheck::EmailAvailability,
        };
        let before = state.clone();

        let (after, actions) = run(
            state,
            vec![
                edit(Email, "other@example.com"),
                RegistrationEvent::NextStep,
                RegistrationEvent::AvailabilityChecked {
                    check: RemoteCheck::UsernameAvailability,
                    in_use: true,
                },
            ],
            &rules,
        );
        assert_eq!(after, before);
        assert!(actions.is_empty());
    }

    #[test]
    fn registration_state_machine_username_check_binding() {
        let layout = StepLayout::new(vec![vec![Username], vec![Email]])
            .unwrap()
            .with_remote_check(0, RemoteCheck::UsernameAvailability)
            .unwrap();
        let rules = RegistrationRules::new(layout, DateBounds::for_today(date(2024, 6, 15)));

        let (state, actions) = run(
            start(&rules),
            vec![edit(Username, "ana2024"), RegistrationEvent::NextStep],
            &rules,
        );
        assert_eq!(
            actions,
            vec![RegistrationAction::CheckUsernameAvailability {
                username: "ana2024".into()
            }]
        );

        let (state, _) = run(
            state,
            vec![RegistrationEvent::AvailabilityChecked {
                check: RemoteCheck::UsernameAvailability,
                in_use: true,
            }],
            &rules,
        );
        assert_eq!(
            state.errors.field_error(0, Username),
            Some(&FieldError::UsernameInUse)
        );
        assert_eq!(state.global_message, Some(GlobalMessage::UsernameInUse));
    }
}
