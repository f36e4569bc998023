//! Step layout: which fields each wizard step owns and which steps run a
//! remote availability check before they can be left.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FieldError, GlobalMessage, RegistrationField};

/// Remote uniqueness check a step can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemoteCheck {
    EmailAvailability,
    UsernameAvailability,
}

impl RemoteCheck {
    /// Field whose value is sent to the backend.
    pub fn field(&self) -> RegistrationField {
        match self {
            RemoteCheck::EmailAvailability => RegistrationField::Email,
            RemoteCheck::UsernameAvailability => RegistrationField::Username,
        }
    }

    pub fn conflict_error(&self) -> FieldError {
        match self {
            RemoteCheck::EmailAvailability => FieldError::EmailInUse,
            RemoteCheck::UsernameAvailability => FieldError::UsernameInUse,
        }
    }

    pub fn conflict_message(&self) -> GlobalMessage {
        match self {
            RemoteCheck::EmailAvailability => GlobalMessage::EmailInUse,
            RemoteCheck::UsernameAvailability => GlobalMessage::UsernameInUse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepLayoutError {
    #[error("layout has no steps")]
    NoSteps,
    #[error("step {step} has no fields")]
    EmptyStep { step: usize },
    #[error("field {field} is assigned to more than one step")]
    DuplicateField { field: RegistrationField },
    #[error("step {step} is out of range (layout has {total} steps)")]
    StepOutOfRange { step: usize, total: usize },
    #[error("step {step} does not own field {field}")]
    FieldNotInStep {
        step: usize,
        field: RegistrationField,
    },
    #[error("step {step} already runs a remote check")]
    StepAlreadyChecked { step: usize },
}

/// Ordered wizard steps; the step count is fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLayout {
    steps: Vec<Vec<RegistrationField>>,
    remote_checks: BTreeMap<usize, RemoteCheck>,
}

impl StepLayout {
    /// Index of the step bound to the email check in the default layout.
    pub const DEFAULT_EMAIL_STEP: usize = 2;

    pub fn new(steps: Vec<Vec<RegistrationField>>) -> Result<Self, StepLayoutError> {
        if steps.is_empty() {
            return Err(StepLayoutError::NoSteps);
        }

        let mut seen = Vec::new();
        for (step, fields) in steps.iter().enumerate() {
            if fields.is_empty() {
                return Err(StepLayoutError::EmptyStep { step });
            }
            for field in fields {
                if seen.contains(field) {
                    return Err(StepLayoutError::DuplicateField { field: *field });
                }
                seen.push(*field);
            }
        }

        Ok(Self {
            steps,
            remote_checks: BTreeMap::new(),
        })
    }

    /// Binds `check` to `step`. The step must own the checked field.
    pub fn with_remote_check(
        mut self,
        step: usize,
        check: RemoteCheck,
    ) -> Result<Self, StepLayoutError> {
        let total = self.steps.len();
        let fields = self
            .steps
            .get(step)
            .ok_or(StepLayoutError::StepOutOfRange { step, total })?;
        if !fields.contains(&check.field()) {
            return Err(StepLayoutError::FieldNotInStep {
                step,
                field: check.field(),
            });
        }
        if self.remote_checks.contains_key(&step) {
            return Err(StepLayoutError::StepAlreadyChecked { step });
        }
        self.remote_checks.insert(step, check);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_step(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn is_last(&self, step: usize) -> bool {
        step == self.last_step()
    }

    /// Fields owned by `step`; empty when the step does not exist.
    pub fn fields(&self, step: usize) -> &[RegistrationField] {
        self.steps.get(step).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn step_of(&self, field: RegistrationField) -> Option<usize> {
        self.steps.iter().position(|fields| fields.contains(&field))
    }

    pub fn remote_check(&self, step: usize) -> Option<RemoteCheck> {
        self.remote_checks.get(&step).copied()
    }

    pub fn steps(&self) -> impl Iterator<Item = &[RegistrationField]> {
        self.steps.iter().map(Vec::as_slice)
    }
}

impl Default for StepLayout {
    /// Names, then account handle and phone, then email (checked remotely),
    /// then passwords, then birth date.
    fn default() -> Self {
        use RegistrationField::*;

        let mut remote_checks = BTreeMap::new();
        remote_checks.insert(Self::DEFAULT_EMAIL_STEP, RemoteCheck::EmailAvailability);

        Self {
            steps: vec![
                vec![FirstName, LastName],
                vec![Username, Phone],
                vec![Email],
                vec![Password, ConfirmPassword],
                vec![DateOfBirth],
            ],
            remote_checks,
        }
    }
}
