use std::collections::BTreeMap;

use serde::Serialize;

use super::{FieldError, RegistrationField, StepLayout};

/// Per-step map from owned field to its last verdict.
///
/// `None` means valid or not validated yet. A step is passable iff every
/// entry of its map is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepErrorStore {
    steps: Vec<BTreeMap<RegistrationField, Option<FieldError>>>,
}

impl StepErrorStore {
    pub fn new(layout: &StepLayout) -> Self {
        let steps = layout
            .steps()
            .map(|fields| fields.iter().map(|field| (*field, None)).collect())
            .collect();
        Self { steps }
    }

    /// Records a verdict. Returns `false` when `step` does not own `field`.
    pub fn set_field_error(
        &mut self,
        step: usize,
        field: RegistrationField,
        error: Option<FieldError>,
    ) -> bool {
        match self
            .steps
            .get_mut(step)
            .and_then(|errors| errors.get_mut(&field))
        {
            Some(slot) => {
                *slot = error;
                true
            }
            None => false,
        }
    }

    /// Resets every entry of `step` to no-error; the entries themselves stay.
    pub fn clear_step(&mut self, step: usize) {
        if let Some(errors) = self.steps.get_mut(step) {
            errors.values_mut().for_each(|slot| *slot = None);
        }
    }

    pub fn is_step_valid(&self, step: usize) -> bool {
        self.steps
            .get(step)
            .map_or(true, |errors| errors.values().all(Option::is_none))
    }

    pub fn has_any_error(&self) -> bool {
        (0..self.steps.len()).any(|step| !self.is_step_valid(step))
    }

    pub fn field_error(&self, step: usize, field: RegistrationField) -> Option<&FieldError> {
        self.steps
            .get(step)
            .and_then(|errors| errors.get(&field))
            .and_then(Option::as_ref)
    }

    /// Entries of `step` in field order.
    pub fn step_errors(
        &self,
        step: usize,
    ) -> impl Iterator<Item = (RegistrationField, Option<&FieldError>)> {
        self.steps
            .get(step)
            .into_iter()
            .flat_map(|errors| errors.iter().map(|(field, error)| (*field, error.as_ref())))
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}
