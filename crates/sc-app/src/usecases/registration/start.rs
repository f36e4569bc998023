use std::sync::Arc;
use std::time::Duration;

use sc_core::ports::{AccountAvailabilityPort, ClockPort, RegistrationPort};
use sc_core::registration::{DateBounds, RegistrationRules, StepLayout};
use sc_core::ClientConfig;

use super::RegistrationWizard;

/// Use case for opening a new sign-up session.
///
/// Each call yields an independent [`RegistrationWizard`] with fresh state and
/// birth-date bounds computed from today's date.
pub struct StartRegistration {
    layout: StepLayout,
    min_age_years: u32,
    max_age_years: u32,
    request_timeout: Duration,

    clock: Arc<dyn ClockPort>,
    availability: Arc<dyn AccountAvailabilityPort>,
    registration: Arc<dyn RegistrationPort>,
}

impl StartRegistration {
    pub fn new(
        config: &ClientConfig,
        clock: Arc<dyn ClockPort>,
        availability: Arc<dyn AccountAvailabilityPort>,
        registration: Arc<dyn RegistrationPort>,
    ) -> Self {
        Self {
            layout: StepLayout::default(),
            min_age_years: config.min_age_years,
            max_age_years: config.max_age_years,
            request_timeout: config.request_timeout(),
            clock,
            availability,
            registration,
        }
    }

    /// Replaces the default five-step layout.
    pub fn with_layout(mut self, layout: StepLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn execute(&self) -> RegistrationWizard {
        let today = self.clock.today();
        let bounds = DateBounds::from_ages(today, self.min_age_years, self.max_age_years);
        tracing::debug!(
            %today,
            min = %bounds.min,
            max = %bounds.max,
            "registration session started"
        );

        RegistrationWizard::new(
            RegistrationRules::new(self.layout.clone(), bounds),
            self.availability.clone(),
            self.registration.clone(),
        )
        .with_request_timeout(self.request_timeout)
    }
}
