use std::sync::Arc;

use tracing::debug;

use sc_core::ports::{SessionTokenPort, SurveyQueryPort};
use sc_core::survey::SurveySummary;

use super::ListSurveysError;

/// Lists the surveys created by the logged-in user.
///
/// Fails fast with [`ListSurveysError::NotLoggedIn`] when no session token is
/// stored, without contacting the backend.
pub struct ListMySurveys {
    surveys: Arc<dyn SurveyQueryPort>,
    session: Arc<dyn SessionTokenPort>,
}

impl ListMySurveys {
    pub fn new(surveys: Arc<dyn SurveyQueryPort>, session: Arc<dyn SessionTokenPort>) -> Self {
        Self { surveys, session }
    }

    pub async fn execute(&self) -> Result<Vec<SurveySummary>, ListSurveysError> {
        if !self.session.is_logged_in().await? {
            debug!("own surveys requested without a session");
            return Err(ListSurveysError::NotLoggedIn);
        }
        Ok(self.surveys.list_for_current_user().await?)
    }
}
