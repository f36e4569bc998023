use std::sync::Arc;

use sc_core::ports::SurveyQueryPort;
use sc_core::survey::{PageRequest, SurveyPage};

use super::ListSurveysError;

/// Paged listing of the surveys published by one user.
pub struct ListUserSurveys {
    surveys: Arc<dyn SurveyQueryPort>,
}

impl ListUserSurveys {
    pub fn new(surveys: Arc<dyn SurveyQueryPort>) -> Self {
        Self { surveys }
    }

    pub async fn execute(
        &self,
        username: &str,
        page: u32,
        size: u32,
    ) -> Result<SurveyPage, ListSurveysError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ListSurveysError::MissingUsername);
        }
        let request = PageRequest::new(page, size)?;
        Ok(self.surveys.list_by_username(username, request).await?)
    }
}
