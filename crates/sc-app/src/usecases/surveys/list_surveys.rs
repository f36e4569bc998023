use std::sync::Arc;

use tracing::debug;

use sc_core::ports::SurveyQueryPort;
use sc_core::survey::{PageRequest, SurveyPage};

use super::ListSurveysError;

/// Paged listing of all public surveys. Pages are 1-based.
pub struct ListSurveys {
    surveys: Arc<dyn SurveyQueryPort>,
}

impl ListSurveys {
    pub fn new(surveys: Arc<dyn SurveyQueryPort>) -> Self {
        Self { surveys }
    }

    pub async fn execute(&self, page: u32, size: u32) -> Result<SurveyPage, ListSurveysError> {
        let request = PageRequest::new(page, size)?;
        let result = self.surveys.list(request).await?;
        debug!(
            page,
            count = result.surveys.len(),
            total_pages = result.total_pages,
            "surveys listed"
        );
        Ok(result)
    }
}
