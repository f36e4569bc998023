use std::sync::Arc;

use sc_core::ports::{SurveyQueryError, SurveyQueryPort};
use sc_core::survey::{SurveySubmission, SurveySummary};

pub struct GetSurvey {
    surveys: Arc<dyn SurveyQueryPort>,
}

impl GetSurvey {
    pub fn new(surveys: Arc<dyn SurveyQueryPort>) -> Self {
        Self { surveys }
    }

    pub async fn execute(&self, id: i64) -> Result<SurveySummary, SurveyQueryError> {
        self.surveys.get(id).await
    }
}

/// Loads a survey with its questions for its creator to edit.
pub struct GetSurveyForOwner {
    surveys: Arc<dyn SurveyQueryPort>,
}

impl GetSurveyForOwner {
    pub fn new(surveys: Arc<dyn SurveyQueryPort>) -> Self {
        Self { surveys }
    }

    pub async fn execute(&self, id: i64) -> Result<SurveySubmission, SurveyQueryError> {
        self.surveys.get_for_owner(id).await
    }
}

/// Loads a survey with its questions for someone to answer.
pub struct GetSurveyForSubmission {
    surveys: Arc<dyn SurveyQueryPort>,
}

impl GetSurveyForSubmission {
    pub fn new(surveys: Arc<dyn SurveyQueryPort>) -> Self {
        Self { surveys }
    }

    pub async fn execute(&self, id: i64) -> Result<SurveySubmission, SurveyQueryError> {
        self.surveys.get_for_submission(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::surveys::test_support::{summary, MockSurveyQuery};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn get_survey_by_id() {
        let mut query = MockSurveyQuery::new();
        query
            .expect_get()
            .with(eq(42))
            .times(1)
            .returning(|id| Ok(summary(id, "Satisfacción del cliente")));

        let survey = GetSurvey::new(Arc::new(query)).execute(42).await.unwrap();
        assert_eq!(survey.id, 42);
    }

    #[tokio::test]
    async fn owner_and_submission_views_use_their_own_queries() {
        let mut query = MockSurveyQuery::new();
        query
            .expect_get_for_owner()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(SurveySubmission::new("Editable", "")));
        query
            .expect_get_for_submission()
            .with(eq(7))
            .times(1)
            .returning(|_| Err(SurveyQueryError::NotFound));
        let query: Arc<dyn SurveyQueryPort> = Arc::new(query);

        let owned = GetSurveyForOwner::new(query.clone()).execute(7).await.unwrap();
        assert_eq!(owned.title, "Editable");
        assert_eq!(
            GetSurveyForSubmission::new(query).execute(7).await,
            Err(SurveyQueryError::NotFound)
        );
    }
}
