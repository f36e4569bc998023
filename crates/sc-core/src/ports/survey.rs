use async_trait::async_trait;

use crate::survey::{PageRequest, SurveyPage, SurveySubmission, SurveySummary};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyQueryError {
    /// The listing is empty; `message` is meant for the user.
    #[error("{message}")]
    NoSurveys { message: String },
    #[error("survey not found")]
    NotFound,
    #[error("not authorized")]
    Unauthorized,
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("backend error {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Read-only access to survey listings.
#[async_trait]
pub trait SurveyQueryPort: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<SurveyPage, SurveyQueryError>;

    async fn list_by_username(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<SurveyPage, SurveyQueryError>;

    /// Surveys created by the logged-in user.
    async fn list_for_current_user(&self) -> Result<Vec<SurveySummary>, SurveyQueryError>;

    async fn get(&self, id: i64) -> Result<SurveySummary, SurveyQueryError>;

    /// Full survey, questions included, as its creator edits it.
    async fn get_for_owner(&self, id: i64) -> Result<SurveySubmission, SurveyQueryError>;

    /// Full survey as shown to someone answering it.
    async fn get_for_submission(&self, id: i64) -> Result<SurveySubmission, SurveyQueryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyCommandError {
    #[error("not authorized")]
    Unauthorized,
    #[error("survey not found")]
    NotFound,
    /// The backend refused the change; `message` is meant for the user.
    #[error("{message}")]
    Rejected { message: String },
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("could not encode survey: {0}")]
    Encode(String),
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Survey writes. Every call acts on behalf of the logged-in user and returns
/// the backend's confirmation text.
#[async_trait]
pub trait SurveyCommandPort: Send + Sync {
    async fn create(&self, survey: &SurveySubmission) -> Result<String, SurveyCommandError>;

    async fn update(
        &self,
        id: i64,
        survey: &SurveySubmission,
    ) -> Result<String, SurveyCommandError>;

    async fn delete(&self, id: i64) -> Result<String, SurveyCommandError>;
}
