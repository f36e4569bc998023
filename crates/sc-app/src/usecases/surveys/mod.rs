//! Survey use cases: listings, full survey views and owner edits.

mod edit_survey;
mod get_survey;
mod list_my_surveys;
mod list_surveys;
mod list_user_surveys;

pub use edit_survey::{CreateSurvey, DeleteSurvey, SurveyEditError, UpdateSurvey};
pub use get_survey::{GetSurvey, GetSurveyForOwner, GetSurveyForSubmission};
pub use list_my_surveys::ListMySurveys;
pub use list_surveys::ListSurveys;
pub use list_user_surveys::ListUserSurveys;

use sc_core::ports::{SessionStoreError, SurveyQueryError};
use sc_core::survey::PageRequestError;

#[derive(Debug, thiserror::Error)]
pub enum ListSurveysError {
    #[error(transparent)]
    InvalidPage(#[from] PageRequestError),
    #[error(transparent)]
    Query(#[from] SurveyQueryError),
    #[error("Debes iniciar sesión para ver tus encuestas")]
    NotLoggedIn,
    #[error("username is required")]
    MissingUsername,
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use mockall::mock;

    use sc_core::auth::SessionToken;
    use sc_core::ports::{
        SessionStoreError, SessionTokenPort, SurveyCommandError, SurveyCommandPort,
        SurveyQueryError, SurveyQueryPort,
    };
    use sc_core::survey::{PageRequest, SurveyPage, SurveySubmission, SurveySummary};

    mock! {
        pub SurveyQuery {}

        #[async_trait]
        impl SurveyQueryPort for SurveyQuery {
            async fn list(&self, page: PageRequest) -> Result<SurveyPage, SurveyQueryError>;
            async fn list_by_username(
                &self,
                username: &str,
                page: PageRequest,
            ) -> Result<SurveyPage, SurveyQueryError>;
            async fn list_for_current_user(&self) -> Result<Vec<SurveySummary>, SurveyQueryError>;
            async fn get(&self, id: i64) -> Result<SurveySummary, SurveyQueryError>;
            async fn get_for_owner(&self, id: i64) -> Result<SurveySubmission, SurveyQueryError>;
            async fn get_for_submission(
                &self,
                id: i64,
            ) -> Result<SurveySubmission, SurveyQueryError>;
        }
    }

    mock! {
        pub SurveyCommand {}

        #[async_trait]
        impl SurveyCommandPort for SurveyCommand {
            async fn create(&self, survey: &SurveySubmission) -> Result<String, SurveyCommandError>;
            async fn update(
                &self,
                id: i64,
                survey: &SurveySubmission,
            ) -> Result<String, SurveyCommandError>;
            async fn delete(&self, id: i64) -> Result<String, SurveyCommandError>;
        }
    }

    pub struct FixedSession(pub Option<SessionToken>);

    impl FixedSession {
        pub fn logged_in() -> Self {
            Self(Some(SessionToken::new("tok")))
        }
    }

    #[async_trait]
    impl SessionTokenPort for FixedSession {
        async fn load(&self) -> Result<Option<SessionToken>, SessionStoreError> {
            Ok(self.0.clone())
        }

        async fn save(&self, _token: &SessionToken) -> Result<(), SessionStoreError> {
            Ok(())
        }

        async fn clear(&self) -> Result<(), SessionStoreError> {
            Ok(())
        }
    }

    pub fn summary(id: i64, title: &str) -> SurveySummary {
        SurveySummary {
            id,
            title: title.to_string(),
            description: String::new(),
            creator_full_name: "Ana Lopez".to_string(),
            creator_username: "ana2024".to_string(),
            creator_profile_picture: None,
            average_rating: 0.0,
            rating_count: 0,
            picture_url: None,
        }
    }
}
