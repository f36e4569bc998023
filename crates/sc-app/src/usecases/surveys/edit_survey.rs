use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use sc_core::ports::{SessionStoreError, SessionTokenPort, SurveyCommandError, SurveyCommandPort};
use sc_core::survey::{SurveyDraftError, SurveySubmission};

#[derive(Debug, thiserror::Error)]
pub enum SurveyEditError {
    #[error(transparent)]
    Invalid(#[from] SurveyDraftError),
    #[error(transparent)]
    Command(#[from] SurveyCommandError),
    #[error("Debes iniciar sesión para gestionar tus encuestas")]
    NotLoggedIn,
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

async fn require_session(session: &dyn SessionTokenPort) -> Result<(), SurveyEditError> {
    if session.is_logged_in().await? {
        Ok(())
    } else {
        debug!("survey edit requested without a session");
        Err(SurveyEditError::NotLoggedIn)
    }
}

/// Publishes a new survey for the logged-in user.
///
/// The draft is validated locally first; nothing is sent when it is
/// incomplete or no session is stored.
pub struct CreateSurvey {
    commands: Arc<dyn SurveyCommandPort>,
    session: Arc<dyn SessionTokenPort>,
}

impl CreateSurvey {
    pub fn new(commands: Arc<dyn SurveyCommandPort>, session: Arc<dyn SessionTokenPort>) -> Self {
        Self { commands, session }
    }

    /// Returns the backend's confirmation message.
    pub async fn execute(&self, survey: &SurveySubmission) -> Result<String, SurveyEditError> {
        let span = info_span!("usecase.surveys.create");
        async {
            require_session(self.session.as_ref()).await?;
            survey.validate()?;
            Ok(self.commands.create(survey).await?)
        }
        .instrument(span)
        .await
    }
}

/// Replaces an existing survey owned by the logged-in user.
pub struct UpdateSurvey {
    commands: Arc<dyn SurveyCommandPort>,
    session: Arc<dyn SessionTokenPort>,
}

impl UpdateSurvey {
    pub fn new(commands: Arc<dyn SurveyCommandPort>, session: Arc<dyn SessionTokenPort>) -> Self {
        Self { commands, session }
    }

    /// `id` wins over whatever id the draft carries.
    pub async fn execute(
        &self,
        id: i64,
        mut survey: SurveySubmission,
    ) -> Result<String, SurveyEditError> {
        let span = info_span!("usecase.surveys.update", survey_id = id);
        async {
            require_session(self.session.as_ref()).await?;
            survey.validate()?;
            survey.id = Some(id);
            Ok(self.commands.update(id, &survey).await?)
        }
        .instrument(span)
        .await
    }
}

pub struct DeleteSurvey {
    commands: Arc<dyn SurveyCommandPort>,
    session: Arc<dyn SessionTokenPort>,
}

impl DeleteSurvey {
    pub fn new(commands: Arc<dyn SurveyCommandPort>, session: Arc<dyn SessionTokenPort>) -> Self {
        Self { commands, session }
    }

    pub async fn execute(&self, id: i64) -> Result<String, SurveyEditError> {
        let span = info_span!("usecase.surveys.delete", survey_id = id);
        async {
            require_session(self.session.as_ref()).await?;
            Ok(self.commands.delete(id).await?)
        }
        .instrument(span)
        .await
    }
}
