//! # Dependency wiring
//!
//! Builds the infrastructure adapters and injects them into the use cases.
//! This is the only place that depends on `sc-infra` and `sc-app` together;
//! it assembles, it does not decide.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sc_app::usecases::{
    ActivateAccount, CreateSurvey, DeleteSurvey, GetSurvey, GetSurveyForOwner,
    GetSurveyForSubmission, ListMySurveys, ListSurveys, ListUserSurveys, LoginUser, Logout,
    StartRegistration, UpdateSurvey,
};
use sc_core::ports::{
    AccountAvailabilityPort, AuthenticationPort, ClockPort, RegistrationPort, SessionTokenPort,
    SurveyCommandPort, SurveyQueryPort,
};
use sc_core::ClientConfig;
use sc_infra::{
    ApiClient, ApiClientError, FileSessionTokenStore, HttpAuthApi, HttpSurveyApi, SystemClock,
};

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClient(#[from] ApiClientError),

    #[error("no data directory available for a relative session file: {0}")]
    DataDir(PathBuf),
}

const APP_DIR_NAME: &str = "survey-client";

/// Every use case the UI layer drives, ready to call.
pub struct AppServices {
    pub start_registration: StartRegistration,
    pub login: LoginUser,
    pub logout: Logout,
    pub activate_account: ActivateAccount,
    pub list_surveys: ListSurveys,
    pub list_user_surveys: ListUserSurveys,
    pub list_my_surveys: ListMySurveys,
    pub get_survey: GetSurvey,
    pub get_survey_for_owner: GetSurveyForOwner,
    pub get_survey_for_submission: GetSurveyForSubmission,
    pub create_survey: CreateSurvey,
    pub update_survey: UpdateSurvey,
    pub delete_survey: DeleteSurvey,
}

/// Adapters handed to [`assemble`].
struct Ports {
    clock: Arc<dyn ClockPort>,
    availability: Arc<dyn AccountAvailabilityPort>,
    registration: Arc<dyn RegistrationPort>,
    auth: Arc<dyn AuthenticationPort>,
    surveys: Arc<dyn SurveyQueryPort>,
    survey_commands: Arc<dyn SurveyCommandPort>,
    session: Arc<dyn SessionTokenPort>,
}

/// Wire the HTTP and file adapters described by `config`.
///
/// A relative `session_file` is placed under the platform's local data
/// directory.
pub fn wire_services(config: &ClientConfig) -> WiringResult<AppServices> {
    let session_path = resolve_session_path(&config.session_file, dirs::data_local_dir())?;
    tracing::info!(
        api = %config.api_base_url,
        session_file = %session_path.display(),
        "wiring survey client services"
    );

    let client = ApiClient::from_config(config)?;
    let session: Arc<dyn SessionTokenPort> = Arc::new(FileSessionTokenStore::new(session_path));
    let auth_api = Arc::new(HttpAuthApi::new(client.clone()));
    let survey_api = Arc::new(HttpSurveyApi::new(client, session.clone()));

    Ok(assemble(
        config,
        Ports {
            clock: Arc::new(SystemClock),
            availability: auth_api.clone(),
            registration: auth_api.clone(),
            auth: auth_api,
            surveys: survey_api.clone(),
            survey_commands: survey_api,
            session,
        },
    ))
}

fn assemble(config: &ClientConfig, ports: Ports) -> AppServices {
    let Ports {
        clock,
        availability,
        registration,
        auth,
        surveys,
        survey_commands,
        session,
    } = ports;

    AppServices {
        start_registration: StartRegistration::new(config, clock, availability, registration),
        login: LoginUser::new(auth.clone(), session.clone()),
        logout: Logout::new(session.clone()),
        activate_account: ActivateAccount::new(auth),
        list_surveys: ListSurveys::new(surveys.clone()),
        list_user_surveys: ListUserSurveys::new(surveys.clone()),
        list_my_surveys: ListMySurveys::new(surveys.clone(), session.clone()),
        get_survey: GetSurvey::new(surveys.clone()),
        get_survey_for_owner: GetSurveyForOwner::new(surveys.clone()),
        get_survey_for_submission: GetSurveyForSubmission::new(surveys),
        create_survey: CreateSurvey::new(survey_commands.clone(), session.clone()),
        update_survey: UpdateSurvey::new(survey_commands.clone(), session.clone()),
        delete_survey: DeleteSurvey::new(survey_commands, session),
    }
}

fn resolve_session_path(session_file: &Path, data_dir: Option<PathBuf>) -> WiringResult<PathBuf> {
    if session_file.is_absolute() {
        return Ok(session_file.to_path_buf());
    }
    data_dir
        .map(|dir| dir.join(APP_DIR_NAME).join(session_file))
        .ok_or_else(|| WiringError::DataDir(session_file.to_path_buf()))
}
