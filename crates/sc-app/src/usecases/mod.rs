//! Business logic use cases
//!
//! Registration is a stateful flow (one [`RegistrationWizard`] per sign-up
//! session); everything else is a single request/response use case.

pub mod auth;
pub mod registration;
pub mod surveys;

pub use auth::{ActivateAccount, ActivationError, LoginError, LoginUser, Logout};
pub use registration::{RegistrationWizard, RegistrationWizardError, StartRegistration};
pub use surveys::{
    CreateSurvey, DeleteSurvey, GetSurvey, GetSurveyForOwner, GetSurveyForSubmission,
    ListMySurveys, ListSurveys, ListSurveysError, ListUserSurveys, SurveyEditError, UpdateSurvey,
};
