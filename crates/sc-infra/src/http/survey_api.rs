//! `{api}/surveys` endpoints: listings, full survey views and owner writes.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use sc_core::ports::{
    SessionTokenPort, SurveyCommandError, SurveyCommandPort, SurveyQueryError, SurveyQueryPort,
};
use sc_core::survey::{PageRequest, Question, SurveyPage, SurveySubmission, SurveySummary};

use super::client::{error_message, message_or, ApiClient};

const NO_SURVEYS: &str = "No se encontraron encuestas.";
const NO_SURVEYS_YET: &str = "No hay encuestas. ¡Crea una nueva encuesta para empezar!";
const CREATE_FAILED: &str = "Hubo un error al guardar la encuesta.";
const UPDATE_FAILED: &str = "Hubo un error al modificar la encuesta.";
const DELETE_FAILED: &str = "Hubo un error al eliminar la encuesta.";

/// Survey reads and owner writes over HTTP.
///
/// Requests carry `Authorization: Bearer <token>` whenever a session token is
/// stored. A `204 No Content` answer means the listing is empty and surfaces
/// as [`SurveyQueryError::NoSurveys`]. Writes send the survey as a JSON
/// `surveyRequest` part of a multipart form.
pub struct HttpSurveyApi {
    client: ApiClient,
    session: Arc<dyn SessionTokenPort>,
}

impl HttpSurveyApi {
    pub fn new(client: ApiClient, session: Arc<dyn SessionTokenPort>) -> Self {
        Self { client, session }
    }

    async fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(reqwest::header::ACCEPT, "application/json");
        match self.session.load().await {
            Ok(Some(token)) => request.bearer_auth(token.as_str()),
            Ok(None) => request,
            Err(err) => {
                warn!(error = %err, "session token unreadable, sending anonymous request");
                request
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        page: Option<PageRequest>,
        empty_message: &str,
    ) -> Result<T, SurveyQueryError> {
        let url = self.client.endpoint(segments);
        let mut request = self.client.http().get(url);
        if let Some(page) = page {
            request = request.query(&[
                ("page", page.zero_based_page()),
                ("size", page.size()),
            ]);
        }

        let response = self
            .authorized(request)
            .await
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "survey backend unreachable");
                SurveyQueryError::Unavailable(e.to_string())
            })?;

        decode(response, empty_message).await
    }

    async fn command(
        &self,
        request: RequestBuilder,
        failure_message: &str,
    ) -> Result<String, SurveyCommandError> {
        let response = self.authorized(request).await.send().await.map_err(|e| {
            warn!(error = %e, "survey backend unreachable");
            SurveyCommandError::Unavailable(e.to_string())
        })?;

        let status = response.status();
        debug!(%status, url = %response.url(), "survey backend answered");
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(SurveyCommandError::Unauthorized)
            }
            StatusCode::NOT_FOUND => Err(SurveyCommandError::NotFound),
            s if s.is_success() => response
                .text()
                .await
                .map_err(|e| SurveyCommandError::UnexpectedResponse(e.to_string())),
            _ => Err(SurveyCommandError::Rejected {
                message: message_or(response, failure_message).await,
            }),
        }
    }
}

/// JSON carried in the `surveyRequest` part of a survey write.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SurveyRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    title: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    picture_url: Option<&'a str>,
    questions: &'a [Question],
}

fn survey_form(survey: &SurveySubmission) -> Result<Form, SurveyCommandError> {
    let request = SurveyRequest {
        id: survey.id,
        title: &survey.title,
        description: &survey.description,
        picture_url: survey.picture_url.as_deref(),
        questions: &survey.questions,
    };
    let json =
        serde_json::to_string(&request).map_err(|e| SurveyCommandError::Encode(e.to_string()))?;
    let part = Part::text(json)
        .mime_str("application/json")
        .map_err(|e| SurveyCommandError::Encode(e.to_string()))?;
    Ok(Form::new().part("surveyRequest", part))
}

/// Paged listing as sent by the backend, which counts pages from zero.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePage {
    surveys: Vec<SurveySummary>,
    page: u32,
    total_pages: u32,
}

impl From<WirePage> for SurveyPage {
    fn from(wire: WirePage) -> Self {
        Self {
            surveys: wire.surveys,
            page: wire.page + 1,
            total_pages: wire.total_pages,
        }
    }
}

async fn decode<T: DeserializeOwned>(
    response: Response,
    empty_message: &str,
) -> Result<T, SurveyQueryError> {
    let status = response.status();
    debug!(%status, url = %response.url(), "survey backend answered");
    match status {
        StatusCode::NO_CONTENT => Err(SurveyQueryError::NoSurveys {
            message: empty_message.to_string(),
        }),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SurveyQueryError::Unauthorized),
        StatusCode::NOT_FOUND => Err(SurveyQueryError::NotFound),
        s if s.is_success() => response
            .json::<T>()
            .await
            .map_err(|e| SurveyQueryError::UnexpectedResponse(e.to_string())),
        s => Err(SurveyQueryError::Backend {
            status: s.as_u16(),
            message: error_message(response).await,
        }),
    }
}

#[async_trait]
impl SurveyQueryPort for HttpSurveyApi {
    async fn list(&self, page: PageRequest) -> Result<SurveyPage, SurveyQueryError> {
        self.fetch::<WirePage>(&["surveys"], Some(page), NO_SURVEYS_YET)
            .await
            .map(SurveyPage::from)
    }

    async fn list_by_username(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<SurveyPage, SurveyQueryError> {
        self.fetch::<WirePage>(&["surveys", "user", username, "paged"], Some(page), NO_SURVEYS)
            .await
            .map(SurveyPage::from)
    }

    async fn list_for_current_user(&self) -> Result<Vec<SurveySummary>, SurveyQueryError> {
        self.fetch(&["surveys", "user"], None, NO_SURVEYS_YET).await
    }

    async fn get(&self, id: i64) -> Result<SurveySummary, SurveyQueryError> {
        let id = id.to_string();
        self.fetch(&["surveys", id.as_str()], None, NO_SURVEYS).await
    }

    async fn get_for_owner(&self, id: i64) -> Result<SurveySubmission, SurveyQueryError> {
        let id = id.to_string();
        self.fetch(&["surveys", id.as_str(), "owner"], None, NO_SURVEYS).await
    }

    async fn get_for_submission(&self, id: i64) -> Result<SurveySubmission, SurveyQueryError> {
        let id = id.to_string();
        self.fetch(&["surveys", id.as_str(), "submission"], None, NO_SURVEYS).await
    }
}

#[async_trait]
impl SurveyCommandPort for HttpSurveyApi {
    async fn create(&self, survey: &SurveySubmission) -> Result<String, SurveyCommandError> {
        let request = self
            .client
            .http()
            .post(self.client.endpoint(&["surveys"]))
            .multipart(survey_form(survey)?);
        let message = self.command(request, CREATE_FAILED).await?;
        info!(questions = survey.questions.len(), "survey created");
        Ok(message)
    }

    async fn update(
        &self,
        id: i64,
        survey: &SurveySubmission,
    ) -> Result<String, SurveyCommandError> {
        let path_id = id.to_string();
        let request = self
            .client
            .http()
            .put(self.client.endpoint(&["surveys", path_id.as_str()]))
            .multipart(survey_form(survey)?);
        let message = self.command(request, UPDATE_FAILED).await?;
        info!(survey_id = id, "survey updated");
        Ok(message)
    }

    async fn delete(&self, id: i64) -> Result<String, SurveyCommandError> {
        let path_id = id.to_string();
        let request = self
            .client
            .http()
            .delete(self.client.endpoint(&["surveys", path_id.as_str()]));
        let message = self.command(request, DELETE_FAILED).await?;
        info!(survey_id = id, "survey deleted");
        Ok(message)
    }
}
