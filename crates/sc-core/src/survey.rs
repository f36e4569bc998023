//! Survey models as served by the backend: listing cards and the full
//! editable survey with its questions.

use serde::{Deserialize, Serialize};

/// Survey card shown in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub creator_full_name: String,
    pub creator_username: String,
    #[serde(default)]
    pub creator_profile_picture: Option<String>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub picture_url: Option<String>,
}

/// One page of a paged survey listing. `page` is 1-based, like
/// [`PageRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyPage {
    pub surveys: Vec<SurveySummary>,
    pub page: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    #[error("page numbers start at 1")]
    PageZero,
    #[error("page size must be between 1 and {max}, got {size}")]
    InvalidSize { size: u32, max: u32 },
}

/// 1-based page request as the UI counts pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub const MAX_SIZE: u32 = 100;

    pub fn new(page: u32, size: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::PageZero);
        }
        if size == 0 || size > Self::MAX_SIZE {
            return Err(PageRequestError::InvalidSize {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Page index on the wire, where the backend counts from zero.
    pub fn zero_based_page(&self) -> u32 {
        self.page - 1
    }
}

/// Kind of answer a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    SeleccionUnica,
    SeleccionMultiple,
    Abierta,
}

impl QuestionType {
    /// Open questions take free text and carry no options.
    pub fn takes_options(&self) -> bool {
        !matches!(self, QuestionType::Abierta)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

/// A complete survey, as created or edited by its owner and as served by the
/// owner and submission views.
///
/// `average_rating`, `rating_count` and `creation_date` are filled in by the
/// backend and never sent back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyDraftError {
    #[error("El título es obligatorio")]
    MissingTitle,
    #[error("La encuesta debe tener al menos una pregunta")]
    NoQuestions,
    #[error("La pregunta {index} no tiene texto")]
    BlankQuestion { index: usize },
    #[error("La pregunta {index} necesita al menos una opción")]
    MissingOptions { index: usize },
}

impl SurveySubmission {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            picture_url: None,
            questions: Vec::new(),
            average_rating: None,
            rating_count: None,
            creation_date: None,
        }
    }

    /// Checks a draft before it is sent. Question indexes in errors are
    /// 1-based, as shown to the user.
    pub fn validate(&self) -> Result<(), SurveyDraftError> {
        if self.title.trim().is_empty() {
            return Err(SurveyDraftError::MissingTitle);
        }
        if self.questions.is_empty() {
            return Err(SurveyDraftError::NoQuestions);
        }
        for (i, question) in self.questions.iter().enumerate() {
            let index = i + 1;
            if question.text.trim().is_empty() {
                return Err(SurveyDraftError::BlankQuestion { index });
            }
            if question.question_type.takes_options() && question.options.is_empty() {
                return Err(SurveyDraftError::MissingOptions { index });
            }
        }
        Ok(())
    }
}
