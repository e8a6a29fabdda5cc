//! Request handlers

use crate::http::error::ApiError;
use crate::http::state::AppState;
use crate::web::{PageOutcome, SearchPage};
use axum::{
    Form, Json,
    extract::{State, rejection::JsonRejection},
    response::Html,
};
use scout_application::AnswerQuestionInput;
use scout_domain::{Question, SearchMode, StructuredAnswer};
use serde::Deserialize;
use tokio::time::Instant;
use tracing::info;

/// Body of `POST /api/search`
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub question: String,
    /// `fast` when omitted
    #[serde(default)]
    pub mode: Option<String>,
}

/// Fields of the page form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub question: String,
    pub mode: Option<String>,
}

fn parse_mode(mode: Option<&str>) -> Result<SearchMode, ApiError> {
    match mode.map(str::trim) {
        None | Some("") => Ok(SearchMode::default()),
        Some(value) => Ok(value.parse::<SearchMode>()?),
    }
}

/// Validate the raw fields into a use case input.
fn parse_input(question: String, mode: Option<&str>) -> Result<AnswerQuestionInput, ApiError> {
    let mode = parse_mode(mode)?;
    let question = Question::try_new(question)?;
    Ok(AnswerQuestionInput::new(question, mode))
}

/// POST /api/search
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<StructuredAnswer>, ApiError> {
    let Json(request) = payload?;
    let input = parse_input(request.question, request.mode.as_deref())?;

    info!(mode = %input.mode, "POST /api/search");
    let output = state.use_case().execute(input).await?;
    Ok(Json(output.answer))
}

/// Fallback for other methods on `/api/search`
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// GET /
pub async fn page() -> Html<String> {
    Html(SearchPage::blank().render())
}

/// POST /
///
/// Runs the same pipeline as the JSON API and re-renders the page. Errors
/// are shown in the result panel, so the status is always 200.
pub async fn submit_page(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Html<String> {
    let started = Instant::now();
    let mode = parse_mode(form.mode.as_deref()).unwrap_or_default();
    let page = SearchPage::with_input(form.question.clone(), mode);

    let outcome = match parse_input(form.question, form.mode.as_deref()) {
        Ok(input) => match state.use_case().execute(input).await {
            Ok(output) => PageOutcome::Answer(output.answer),
            Err(err) => PageOutcome::Error(err.to_string()),
        },
        Err(err) => PageOutcome::Error(err.to_string()),
    };

    Html(page.with_outcome(outcome, started.elapsed()).render())
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}
