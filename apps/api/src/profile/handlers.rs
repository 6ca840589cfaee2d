//! Axum route handlers for the profile session.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::entries::{
    EducationEntry, EducationField, EntryId, QaEntry, QaField, WorkEntry, WorkField,
};
use crate::models::profile::{Profile, ProfileKey};
use crate::models::snapshot::EXPORT_FILENAME;
use crate::profile::completion::CompletionReport;
use crate::profile::projection::{
    project_all, project_education_entry, project_profile, project_qa_entry, project_skills,
    project_work_entry,
};
use crate::profile::search::{search, SearchHits};
use crate::profile::session::ImportSummary;
use crate::profile::snapshot::snapshot_to_json;
use crate::profile::suggestions::remaining_suggestions;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub field: ProfileKey,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    pub skill: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// An empty body means "no initial fields"; anything else must be a valid
/// list of field patches.
fn parse_initial_fields<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, AppError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(body)
        .map_err(|e| AppError::Validation(format!("Invalid field list: {e}")))
}

fn missing_entry(section: &str, id: EntryId) -> AppError {
    AppError::NotFound(format!("No {section} entry with id {id}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.session.read().await.profile().clone())
}

/// PATCH /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(req): Json<ProfileUpdate>,
) -> Json<Profile> {
    let mut session = state.session.write().await;
    info!("Updated profile field {}", req.field.as_str());
    session.set_profile_field(req.field, req.value);
    Json(session.profile().clone())
}

// ────────────────────────────────────────────────────────────────────────────
// Work history
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<WorkEntry>> {
    Json(state.session.read().await.jobs().to_vec())
}

/// POST /api/v1/jobs
///
/// Body is an optional list of field patches applied over a blank entry.
/// An unparseable list is rejected rather than ignored.
pub async fn handle_add_job(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<WorkEntry>), AppError> {
    let initial = parse_initial_fields(&body)?;
    let mut session = state.session.write().await;
    let id = session.add_job(initial);
    info!("Added work entry {id}");
    let entry = session
        .job(id)
        .cloned()
        .ok_or_else(|| missing_entry("work", id))?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PATCH /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(field): Json<WorkField>,
) -> StatusCode {
    if state.session.write().await.update_job(EntryId(id), field) {
        info!("Updated work entry {id}");
    }
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_remove_job(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    if state.session.write().await.remove_job(EntryId(id)) {
        info!("Removed work entry {id}");
    }
    StatusCode::NO_CONTENT
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/education
pub async fn handle_list_education(State(state): State<AppState>) -> Json<Vec<EducationEntry>> {
    Json(state.session.read().await.education().to_vec())
}

/// POST /api/v1/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<EducationEntry>), AppError> {
    let initial = parse_initial_fields(&body)?;
    let mut session = state.session.write().await;
    let id = session.add_education(initial);
    info!("Added education entry {id}");
    let entry = session
        .education_entry(id)
        .cloned()
        .ok_or_else(|| missing_entry("education", id))?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PATCH /api/v1/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(field): Json<EducationField>,
) -> StatusCode {
    if state
        .session
        .write()
        .await
        .update_education(EntryId(id), field)
    {
        info!("Updated education entry {id}");
    }
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> StatusCode {
    if state.session.write().await.remove_education(EntryId(id)) {
        info!("Removed education entry {id}");
    }
    StatusCode::NO_CONTENT
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.session.read().await.skills().to_vec())
}

/// POST /api/v1/skills
///
/// Blank and duplicate skills are ignored; the response is the set either way.
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(req): Json<SkillRequest>,
) -> Json<Vec<String>> {
    let mut session = state.session.write().await;
    if session.add_skill(&req.skill) {
        info!("Added skill '{}'", req.skill.trim());
    }
    Json(session.skills().to_vec())
}

/// DELETE /api/v1/skills
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Json(req): Json<SkillRequest>,
) -> Json<Vec<String>> {
    let mut session = state.session.write().await;
    if session.remove_skill(&req.skill) {
        info!("Removed skill '{}'", req.skill);
    }
    Json(session.skills().to_vec())
}

// ────────────────────────────────────────────────────────────────────────────
// Q&A
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/qas
pub async fn handle_list_qas(State(state): State<AppState>) -> Json<Vec<QaEntry>> {
    Json(state.session.read().await.qas().to_vec())
}

/// POST /api/v1/qas
pub async fn handle_add_qa(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<QaEntry>), AppError> {
    let initial = parse_initial_fields(&body)?;
    let mut session = state.session.write().await;
    let id = session.add_qa(initial);
    info!("Added Q&A entry {id}");
    let entry = session
        .qa(id)
        .cloned()
        .ok_or_else(|| missing_entry("Q&A", id))?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PATCH /api/v1/qas/:id
pub async fn handle_update_qa(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(field): Json<QaField>,
) -> StatusCode {
    if state.session.write().await.update_qa(EntryId(id), field) {
        info!("Updated Q&A entry {id}");
    }
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/qas/:id
pub async fn handle_remove_qa(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    if state.session.write().await.remove_qa(EntryId(id)) {
        info!("Removed Q&A entry {id}");
    }
    StatusCode::NO_CONTENT
}

/// GET /api/v1/suggestions/questions
pub async fn handle_list_suggestions(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(remaining_suggestions(state.session.read().await.qas()))
}

/// POST /api/v1/suggestions/questions
///
/// Adds a Q&A entry for one of the currently offered suggestions.
pub async fn handle_add_suggestion(
    State(state): State<AppState>,
    Json(req): Json<SuggestionRequest>,
) -> Result<(StatusCode, Json<QaEntry>), AppError> {
    let mut session = state.session.write().await;
    if !remaining_suggestions(session.qas()).contains(&req.question.as_str()) {
        return Err(AppError::Validation(format!(
            "'{}' is not an offered suggestion",
            req.question
        )));
    }
    let id = session.add_qa([QaField::Question(req.question)]);
    info!("Added suggested Q&A entry {id}");
    let entry = session
        .qa(id)
        .cloned()
        .ok_or_else(|| missing_entry("Q&A", id))?;
    Ok((StatusCode::CREATED, Json(entry)))
}

// ────────────────────────────────────────────────────────────────────────────
// Copy text
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/copy/profile
pub async fn handle_copy_profile(State(state): State<AppState>) -> String {
    project_profile(state.session.read().await.profile())
}

/// GET /api/v1/copy/jobs
pub async fn handle_copy_jobs(State(state): State<AppState>) -> String {
    project_all(state.session.read().await.jobs(), project_work_entry)
}

/// GET /api/v1/copy/jobs/:id
pub async fn handle_copy_job(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<String, AppError> {
    let id = EntryId(id);
    let session = state.session.read().await;
    let entry = session.job(id).ok_or_else(|| missing_entry("work", id))?;
    Ok(project_work_entry(entry))
}

/// GET /api/v1/copy/education
pub async fn handle_copy_education(State(state): State<AppState>) -> String {
    project_all(state.session.read().await.education(), project_education_entry)
}

/// GET /api/v1/copy/education/:id
pub async fn handle_copy_education_entry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<String, AppError> {
    let id = EntryId(id);
    let session = state.session.read().await;
    let entry = session
        .education_entry(id)
        .ok_or_else(|| missing_entry("education", id))?;
    Ok(project_education_entry(entry))
}

/// GET /api/v1/copy/skills
pub async fn handle_copy_skills(State(state): State<AppState>) -> String {
    project_skills(state.session.read().await.skills())
}

/// GET /api/v1/copy/qas
pub async fn handle_copy_qas(State(state): State<AppState>) -> String {
    project_all(state.session.read().await.qas(), project_qa_entry)
}

/// GET /api/v1/copy/qas/:id/answer
pub async fn handle_copy_answer(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<String, AppError> {
    let id = EntryId(id);
    let session = state.session.read().await;
    let entry = session.qa(id).ok_or_else(|| missing_entry("Q&A", id))?;
    Ok(entry.answer.clone())
}

// ────────────────────────────────────────────────────────────────────────────
// Derived views
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/completion
pub async fn handle_completion(State(state): State<AppState>) -> Json<CompletionReport> {
    Json(state.session.read().await.completion_report())
}

/// GET /api/v1/search?q=
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchHits> {
    let hits = search(&*state.session.read().await, &params.q);
    debug!("Search '{}' matched {} items", hits.query, hits.total());
    Json(hits)
}

// ────────────────────────────────────────────────────────────────────────────
// Export / import
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/export
pub async fn handle_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.session.read().await.export();
    let body = snapshot_to_json(&snapshot).map_err(anyhow::Error::from)?;
    info!(
        "Exported snapshot ({} jobs, {} education, {} skills, {} Q&A)",
        snapshot.jobs.len(),
        snapshot.education.len(),
        snapshot.skills.len(),
        snapshot.qas.len()
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        body,
    ))
}

/// POST /api/v1/import
///
/// Takes the raw file text. A rejected file leaves the session untouched.
pub async fn handle_import(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportSummary>, AppError> {
    let summary = state.session.write().await.import_str(&body)?;
    Ok(Json(summary))
}
