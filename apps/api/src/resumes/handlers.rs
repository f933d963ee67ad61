//! Axum route handlers for the Resume API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{AtsScore, NewAtsScore, NewResume, ResumeSummary};
use crate::resumes::upload::{read_upload_form, resolve_file_type, DEFAULT_RESUME_NAME};
use crate::scoring::rating::ScoreRating;
use crate::scoring::{KeywordRecord, Suggestion};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_id: u64,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub id: u64,
    pub score: u32,
    pub keywords: Vec<KeywordRecord>,
    pub suggestions: Vec<Suggestion>,
    pub rating: ScoreRating,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/upload
///
/// Accepts a multipart PDF or DOCX under `resume` plus an optional `name`.
/// The file body is stored base64-encoded; no text extraction happens here.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeSummary>), AppError> {
    let form = read_upload_form(&mut multipart, state.config.max_upload_bytes).await?;

    let file = form
        .file
        .ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;
    let file_type = resolve_file_type(&file.file_name, file.content_type.as_deref())?;

    let resume = state
        .store
        .create_resume(NewResume {
            user_id: Some(state.config.default_user_id),
            name: form.name.unwrap_or_else(|| DEFAULT_RESUME_NAME.to_string()),
            content: STANDARD.encode(&file.data),
            file_name: file.file_name,
            file_type: file_type.to_string(),
            created_at: Utc::now(),
        })
        .await;

    info!(
        "Stored resume {} ({}, {} bytes)",
        resume.id,
        resume.file_type,
        file.data.len()
    );

    Ok((StatusCode::CREATED, Json(ResumeSummary::from(&resume))))
}

/// POST /api/resume/analyze
///
/// Scores a stored resume against a job description and persists the result.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let resume = state
        .store
        .get_resume(request.resume_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {} not found", request.resume_id)))?;

    let result = state
        .scorer
        .score(&resume.content, &request.job_description)?;
    info!(
        "ATS score {}/100 for resume {} ({} keywords)",
        result.score,
        resume.id,
        result.keywords.len()
    );

    let saved = state
        .store
        .create_ats_score(NewAtsScore {
            resume_id: Some(resume.id),
            job_description: request.job_description,
            score: result.score,
            keywords: result.keywords,
            suggestions: result.suggestions,
            created_at: Utc::now(),
        })
        .await;

    Ok(Json(AnalyzeResponse {
        id: saved.id,
        score: saved.score,
        rating: ScoreRating::for_score(saved.score),
        keywords: saved.keywords,
        suggestions: saved.suggestions,
    }))
}

/// GET /api/resumes
///
/// Lists the default user's resumes without file content.
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<Vec<ResumeSummary>> {
    let resumes = state
        .store
        .list_resumes_by_user(state.config.default_user_id)
        .await;
    Json(resumes.iter().map(ResumeSummary::from).collect())
}

/// GET /api/resume/:id/scores
///
/// Returns every score recorded for a resume, oldest first. Unknown resumes
/// yield an empty list.
pub async fn handle_list_scores(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AtsScore>>, AppError> {
    let resume_id = parse_id(&id, "resume")?;
    Ok(Json(state.store.list_ats_scores_by_resume(resume_id).await))
}

/// GET /api/scores/:id
pub async fn handle_get_score(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AtsScore>, AppError> {
    let score_id = parse_id(&id, "score")?;
    state
        .store
        .get_ats_score(score_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Score {score_id} not found")))
}

/// DELETE /api/resume/:id
///
/// Removes the resume. Scores already recorded for it are kept.
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let resume_id = parse_id(&id, "resume")?;
    if state.store.delete_resume(resume_id).await {
        info!("Deleted resume {resume_id}");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Resume {resume_id} not found")))
    }
}

fn parse_id(raw: &str, what: &str) -> Result<u64, AppError> {
    raw.parse::<u64>()
        .map_err(|_| AppError::Validation(format!("Invalid {what} ID '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_digits() {
        assert_eq!(parse_id("42", "resume").unwrap(), 42);
    }

    #[test]
    fn test_parse_id_rejects_non_numeric() {
        let err = parse_id("abc", "resume").unwrap_err();
        assert!(err.to_string().contains("Invalid resume ID"));
        assert!(parse_id("-1", "score").is_err());
    }

    #[test]
    fn test_analyze_request_uses_camel_case() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"resumeId": 3, "jobDescription": "Rust engineer"}"#).unwrap();
        assert_eq!(req.resume_id, 3);
        assert_eq!(req.job_description, "Rust engineer");
    }
}
