//! ATS Scoring — keyword-overlap score of a resume against a job description.
//!
//! Default: `KeywordAtsScorer` (pure, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>` so the backend can be swapped
//! without touching handlers.

pub mod decode;
pub mod keywords;
pub mod rating;
pub mod suggestions;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::decode::decode_resume_content;
use crate::scoring::keywords::{count_keyword_matches, extract_keywords};
use crate::scoring::suggestions::build_suggestions;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One job-description keyword and how often it appears in the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    pub matches: u32,
    pub found: bool, // matches > 0
}

/// A titled group of improvement hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub items: Vec<String>,
}

/// Full scoring output returned to callers and persisted alongside the JD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32, // 0 – 100
    pub keywords: Vec<KeywordRecord>,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores resume content against a job description.
///
/// Carried in `AppState` as `Arc<dyn ResumeScorer>`.
pub trait ResumeScorer: Send + Sync {
    fn score(
        &self,
        resume_content: &str,
        job_description: &str,
    ) -> Result<ScoreResult, ScoreError>;
}

/// Whole-word keyword overlap scorer.
///
/// Algorithm:
/// 1. Decode the resume from base64 (falls back to the raw text)
/// 2. Extract up to 20 distinct JD tokens longer than 3 characters
/// 3. Count case-insensitive whole-word matches of each token
/// 4. score = round(100 × found / total), 0 when there are no tokens
pub struct KeywordAtsScorer;

impl ResumeScorer for KeywordAtsScorer {
    fn score(
        &self,
        resume_content: &str,
        job_description: &str,
    ) -> Result<ScoreResult, ScoreError> {
        score_resume(resume_content, job_description)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn score_resume(
    resume_content: &str,
    job_description: &str,
) -> Result<ScoreResult, ScoreError> {
    if job_description.trim().is_empty() {
        return Err(ScoreError::InvalidInput(
            "job description cannot be empty".to_string(),
        ));
    }

    let text = decode_resume_content(resume_content);

    let keywords: Vec<KeywordRecord> = extract_keywords(job_description)
        .into_iter()
        .map(|keyword| {
            let matches = count_keyword_matches(&text, &keyword);
            KeywordRecord {
                keyword,
                matches,
                found: matches > 0,
            }
        })
        .collect();

    let score = compute_score(&keywords);
    let suggestions = build_suggestions(&keywords);

    Ok(ScoreResult {
        score,
        keywords,
        suggestions,
    })
}

/// Percentage of keywords found, rounded half away from zero.
fn compute_score(keywords: &[KeywordRecord]) -> u32 {
    if keywords.is_empty() {
        return 0;
    }
    let found = keywords.iter().filter(|k| k.found).count();
    ((found as f64 / keywords.len() as f64) * 100.0).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
