use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{KeywordRecord, Suggestion};

/// An uploaded resume. `content` holds the file bytes base64-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: u64,
    pub user_id: Option<u64>,
    pub name: String,
    pub content: String,
    pub file_name: String,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewResume {
    pub user_id: Option<u64>,
    pub name: String,
    pub content: String,
    pub file_name: String,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}

/// Resume metadata without the file body, as listed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub id: u64,
    pub name: String,
    pub file_name: String,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Resume> for ResumeSummary {
    fn from(resume: &Resume) -> Self {
        Self {
            id: resume.id,
            name: resume.name.clone(),
            file_name: resume.file_name.clone(),
            file_type: resume.file_type.clone(),
            created_at: resume.created_at,
        }
    }
}

/// A persisted scoring run of one resume against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScore {
    pub id: u64,
    pub resume_id: Option<u64>,
    pub job_description: String,
    pub score: u32,
    pub keywords: Vec<KeywordRecord>,
    pub suggestions: Vec<Suggestion>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAtsScore {
    pub resume_id: Option<u64>,
    pub job_description: String,
    pub score: u32,
    pub keywords: Vec<KeywordRecord>,
    pub suggestions: Vec<Suggestion>,
    pub created_at: DateTime<Utc>,
}
