//! Resume and ATS score storage.
//!
//! `MemStore` keeps everything in process memory, keyed by per-table
//! auto-increment ids starting at 1. Ids are never reused after a delete.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::resume::{AtsScore, NewAtsScore, NewResume, Resume};

/// Storage backend for resumes and their scores.
///
/// Carried in `AppState` as `Arc<dyn Store>`.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_resume(&self, resume: NewResume) -> Resume;
    async fn get_resume(&self, id: u64) -> Option<Resume>;
    async fn list_resumes_by_user(&self, user_id: u64) -> Vec<Resume>;
    async fn delete_resume(&self, id: u64) -> bool;

    async fn create_ats_score(&self, score: NewAtsScore) -> AtsScore;
    async fn get_ats_score(&self, id: u64) -> Option<AtsScore>;
    async fn list_ats_scores_by_resume(&self, resume_id: u64) -> Vec<AtsScore>;
}

#[derive(Default)]
pub struct MemStore {
    inner: RwLock<Tables>,
}

struct Tables {
    resumes: BTreeMap<u64, Resume>,
    ats_scores: BTreeMap<u64, AtsScore>,
    next_resume_id: u64,
    next_ats_score_id: u64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            resumes: BTreeMap::new(),
            ats_scores: BTreeMap::new(),
            next_resume_id: 1,
            next_ats_score_id: 1,
        }
    }
}

impl MemStore {
    pub fn new() -> Self {
        info!("In-memory store initialized");
        Self::default()
    }
}

#[async_trait]
impl Store for MemStore {
    async fn create_resume(&self, new: NewResume) -> Resume {
        let mut tables = self.inner.write().await;
        let id = tables.next_resume_id;
        tables.next_resume_id += 1;

        let resume = Resume {
            id,
            user_id: new.user_id,
            name: new.name,
            content: new.content,
            file_name: new.file_name,
            file_type: new.file_type,
            created_at: new.created_at,
        };
        tables.resumes.insert(id, resume.clone());
        resume
    }

    async fn get_resume(&self, id: u64) -> Option<Resume> {
        self.inner.read().await.resumes.get(&id).cloned()
    }

    async fn list_resumes_by_user(&self, user_id: u64) -> Vec<Resume> {
        self.inner
            .read()
            .await
            .resumes
            .values()
            .filter(|r| r.user_id == Some(user_id))
            .cloned()
            .collect()
    }

    async fn delete_resume(&self, id: u64) -> bool {
        self.inner.write().await.resumes.remove(&id).is_some()
    }

    async fn create_ats_score(&self, new: NewAtsScore) -> AtsScore {
        let mut tables = self.inner.write().await;
        let id = tables.next_ats_score_id;
        tables.next_ats_score_id += 1;

        let score = AtsScore {
            id,
            resume_id: new.resume_id,
            job_description: new.job_description,
            score: new.score,
            keywords: new.keywords,
            suggestions: new.suggestions,
            created_at: new.created_at,
        };
        tables.ats_scores.insert(id, score.clone());
        score
    }

    async fn get_ats_score(&self, id: u64) -> Option<AtsScore> {
        self.inner.read().await.ats_scores.get(&id).cloned()
    }

    async fn list_ats_scores_by_resume(&self, resume_id: u64) -> Vec<AtsScore> {
        self.inner
            .read()
            .await
            .ats_scores
            .values()
            .filter(|s| s.resume_id == Some(resume_id))
            .cloned()
            .collect()
    }
}
