// Resume API: upload, analyze against a job description, list and fetch scores.
// Scoring goes through the `ResumeScorer` in AppState; storage through `Store`.

pub mod handlers;
pub mod upload;
