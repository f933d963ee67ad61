use serde::{Deserialize, Serialize};

/// Coarse quality band for an ATS score. Drives the colour and copy the web
/// client shows next to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsWork
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScoreBand::Excellent => {
                "Excellent! Your resume is highly optimized for this job description."
            }
            ScoreBand::Good => {
                "Good, but there's room for improvement to make your resume more ATS-friendly."
            }
            ScoreBand::NeedsWork => {
                "Your resume needs significant improvements to pass ATS systems for this job."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRating {
    pub band: ScoreBand,
    pub label: String, // "85%"
    pub description: String,
}

impl ScoreRating {
    pub fn for_score(score: u32) -> Self {
        let band = ScoreBand::from_score(score);
        Self {
            band,
            label: format!("{score}%"),
            description: band.description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::NeedsWork);
    }

    #[test]
    fn test_rating_label_and_description() {
        let rating = ScoreRating::for_score(85);
        assert_eq!(rating.label, "85%");
        assert!(rating.description.starts_with("Excellent!"));
    }

    #[test]
    fn test_band_serde_snake_case() {
        let json = serde_json::to_string(&ScoreBand::NeedsWork).unwrap();
        assert_eq!(json, r#""needs_work""#);
        let band: ScoreBand = serde_json::from_str(r#""good""#).unwrap();
        assert_eq!(band, ScoreBand::Good);
    }
}
